use crate::age::{calculate_age, AgeResult};
use crate::date::CalendarDate;
use crate::validator::{to_calendar_date, validate, FieldErrors, RawInput};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Day => Field::Month,
            Field::Month => Field::Year,
            Field::Year => Field::Day,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Day => Field::Year,
            Field::Month => Field::Day,
            Field::Year => Field::Month,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Day => "DAY",
            Field::Month => "MONTH",
            Field::Year => "YEAR",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Day => "DD",
            Field::Month => "MM",
            Field::Year => "YYYY",
        }
    }

    /// Maximum digits the field accepts.
    pub fn max_len(self) -> usize {
        match self {
            Field::Day | Field::Month => 2,
            Field::Year => 4,
        }
    }
}

pub struct App {
    pub input: RawInput,
    pub focus: Field,
    pub errors: FieldErrors,
    /// None until the first successful calculation; rendered as "--".
    pub age: Option<AgeResult>,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: RawInput::default(),
            focus: Field::Day,
            errors: FieldErrors::default(),
            age: None,
        }
    }

    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.input.day,
            Field::Month => &self.input.month,
            Field::Year => &self.input.year,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Day => &mut self.input.day,
            Field::Month => &mut self.input.month,
            Field::Year => &mut self.input.year,
        }
    }

    pub fn type_digit(&mut self, c: char) {
        let max_len = self.focus.max_len();
        let text = self.focused_text_mut();
        if text.len() < max_len {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_text_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Validate, then calculate. The error report is replaced wholesale on
    /// every attempt; the age is replaced only on success, so a stale
    /// result stays on screen when a later attempt fails.
    pub fn submit(&mut self, today: CalendarDate) {
        self.errors = validate(&self.input, today);
        if !self.errors.is_empty() {
            return;
        }
        if let Some(birth) = to_calendar_date(&self.input) {
            self.age = Some(calculate_age(birth, today));
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Day => self.errors.day,
            Field::Month => self.errors.month,
            Field::Year => self.errors.year,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.submit(CalendarDate::today()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.focus_previous();
                    } else {
                        app.focus_next();
                    }
                }
                KeyCode::BackTab => app.focus_previous(),
                KeyCode::Right => app.focus_next(),
                KeyCode::Left => app.focus_previous(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) if c.is_ascii_digit() => app.type_digit(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Input fields + error lines
            Constraint::Min(5),    // Result rows
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0]);
    render_fields(f, chunks[1], app);
    render_result(f, chunks[2], app);
    render_status_bar(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Age Calculator",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (i, field) in [Field::Day, Field::Month, Field::Year].iter().enumerate() {
        render_field(f, columns[i], app, *field);
    }
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: Field) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let error = app.field_error(field);
    let focused = app.focus == field;

    // Error styling wins over focus styling, matching the reference form.
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let title_style = if error.is_some() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let text = app.field_text(field);
    let content = if text.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
    };

    let input_box = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(field.title(), title_style)),
    );
    f.render_widget(input_box, rows[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Span::styled(
            message,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        ));
        f.render_widget(error_line, rows[1]);
    }
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    // "--" until the first successful calculation: an unset result must be
    // distinguishable from a computed zero.
    let (years, months, days) = match app.age {
        Some(age) => (
            age.years.to_string(),
            age.months.to_string(),
            age.days.to_string(),
        ),
        None => ("--".to_string(), "--".to_string(), "--".to_string()),
    };

    let value_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC);
    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(years, value_style),
            Span::styled(" years", label_style),
        ]),
        Line::from(vec![
            Span::styled(months, value_style),
            Span::styled(" months", label_style),
        ]),
        Line::from(vec![
            Span::styled(days, value_style),
            Span::styled(" days", label_style),
        ]),
    ];

    let result = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(result, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" next field │ "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" calculate │ "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
