use anyhow::Result;
use std::env;
use std::process;

use age_calculator::{calculate_age, to_calendar_date, validate, CalendarDate, RawInput};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        // Interactive form (default)
        run_ui_mode()
    } else {
        // One-shot mode
        run_once(&args)
    }
}

fn run_once(args: &[String]) -> Result<()> {
    let json = args.iter().any(|arg| arg == "--json");
    let values: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if values.len() != 3 {
        eprintln!("Usage: age-calculator [<day> <month> <year>] [--json]");
        eprintln!("       (no arguments starts the interactive form)");
        process::exit(2);
    }

    let input = RawInput::new(values[0], values[1], values[2]);
    let today = CalendarDate::today();

    let errors = validate(&input, today);
    if !errors.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&errors)?);
        } else {
            eprintln!("❌ Invalid input:");
            for (field, message) in [
                ("day", errors.day),
                ("month", errors.month),
                ("year", errors.year),
            ] {
                if let Some(message) = message {
                    eprintln!("   {field}: {message}");
                }
            }
        }
        process::exit(1);
    }

    // Validation succeeded, so the triple denotes a real past date.
    let birth = to_calendar_date(&input)
        .ok_or_else(|| anyhow::anyhow!("validated input did not form a calendar date"))?;
    let age = calculate_age(birth, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&age)?);
    } else {
        println!("✓ Age: {}", age.human());
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let mut app = age_calculator::ui::App::new();
    age_calculator::ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ Interactive mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run once: age-calculator <day> <month> <year>");
    process::exit(1);
}
