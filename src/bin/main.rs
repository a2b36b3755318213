use chrono::{Datelike, Local};
use clap::Parser;
use goldenweek::calendar::{GoldenWeekCalendar, SHOWA_DAY};
use goldenweek::window::{golden_week, longest_window, validate_gap};
use goldenweek::{Error, Result};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "goldenweek", version)]
#[command(about = "Calculate the Go-ldenweek of a year.")]
struct Args {
    /// Target year of the Christian Era, the current year if not positive
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    year: i32,
    /// Maximum gap between holidays to make them continuous for Go-ldenweek
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    gap: i64,
    /// Verbose debugging output
    #[arg(long)]
    verbose: bool,
    /// Report the longest window containing a holiday instead of the one
    /// starting at the anchor holiday
    #[arg(long)]
    longest: bool,
    /// Print the window as JSON
    #[arg(long)]
    json: bool,
    /// JSON file with holiday rules replacing the defaults
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,
    /// Holiday the window starts from
    #[arg(long, default_value = SHOWA_DAY)]
    anchor: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<()> {
    let gap = validate_gap(args.gap)?;
    let year = if args.year <= 0 {
        Local::now().year()
    } else {
        args.year
    };
    let rules = match &args.rules {
        Some(path) => GoldenWeekCalendar::from_file(path)?,
        None => GoldenWeekCalendar::with_default_rules()?,
    };
    debug!("{} holiday rules, allowed gap {gap}", rules.rules().len());

    if !args.json {
        println!("Calculating the Go-ldenweek of {year}.");
    }
    let calendar = rules.calc_year(year);
    let window = if args.longest {
        longest_window(&calendar, gap).ok_or(Error::NoWindow(year))?
    } else {
        golden_week(&calendar, &args.anchor, gap)?
    };

    if args.json {
        println!("{}", serde_json::to_string(&window)?);
    } else {
        println!("Go-ldenweek is {window}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
