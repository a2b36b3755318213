use goldenweek::calendar::{GoldenWeekCalendar, SHOWA_DAY};
use goldenweek::window::{golden_week, longest_window};
// example to show the greedy and the longest Golden Week of a range of years
use std::env::args;
fn main() -> goldenweek::Result<()> {
    let args: Vec<String> = args().collect();
    let len = args.len();
    if len < 2 {
        panic!("Usage: {} first [last]", args[0]);
    }
    let first: i32 = args[1].parse().unwrap();
    let last: i32 = if len > 2 { args[2].parse().unwrap() } else { first };
    let rules = GoldenWeekCalendar::with_default_rules()?;
    for year in first..=last {
        let cal = rules.calc_year(year);
        let window = golden_week(&cal, SHOWA_DAY, 1)?;
        match longest_window(&cal, 1) {
            Some(longest) if longest != window => {
                println!("{year}: {window} (longest {longest})")
            }
            _ => println!("{year}: {window}"),
        }
    }
    Ok(())
}
