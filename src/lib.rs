//! Golden Week calculator.
//!
//! Resolves the Japanese public holidays around the turn of April and May for
//! a year and merges them with the surrounding weekends into one vacation
//! window.
//!
//! ```
//! use goldenweek::calendar::{GoldenWeekCalendar, SHOWA_DAY};
//! use goldenweek::window::golden_week;
//!
//! let rules = GoldenWeekCalendar::from_rules(GoldenWeekCalendar::default_rules());
//! let window = golden_week(&rules.calc_year(2022), SHOWA_DAY, 1).unwrap();
//! assert_eq!(window.to_string(), "2022/4/29 ~ 2022/5/8");
//! ```

pub mod calendar;
pub mod error;
pub mod window;

pub use error::{Error, Result};
