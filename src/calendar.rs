//! Japanese public holiday rules and the calendar they produce for a single year.
//! The rule format follows the US exchange calendar of
//! <https://github.com/midnightcodr/usec>

use crate::error::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;

/// Name of the holiday the Golden Week window is anchored on
pub const SHOWA_DAY: &str = "Showa Day";
pub const CONSTITUTION_MEMORIAL_DAY: &str = "Constitution Memorial Day";
pub const GREENERY_DAY: &str = "Greenery Day";
pub const CHILDRENS_DAY: &str = "Children's Day";

/// JSON list of extra rules appended to the defaults
const ADDITIONAL_RULES: &str = "GOLDENWEEK_RULES";

/// Moves the observed date of a holiday whose nominal date falls on `weekday`
/// by `offset` days.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AltDay {
    pub weekday: Weekday,
    pub offset: i64,
}

/// Rules describing days off
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum HolidayRule {
    /// for Japan, `Sat` and `Sun`
    WeekDay(Weekday),
    /// A holiday on the same month and day every year.
    /// `observed` holds the substitution rules, the first matching weekday wins.
    /// `first` and `last` are the first and last year this day is a holiday (inclusively).
    FixedDay {
        name: String,
        month: u32,
        day: u32,
        #[serde(default)]
        observed: Vec<AltDay>,
        #[serde(default)]
        first: Option<i32>,
        #[serde(default)]
        last: Option<i32>,
    },
    /// A single holiday which is valid only once in time.
    SingularDay { name: String, date: NaiveDate },
}

impl HolidayRule {
    pub fn name(&self) -> Option<&str> {
        match self {
            HolidayRule::WeekDay(_) => None,
            HolidayRule::FixedDay { name, .. } | HolidayRule::SingularDay { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    /// Returns the nominal and the observed date of the holiday in `year`,
    /// or `None` if the rule does not produce a holiday that year.
    pub fn calc(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            HolidayRule::WeekDay(_) => None,
            HolidayRule::FixedDay {
                month,
                day,
                observed,
                first,
                last,
                ..
            } => {
                if first.is_some_and(|first| year < first) || last.is_some_and(|last| year > last)
                {
                    return None;
                }
                let actual = NaiveDate::from_ymd_opt(year, *month, *day)?;
                let weekday = actual.weekday();
                let observed = match observed.iter().find(|alt| alt.weekday == weekday) {
                    Some(alt) => actual.checked_add_signed(Duration::days(alt.offset))?,
                    None => actual,
                };
                Some((actual, observed))
            }
            HolidayRule::SingularDay { date, .. } => {
                (date.year() == year).then_some((*date, *date))
            }
        }
    }
}

/// One holiday as it occurs in a given year
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HolidayInstance {
    pub name: String,
    pub actual: NaiveDate,
    pub observed: NaiveDate,
}

/// Holidays and weekend days of a single year
#[derive(Debug, Clone)]
pub struct Calendar {
    year: i32,
    instances: Vec<HolidayInstance>,
    holidays: BTreeSet<NaiveDate>,
    weekdays: Vec<Weekday>,
}

impl Calendar {
    /// Resolve every rule for `year`. Instances keep the order of the rules.
    pub fn calc_calendar(holiday_rules: &[HolidayRule], year: i32) -> Calendar {
        let mut instances = Vec::new();
        let mut holidays = BTreeSet::new();
        let mut weekdays = Vec::new();

        for rule in holiday_rules {
            if let HolidayRule::WeekDay(weekday) = rule {
                weekdays.push(*weekday);
                continue;
            }
            let (Some(name), Some((actual, observed))) = (rule.name(), rule.calc(year)) else {
                continue;
            };
            debug!("----- {name}");
            debug!("actual: {actual}");
            debug!("observed: {observed}");
            debug!("observed weekday: {}", observed.weekday());
            holidays.insert(observed);
            instances.push(HolidayInstance {
                name: name.to_string(),
                actual,
                observed,
            });
        }
        Calendar {
            year,
            instances,
            holidays,
            weekdays,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn instances(&self) -> &[HolidayInstance] {
        &self.instances
    }

    /// Look up a holiday of this year by name
    pub fn instance(&self, name: &str) -> Option<&HolidayInstance> {
        self.instances.iter().find(|instance| instance.name == name)
    }

    /// Returns true if the date falls on a weekend
    pub fn is_weekend(&self, day: NaiveDate) -> bool {
        self.weekdays.contains(&day.weekday())
    }

    /// Returns true if a holiday is observed on the specified day
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns true if the day is a weekend day or an observed holiday
    pub fn is_vacationish(&self, day: NaiveDate) -> bool {
        self.is_weekend(day) || self.is_holiday(day)
    }
}

/// The ordered list of rules Golden Week is built from
#[derive(Debug, Clone)]
pub struct GoldenWeekCalendar {
    holiday_rules: Vec<HolidayRule>,
}

impl GoldenWeekCalendar {
    /// Saturdays, Sundays and the four Golden Week holidays with the
    /// substitute holiday rules in effect since 2007.
    pub fn default_rules() -> Vec<HolidayRule> {
        let fixed = |name: &str, month: u32, day: u32, offset: i64| HolidayRule::FixedDay {
            name: name.to_string(),
            month,
            day,
            observed: vec![AltDay {
                weekday: Weekday::Sun,
                offset,
            }],
            first: None,
            last: None,
        };
        vec![
            // Saturdays
            HolidayRule::WeekDay(Weekday::Sat),
            // Sundays
            HolidayRule::WeekDay(Weekday::Sun),
            fixed(SHOWA_DAY, 4, 29, 1),
            // May 4 and 5 are holidays already, so the substitute is May 6
            fixed(CONSTITUTION_MEMORIAL_DAY, 5, 3, 3),
            fixed(GREENERY_DAY, 5, 4, 2),
            fixed(CHILDRENS_DAY, 5, 5, 1),
        ]
    }

    /// Create a calendar with the default rules plus any rules given as a JSON
    /// list in the `GOLDENWEEK_RULES` environment variable.
    pub fn with_default_rules() -> Result<GoldenWeekCalendar> {
        let mut holiday_rules = Self::default_rules();
        if let Ok(additional_rules) = env::var(ADDITIONAL_RULES) {
            let mut additional_rules: Vec<HolidayRule> = serde_json::from_str(&additional_rules)?;
            debug!("{} additional rules from {ADDITIONAL_RULES}", additional_rules.len());
            holiday_rules.append(&mut additional_rules);
        }
        Ok(GoldenWeekCalendar { holiday_rules })
    }

    pub fn from_rules(holiday_rules: Vec<HolidayRule>) -> GoldenWeekCalendar {
        GoldenWeekCalendar { holiday_rules }
    }

    /// Parse a JSON list of rules, replacing the defaults entirely
    pub fn from_json(json: &str) -> Result<GoldenWeekCalendar> {
        Ok(Self::from_rules(serde_json::from_str(json)?))
    }

    pub fn from_file(path: &Path) -> Result<GoldenWeekCalendar> {
        let json = fs::read_to_string(path).map_err(|source| Error::RulesIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// add an ad-hoc holiday rule to the rule list
    pub fn add_holiday_rule(&mut self, holiday: HolidayRule) -> &mut Self {
        self.holiday_rules.push(holiday);
        self
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.holiday_rules
    }

    /// Resolve the rules for `year`
    pub fn calc_year(&self, year: i32) -> Calendar {
        Calendar::calc_calendar(&self.holiday_rules, year)
    }
}
