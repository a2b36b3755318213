use std::path::PathBuf;

/// Errors raised while configuring or computing a Golden Week window.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The allowed gap between vacation days was negative.
    #[error("allowed_gap cannot be negative.")]
    NegativeGap(i64),
    /// A holiday rule file could not be read.
    #[error("cannot read holiday rules from {path}: {source}")]
    RulesIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Holiday rules were not valid JSON, or a result could not be encoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The holiday the window is anchored on does not occur in the year.
    #[error("anchor holiday `{name}` does not occur in {year}")]
    AnchorNotFound { name: String, year: i32 },
    /// No cluster of vacation days in the year contains a holiday.
    #[error("no holiday of {0} falls in a vacation window")]
    NoWindow(i32),
    /// Date arithmetic left the range chrono can represent.
    #[error("date out of range")]
    DateOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
