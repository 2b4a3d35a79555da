use thiserror::Error;

/// Reasons a date string or triple could not become a [`CalendarDate`].
///
/// [`CalendarDate`]: crate::core::date::CalendarDate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected 3 `/`-separated parts, got {count}")]
    SegmentCount { count: usize },

    #[error("segment `{segment}` is not a number")]
    NotNumeric { segment: String },

    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    Impossible { day: i64, month: i64, year: i64 },

    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i64, min: i32, max: i32 },

    #[error("calendar arithmetic normalized {expected} to {actual}")]
    CalendarMismatch { expected: String, actual: String },

    #[error("`{input}` is not a recognizable date")]
    Unparseable { input: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid picker config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
