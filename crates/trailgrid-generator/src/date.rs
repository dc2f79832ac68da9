//! Parsing calendar dates from user input.

use chrono::{NaiveDate, format::ParseErrorKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error from [`parse_date`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
#[display("expected a YEAR-MONTH-DAY date: {_0}")]
pub struct DateParseError(#[from] chrono::ParseError);

impl DateParseError {
    /// Returns why the text was rejected.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.0.kind()
    }
}

/// Parses `YEAR-MONTH-DAY`, with or without zero padding.
///
/// Both the ISO form (`2024-03-07`) and the seed key form (`2024-3-7`) are
/// accepted.
///
/// # Errors
///
/// Returns [`DateParseError`] if the text is malformed or the day does not exist.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trailgrid_generator::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(parse_date("2024-03-07")?, expected);
/// assert_eq!(parse_date("2024-3-7")?, expected);
/// assert!(parse_date("2024-2-30").is_err());
/// # Ok::<(), trailgrid_generator::DateParseError>(())
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}
