//! Year and year-range formatting

use std::fmt;
use std::str::FromStr;

/// Controls how the end year of a range is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearMode {
    /// Full end year (2020-2025)
    #[default]
    Long,
    /// Two-digit end year when both years share a century (2020-25)
    Short,
}

impl FromStr for YearMode {
    type Err = std::convert::Infallible;

    /// Anything other than `short` (case-insensitive) is long form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.to_lowercase() == "short" {
            Ok(YearMode::Short)
        } else {
            Ok(YearMode::Long)
        }
    }
}

impl fmt::Display for YearMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearMode::Long => write!(f, "long"),
            YearMode::Short => write!(f, "short"),
        }
    }
}

/// Format the current year, or a range ending at it.
///
/// Both years are compared as strings, which orders correctly for 4-digit
/// years. Other inputs pass through the same comparison and slicing rules
/// without validation.
///
/// ```
/// use yearcode::domain::year::format_year;
///
/// assert_eq!(format_year("2025", None, "long"), "2025");
/// assert_eq!(format_year("2025", Some("2020"), "short"), "2020-25");
/// assert_eq!(format_year("2025", Some("1995"), "short"), "1995-2025");
/// ```
pub fn format_year(current_year: &str, from: Option<&str>, mode: &str) -> String {
    let mode = YearMode::from_str(mode).unwrap_or_default();

    let from = match from {
        Some(from) if !from.is_empty() && from < current_year => from,
        _ => return current_year.to_string(),
    };

    let end_year = if mode == YearMode::Short && same_century(from, current_year) {
        last_chars(current_year, 2)
    } else {
        current_year
    };

    format!("{}-{}", from, end_year)
}

/// Compare the first two characters of both years
fn same_century(a: &str, b: &str) -> bool {
    a.chars().take(2).eq(b.chars().take(2))
}

/// Last `n` characters of `s` (all of `s` when shorter)
fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
