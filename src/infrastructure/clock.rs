//! Source of the current year

use chrono::Local;

/// Supplies the current year as a string
pub trait Clock {
    fn current_year(&self) -> String;
}

/// Reads the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> String {
        Local::now().format("%Y").to_string()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    year: String,
}

impl FixedClock {
    pub fn new(year: impl Into<String>) -> Self {
        FixedClock { year: year.into() }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> String {
        self.year.clone()
    }
}
