//! Two-digit-year calendar dates as printed in an MRZ.

/// A date as printed in an MRZ: two-digit year, month, day.
///
/// The century is deliberately not stored. The printed digits are ambiguous
/// (`51` may be 1951 or 2051) and resolving them requires a reference date
/// that this crate does not take; callers needing an absolute year must
/// layer that on top. Equality and hashing use the three raw components
/// only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzDate {
    /// Year within its century, `0..=99`.
    pub year: u8,
    /// Month, `1..=12` when valid.
    pub month: u8,
    /// Day of month, `1..=31` when valid.
    pub day: u8,
    /// Set by the parser when a date field contained a non-digit.
    pub(crate) malformed: bool,
}

impl MrzDate {
    /// Creates a date from raw two-digit components.
    pub fn new(year: u8, month: u8, day: u8) -> Self {
        debug_assert!(year <= 99);
        MrzDate {
            year,
            month,
            day,
            malformed: false,
        }
    }

    /// Returns whether the components form a real calendar date.
    ///
    /// February length is leap-aware using the raw two-digit year's
    /// divisibility, matching the literal printed digits rather than any
    /// resolved absolute year. A date parsed from a field containing a
    /// non-digit is never calendar-valid.
    pub fn is_calendar_valid(&self) -> bool {
        if self.malformed {
            return false;
        }
        if self.month < 1 || self.month > 12 || self.day < 1 {
            return false;
        }
        self.day <= days_in_month(self.month, self.year)
    }
}

fn days_in_month(month: u8, year: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl PartialEq for MrzDate {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

impl Eq for MrzDate {}

impl std::hash::Hash for MrzDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
    }
}

impl std::fmt::Display for MrzDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.year, self.month, self.day)
    }
}
