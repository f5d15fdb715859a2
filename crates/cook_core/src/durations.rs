//! Duration unit tables for timer magnitudes.
//!
//! A [`DurationTable`] maps a dialect (language code, or `""` for the symbolic units `s m h d w M q y`) and a unit
//! name to a [`TimeDiff`]. Calendar units (days, months, years) are kept separate from the fixed-length part because
//! their real length depends on the date they are applied to; [`TimeDiff::approximate_duration`] collapses them using
//! Julian averages.
//!
//! ## Examples
//! ```rust
//! use std::time::Duration;
//! use cook_core::durations::DURATIONS;
//!
//! let minute = DURATIONS.lookup("en", "minutes").unwrap();
//! assert_eq!(minute.approximate_duration(), Duration::from_secs(60));
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A length of time, split into a fixed part and calendar parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeDiff {
    pub duration: Duration,
    pub days: u16,
    pub months: u8,
    pub years: u8,
}

impl TimeDiff {
    pub const fn fixed(duration: Duration) -> Self {
        Self {
            duration,
            days: 0,
            months: 0,
            years: 0,
        }
    }

    pub const fn days(days: u16) -> Self {
        Self {
            duration: Duration::ZERO,
            days,
            months: 0,
            years: 0,
        }
    }

    pub const fn months(months: u8) -> Self {
        Self {
            duration: Duration::ZERO,
            days: 0,
            months,
            years: 0,
        }
    }

    pub const fn years(years: u8) -> Self {
        Self {
            duration: Duration::ZERO,
            days: 0,
            months: 0,
            years,
        }
    }

    /// Average length of this diff: a month counts as 30.4 days and a year as 365.25 days.
    pub fn approximate_duration(&self) -> Duration {
        let day = Duration::from_secs(SECONDS_PER_DAY);
        self.duration
            + day * u32::from(self.days)
            + day * u32::from(self.months) * 304 / 10
            + day * u32::from(self.years) * 36525 / 100
    }
}

/// Dialect → unit name → [`TimeDiff`].
#[derive(Debug, Clone, Default)]
pub struct DurationTable {
    dialects: HashMap<&'static str, HashMap<&'static str, TimeDiff>>,
}

const SECOND: TimeDiff = TimeDiff::fixed(Duration::from_secs(1));
const MINUTE: TimeDiff = TimeDiff::fixed(Duration::from_secs(60));
const HOUR: TimeDiff = TimeDiff::fixed(Duration::from_secs(60 * 60));
const DAY: TimeDiff = TimeDiff::days(1);
const WEEK: TimeDiff = TimeDiff::days(7);
const MONTH: TimeDiff = TimeDiff::months(1);
const QUARTER: TimeDiff = TimeDiff::months(3);
const YEAR: TimeDiff = TimeDiff::years(1);

const SYMBOLIC: &[(&str, TimeDiff)] = &[
    ("s", SECOND),
    ("m", MINUTE),
    ("h", HOUR),
    ("d", DAY),
    ("w", WEEK),
    ("M", MONTH),
    ("q", QUARTER),
    ("y", YEAR),
];

const ENGLISH: &[(&str, TimeDiff)] = &[
    ("second", SECOND),
    ("seconds", SECOND),
    ("minute", MINUTE),
    ("minutes", MINUTE),
    ("hour", HOUR),
    ("hours", HOUR),
    ("day", DAY),
    ("days", DAY),
    ("week", WEEK),
    ("weeks", WEEK),
    ("month", MONTH),
    ("months", MONTH),
    ("year", YEAR),
    ("years", YEAR),
];

const SWEDISH: &[(&str, TimeDiff)] = &[
    ("sekund", SECOND),
    ("sekunder", SECOND),
    ("minut", MINUTE),
    ("minuter", MINUTE),
    ("timme", HOUR),
    ("timmar", HOUR),
    ("dag", DAY),
    ("dagar", DAY),
    ("vecka", WEEK),
    ("veckor", WEEK),
    ("månad", MONTH),
    ("månader", MONTH),
    ("år", YEAR),
];

/// The built-in tables, built on first use.
pub static DURATIONS: LazyLock<DurationTable> = LazyLock::new(DurationTable::builtin);

impl DurationTable {
    /// Tables for the symbolic dialect `""`, `"en"` and `"sv"`.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert_dialect("", SYMBOLIC);
        table.insert_dialect("en", ENGLISH);
        table.insert_dialect("sv", SWEDISH);
        table
    }

    pub fn insert_dialect(&mut self, dialect: &'static str, units: &[(&'static str, TimeDiff)]) {
        self.dialects
            .entry(dialect)
            .or_default()
            .extend(units.iter().copied());
    }

    /// Look up `unit` in `dialect`, falling back to the symbolic units.
    ///
    /// Matching is exact first, then case-insensitive within the dialect (the symbolic `m`/`M` pair stays
    /// case-sensitive).
    pub fn lookup(&self, dialect: &str, unit: &str) -> Option<TimeDiff> {
        let unit = unit.trim();
        if let Some(units) = self.dialects.get(dialect) {
            if let Some(diff) = units.get(unit) {
                return Some(*diff);
            }
            if !dialect.is_empty() {
                let lower = unit.to_lowercase();
                if let Some(diff) = units.get(lower.as_str()) {
                    return Some(*diff);
                }
            }
        }
        self.dialects.get("").and_then(|units| units.get(unit)).copied()
    }

    pub fn has_dialect(&self, dialect: &str) -> bool {
        self.dialects.contains_key(dialect)
    }

    /// Known dialect codes, sorted.
    pub fn dialects(&self) -> Vec<&'static str> {
        let mut dialects: Vec<_> = self.dialects.keys().copied().collect();
        dialects.sort_unstable();
        dialects
    }
}
