use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Format used for wall-clock instants handed to the chart renderer.
pub const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point on the timeline axis.
///
/// Catalog dates are partial (`"1990"`, `"1990-04"`, `"1990-04-12"`) and are
/// passed to the renderer exactly as recorded. Open-ended tenures finish at
/// the instant the chart was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartDate {
    Recorded(String),
    Instant(DateTime<Utc>),
}

impl ChartDate {
    /// Wrap a recorded date verbatim, treating blank strings as absent.
    pub fn recorded(value: Option<&str>) -> Option<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| ChartDate::Recorded(v.to_string()))
    }

    pub fn is_instant(&self) -> bool {
        matches!(self, ChartDate::Instant(_))
    }
}

impl fmt::Display for ChartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDate::Recorded(date) => f.write_str(date),
            ChartDate::Instant(instant) => write!(f, "{}", instant.format(INSTANT_FORMAT)),
        }
    }
}

impl From<DateTime<Utc>> for ChartDate {
    fn from(instant: DateTime<Utc>) -> Self {
        ChartDate::Instant(instant)
    }
}

impl Serialize for ChartDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
