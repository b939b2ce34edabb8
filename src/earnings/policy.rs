use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use crate::models::{TransactionRecord, YearMonth};

/// Which clock calendar months are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BucketZone {
    /// The viewer's local time zone.
    #[default]
    Local,
    Utc,
}

impl BucketZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Utc => "utc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Some(Self::Local),
            "utc" | "z" => Some(Self::Utc),
            _ => None,
        }
    }

    /// The current calendar month on this clock.
    pub fn today(&self) -> YearMonth {
        match self {
            Self::Local => YearMonth::of(&Local::now()),
            Self::Utc => YearMonth::of(&Utc::now()),
        }
    }

    /// Calendar month of a Unix timestamp, or `None` when it is out of range.
    pub fn month_of_timestamp(&self, secs: i64) -> Option<YearMonth> {
        let instant = DateTime::<Utc>::from_timestamp(secs, 0)?;
        Some(match self {
            Self::Local => YearMonth::of(&instant.with_timezone(&Local)),
            Self::Utc => YearMonth::of(&instant),
        })
    }

    /// Calendar month of an ISO-8601 timestamp.
    ///
    /// Timestamps with an offset are converted to this clock; timestamps
    /// without one are taken as wall-clock time on it. That includes bare
    /// dates: `2024-03-01` is March on every clock, where a browser's
    /// `new Date("2024-03-01")` would mean UTC midnight and land in February
    /// west of Greenwich.
    pub fn month_of_iso(&self, s: &str) -> Option<YearMonth> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(match self {
                Self::Local => YearMonth::of(&dt.with_timezone(&Local)),
                Self::Utc => YearMonth::of(&dt.with_timezone(&Utc)),
            });
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(YearMonth::of(&naive));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| YearMonth::of(&d))
    }
}

impl std::fmt::Display for BucketZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which transactions count as revenue, and on which clock they are bucketed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationPolicy {
    /// Count only records whose reporting category is `charge`.
    pub charges_only: bool,
    pub zone: BucketZone,
}

impl AggregationPolicy {
    pub fn counts(&self, record: &TransactionRecord) -> bool {
        !self.charges_only || record.is_charge()
    }
}
