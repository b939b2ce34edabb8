use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub fn all() -> &'static [MonthName; 12] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    /// Map a zero-based month index (0 = January) to its name.
    pub fn from_index0(index: u32) -> Option<Self> {
        Self::all().get(index as usize).copied()
    }

    pub fn index0(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Three-letter axis label, e.g. "Jan".
    pub fn short(&self) -> &'static str {
        &self.as_str()[..3]
    }

    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str().to_lowercase() == lower)
    }
}

impl std::fmt::Display for MonthName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: MonthName,
}

impl YearMonth {
    pub fn new(year: i32, month: MonthName) -> Self {
        Self { year, month }
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        // month0() is always 0..=11
        let month = MonthName::from_index0(date.month0()).unwrap_or(MonthName::January);
        Self::new(date.year(), month)
    }

    /// The month before this one; January rolls back to December of the prior year.
    pub fn previous(&self) -> Self {
        match self.month.index0() {
            0 => Self::new(self.year - 1, MonthName::December),
            i => Self::new(self.year, MonthName::from_index0(i - 1).unwrap_or(MonthName::January)),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month.index0() + 1)
    }
}
