use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::error::{BikeshareError, Result};
use crate::time_utils::{parse_weekday, weekday_name};

/// Answer accepted by filter prompts to mean "no constraint".
pub const ALL: &str = "all";

// ── City ──────────────────────────────────────────────────────────────────────

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The lowercase name a user types at the city prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Capitalised name for report text.
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip export inside the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's export carries `Gender` and `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = value.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or(BikeshareError::UnknownCity(wanted))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// The six months covered by the trip exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    /// Case-insensitive lookup by full name.
    pub fn from_name(name: &str) -> Option<Month> {
        let wanted = name.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month constraint chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Every answer the month prompt accepts, lowercase.
    pub fn choices() -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(Month::ALL.iter().map(|m| m.name().to_lowercase()))
            .collect()
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Some(MonthFilter::All);
        }
        Month::from_name(value).map(MonthFilter::Only)
    }

    pub fn matches(&self, month_number: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month_number,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

/// Day-of-week constraint chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Every answer the day prompt accepts, lowercase.
    pub fn choices() -> Vec<String> {
        const ORDER: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        std::iter::once(ALL.to_string())
            .chain(ORDER.iter().map(|d| weekday_name(*d).to_lowercase()))
            .collect()
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Some(DayFilter::All);
        }
        parse_weekday(value).map(DayFilter::Only)
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// The city/month/day triple narrowing which trips are analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    /// Criteria selecting every trip of `city`.
    pub fn whole_city(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (month: {}, day: {})", self.city, self.month, self.day)
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One row of a city's trip export.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file.
    pub index: usize,
    /// Local wall-clock time the trip started.
    pub start_time: NaiveDateTime,
    /// Raw `End Time` text, kept only for display.
    pub end_time: Option<String>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl TripRecord {
    /// Calendar month of the start time (1–12).
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Full weekday name of the start time, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    /// Hour of day of the start time (0–23).
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Start and end station joined into a single route label.
    pub fn route(&self) -> String {
        format!("{} , {}", self.start_station, self.end_station)
    }
}
