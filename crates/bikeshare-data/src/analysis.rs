//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each report is a pure computation returning a plain struct; rendering is
//! left to the UI layer. Every report records how long it took to compute.

use std::time::{Duration, Instant};

use crate::aggregator::{mode, value_counts, NumericSummary, ValueCount};
use crate::table::TripTable;

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Most common start month, 1-based.
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<&'static str>,
    /// Most common start hour, 0–23.
    pub most_common_hour: Option<u32>,
    pub elapsed: Duration,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Self {
        let started = Instant::now();
        let rows = table.rows();
        Self {
            most_common_month: mode(rows.iter().map(|t| t.month())),
            // Ties go to the alphabetically first day name.
            most_common_day: mode(rows.iter().map(|t| t.day_name())),
            most_common_hour: mode(rows.iter().map(|t| t.hour())),
            elapsed: started.elapsed(),
        }
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most popular stations and route.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// Most common `"<start> , <end>"` route label.
    pub most_common_route: Option<String>,
    pub elapsed: Duration,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Self {
        let started = Instant::now();
        let rows = table.rows();
        Self {
            most_common_start: mode(rows.iter().map(|t| t.start_station.as_str()))
                .map(str::to_string),
            most_common_end: mode(rows.iter().map(|t| t.end_station.as_str())).map(str::to_string),
            most_common_route: mode(rows.iter().map(|t| t.route())),
            elapsed: started.elapsed(),
        }
    }
}

// ── Durations ─────────────────────────────────────────────────────────────────

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub summary: NumericSummary,
    pub elapsed: Duration,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Self {
        let started = Instant::now();
        let summary = NumericSummary::from_values(table.rows().iter().map(|t| t.trip_duration));
        Self {
            summary,
            elapsed: started.elapsed(),
        }
    }

    /// Sum of all durations, rounded to the nearest second (halves to even).
    pub fn total_seconds(&self) -> i64 {
        self.summary.sum.round_ties_even() as i64
    }

    /// Mean duration rounded like [`total_seconds`](Self::total_seconds);
    /// `None` for no trips.
    pub fn mean_seconds(&self) -> Option<i64> {
        self.summary.mean().map(|m| m.round_ties_even() as i64)
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Gender and birth-year figures, only for cities that publish them.
#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    pub genders: Vec<ValueCount<String>>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

/// Breakdown of the riders behind the trips.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    /// `None` when the city's export has no gender / birth-year columns.
    pub demographics: Option<Demographics>,
    pub elapsed: Duration,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let started = Instant::now();
        let rows = table.rows();

        let user_types = value_counts(rows.iter().filter_map(|t| t.user_type.clone()));

        let demographics = table.city().has_demographics().then(|| {
            let years: Vec<i32> = rows
                .iter()
                .filter_map(|t| t.birth_year)
                .map(|y| y as i32)
                .collect();
            Demographics {
                genders: value_counts(rows.iter().filter_map(|t| t.gender.clone())),
                earliest_birth_year: years.iter().copied().min(),
                latest_birth_year: years.iter().copied().max(),
                most_common_birth_year: mode(years.iter().copied()),
            }
        });

        Self {
            user_types,
            demographics,
            elapsed: started.elapsed(),
        }
    }
}

// ── Full report ───────────────────────────────────────────────────────────────

/// All four reports for one filtered table, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

/// Run every report over `table`.
pub fn analyze_trips(table: &TripTable) -> TripReport {
    let report = TripReport {
        time: TimeStats::compute(table),
        stations: StationStats::compute(table),
        durations: DurationStats::compute(table),
        users: UserStats::compute(table),
    };
    tracing::debug!(
        trips = table.len(),
        city = %table.city(),
        "computed trip report"
    );
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────
