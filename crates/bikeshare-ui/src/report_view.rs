//! Console text for the four trip reports.
//!
//! Every function returns the complete block for one report, including the
//! heading, the timing line and the closing separator, so the caller only
//! has to write it out.

use std::fmt::Write as _;
use std::time::Duration;

use bikeshare_core::formatting::{format_duration, format_number};
use bikeshare_core::time_utils::month_name;
use bikeshare_data::analysis::{DurationStats, StationStats, TimeStats, TripReport, UserStats};

use crate::table_view::render_value_counts;

/// Printed whenever a value cannot be computed (for example no birth years).
const MISSING: &str = "n/a";

/// Number of dashes in a section separator.
pub const SEPARATOR_WIDTH: usize = 40;

/// The dashed line closing each section.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Notice shown instead of the demographic breakdown.
pub const NO_DEMOGRAPHICS_NOTICE: &str = "Gender & Birth year aren't available for Washington city";

// ── Reports ───────────────────────────────────────────────────────────────────

pub fn render_time_stats(stats: &TimeStats) -> String {
    let month = stats
        .most_common_month
        .map(|m| month_name(m).map_or_else(|| m.to_string(), str::to_string));

    let mut out = heading("Calculating The Most Frequent Times of Travel...");
    let _ = writeln!(out, "The most common month is {}", or_missing(month));
    let _ = writeln!(
        out,
        "The most common day is {}",
        stats.most_common_day.unwrap_or(MISSING)
    );
    let _ = writeln!(
        out,
        "The most common hour is {}",
        or_missing(stats.most_common_hour)
    );
    footer(&mut out, stats.elapsed);
    out
}

pub fn render_station_stats(stats: &StationStats) -> String {
    let mut out = heading("Calculating The Most Popular Stations and Trip...");
    let _ = writeln!(
        out,
        "The most common start station is {}",
        or_missing(stats.most_common_start.as_deref())
    );
    let _ = writeln!(
        out,
        "The most common end station is {}",
        or_missing(stats.most_common_end.as_deref())
    );
    let _ = writeln!(
        out,
        "The most common path is {}",
        or_missing(stats.most_common_route.as_deref())
    );
    footer(&mut out, stats.elapsed);
    out
}

/// Rounded seconds first, then the same span in days / hours / minutes.
pub fn render_duration_stats(stats: &DurationStats) -> String {
    let total = stats.total_seconds();
    let mut out = heading("Calculating Trip Duration...");
    let _ = writeln!(
        out,
        "Total travel time is {} seconds ({})",
        format_number(total as f64, 0),
        format_duration(total)
    );
    match stats.mean_seconds() {
        Some(mean) => {
            let _ = writeln!(
                out,
                "Average travel time is {} seconds ({})",
                format_number(mean as f64, 0),
                format_duration(mean)
            );
        }
        None => {
            let _ = writeln!(out, "Average travel time is {}", MISSING);
        }
    }
    footer(&mut out, stats.elapsed);
    out
}

pub fn render_user_stats(stats: &UserStats) -> String {
    let mut out = heading("Calculating User Stats...");
    out.push_str("The count of user types is\n");
    out.push_str(&render_value_counts("User Type", &stats.user_types));

    match &stats.demographics {
        Some(demo) => {
            out.push_str("\nThe count of gender is\n");
            out.push_str(&render_value_counts("Gender", &demo.genders));
            out.push('\n');
            let _ = writeln!(
                out,
                "The earliest year of birth is {}",
                or_missing(demo.earliest_birth_year)
            );
            let _ = writeln!(
                out,
                "The most recent year of birth is {}",
                or_missing(demo.latest_birth_year)
            );
            let _ = writeln!(
                out,
                "The most common year of birth is {}",
                or_missing(demo.most_common_birth_year)
            );
        }
        None => {
            out.push('\n');
            out.push_str(NO_DEMOGRAPHICS_NOTICE);
            out.push('\n');
        }
    }
    footer(&mut out, stats.elapsed);
    out
}

/// All four blocks in display order.
pub fn render_report(report: &TripReport) -> String {
    let mut out = render_time_stats(&report.time);
    out.push_str(&render_station_stats(&report.stations));
    out.push_str(&render_duration_stats(&report.durations));
    out.push_str(&render_user_stats(&report.users));
    out
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn heading(title: &str) -> String {
    format!("\n{}\n\n", title)
}

fn footer(out: &mut String, elapsed: Duration) {
    let _ = writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64());
    out.push_str(&separator());
    out.push('\n');
}

fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_data::aggregator::{NumericSummary, ValueCount};
    use bikeshare_data::analysis::Demographics;

    fn count(value: &str, n: usize) -> ValueCount<String> {
        ValueCount {
            value: value.to_string(),
            count: n,
        }
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(separator(), "-".repeat(40));
    }

    // ── render_time_stats ─────────────────────────────────────────────────────

    #[test]
    fn test_render_time_stats_uses_month_name() {
        let stats = TimeStats {
            most_common_month: Some(6),
            most_common_day: Some("Friday"),
            most_common_hour: Some(17),
            elapsed: Duration::from_millis(250),
        };
        let out = render_time_stats(&stats);
        assert!(out.contains("The most common month is June\n"));
        assert!(out.contains("The most common day is Friday\n"));
        assert!(out.contains("The most common hour is 17\n"));
        assert!(out.contains("This took 0.25 seconds.\n"));
        assert!(out.ends_with(&format!("{}\n", "-".repeat(40))));
    }

    #[test]
    fn test_render_time_stats_empty_table() {
        let stats = TimeStats {
            most_common_month: None,
            most_common_day: None,
            most_common_hour: None,
            elapsed: Duration::ZERO,
        };
        let out = render_time_stats(&stats);
        assert!(out.contains("The most common month is n/a"));
        assert!(out.contains("The most common hour is n/a"));
    }

    // ── render_station_stats ──────────────────────────────────────────────────

    #[test]
    fn test_render_station_stats() {
        let stats = StationStats {
            most_common_start: Some("Streeter Dr & Grand Ave".to_string()),
            most_common_end: Some("Lake Shore Dr & Monroe St".to_string()),
            most_common_route: Some(
                "Lake Shore Dr & Monroe St , Streeter Dr & Grand Ave".to_string(),
            ),
            elapsed: Duration::ZERO,
        };
        let out = render_station_stats(&stats);
        assert!(out.contains("The most common start station is Streeter Dr & Grand Ave"));
        assert!(out.contains("The most common end station is Lake Shore Dr & Monroe St"));
        assert!(out.contains(
            "The most common path is Lake Shore Dr & Monroe St , Streeter Dr & Grand Ave"
        ));
    }

    // ── render_duration_stats ─────────────────────────────────────────────────

    #[test]
    fn test_render_duration_stats() {
        let stats = DurationStats {
            summary: NumericSummary::from_values(vec![3600.0, 5400.4]),
            elapsed: Duration::ZERO,
        };
        let out = render_duration_stats(&stats);
        assert!(out.contains("Total travel time is 9,000 seconds (2h 30m 0s)"), "{out}");
        assert!(out.contains("Average travel time is 4,500 seconds (1h 15m 0s)"), "{out}");
    }

    #[test]
    fn test_render_duration_stats_no_trips() {
        let stats = DurationStats {
            summary: NumericSummary::default(),
            elapsed: Duration::ZERO,
        };
        let out = render_duration_stats(&stats);
        assert!(out.contains("Average travel time is n/a"));
    }

    // ── render_user_stats ─────────────────────────────────────────────────────

    #[test]
    fn test_render_user_stats_with_demographics() {
        let stats = UserStats {
            user_types: vec![count("Subscriber", 3), count("Customer", 1)],
            demographics: Some(Demographics {
                genders: vec![count("Male", 2), count("Female", 1)],
                earliest_birth_year: Some(1939),
                latest_birth_year: Some(2001),
                most_common_birth_year: Some(1989),
            }),
            elapsed: Duration::ZERO,
        };
        let out = render_user_stats(&stats);
        assert!(out.contains("Subscriber"));
        assert!(out.contains("Female"));
        assert!(out.contains("The earliest year of birth is 1939"));
        assert!(out.contains("The most recent year of birth is 2001"));
        assert!(out.contains("The most common year of birth is 1989"));
        assert!(!out.contains(NO_DEMOGRAPHICS_NOTICE));
    }

    #[test]
    fn test_render_user_stats_without_demographics() {
        let stats = UserStats {
            user_types: vec![count("Subscriber", 2)],
            demographics: None,
            elapsed: Duration::ZERO,
        };
        let out = render_user_stats(&stats);
        assert!(out.contains("Gender & Birth year aren't available for Washington city"));
        assert!(!out.contains("year of birth"));
    }
}
