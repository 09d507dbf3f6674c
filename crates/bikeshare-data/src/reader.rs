//! CSV loading for the per-city trip exports.
//!
//! Reads a city's file as named by [`DataConfig`], converts every row into a
//! [`TripRecord`] and applies the month / day filters.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use bikeshare_core::datasets::DataConfig;
use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, FilterCriteria, TripRecord};
use bikeshare_core::time_utils::parse_start_time;
use serde::Deserialize;
use tracing::debug;

use crate::table::TripTable;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the trips for `criteria.city` and keep only those matching the
/// month and day filters.
///
/// An empty result is not an error; callers check [`TripTable::is_empty`].
pub fn load_data(config: &DataConfig, criteria: &FilterCriteria) -> Result<TripTable> {
    let path = config.path_for(criteria.city);

    let load_start = Instant::now();
    let rows = read_trips(&path)?;
    let total = rows.len();

    let mut table = TripTable::new(criteria.city, rows);
    table.retain_month(criteria.month);
    table.retain_day(criteria.day);

    debug!(
        "Loaded {} of {} trips from {} for {} in {:.3}s",
        table.len(),
        total,
        path.display(),
        criteria,
        load_start.elapsed().as_secs_f64()
    );

    Ok(table)
}

/// Load every trip of `city` with no filtering.
pub fn load_city(config: &DataConfig, city: City) -> Result<TripTable> {
    load_data(config, &FilterCriteria::whole_city(city))
}

/// Read and parse a single trip export.
pub fn read_trips(path: &Path) -> Result<Vec<TripRecord>> {
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips_from(file, path)
}

/// Parse trips from any reader. `source` only labels errors.
pub fn read_trips_from<R: Read>(reader: R, source: &Path) -> Result<Vec<TripRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trips = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|e| BikeshareError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        trips.push(raw.into_record(index, source)?);
    }

    Ok(trips)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One CSV row exactly as it appears in the export.
///
/// Columns not listed here (such as the unnamed leading index column) are
/// ignored. `Gender` and `Birth Year` are absent from the Washington file.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self, index: usize, source: &Path) -> Result<TripRecord> {
        let start_time =
            parse_start_time(&self.start_time).ok_or_else(|| BikeshareError::TimestampParse {
                path: source.to_path_buf(),
                row: index + 1,
                value: self.start_time.clone(),
            })?;

        Ok(TripRecord {
            index,
            start_time,
            end_time: self.end_time,
            trip_duration: self.trip_duration,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self.birth_year.filter(|y| y.is_finite()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{DayFilter, Month, MonthFilter};
    use chrono::Weekday;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    fn write_city(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_city(dir.path(), "chicago.csv", CHICAGO);
        write_city(dir.path(), "washington.csv", WASHINGTON);
        dir
    }

    // ── read_trips ────────────────────────────────────────────────────────────

    #[test]
    fn test_read_trips_parses_all_columns() {
        let dir = fixture_dir();
        let trips = read_trips(&dir.path().join("chicago.csv")).unwrap();

        assert_eq!(trips.len(), 5);
        let first = &trips[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.start_station, "Wood St & Hubbard St");
        assert_eq!(first.end_station, "Damen Ave & Chicago Ave");
        assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992.0));
        assert_eq!(first.end_time.as_deref(), Some("2017-06-23 15:14:53"));
    }

    #[test]
    fn test_read_trips_derived_fields() {
        let dir = fixture_dir();
        let trips = read_trips(&dir.path().join("chicago.csv")).unwrap();

        // 2017-06-23 was a Friday.
        assert_eq!(trips[0].month(), 6);
        assert_eq!(trips[0].day_name(), "Friday");
        assert_eq!(trips[0].hour(), 15);
    }

    #[test]
    fn test_read_trips_blank_demographics_become_none() {
        let dir = fixture_dir();
        let trips = read_trips(&dir.path().join("chicago.csv")).unwrap();

        let customer = &trips[4];
        assert_eq!(customer.user_type.as_deref(), Some("Customer"));
        assert!(customer.gender.is_none());
        assert!(customer.birth_year.is_none());
    }

    #[test]
    fn test_read_trips_without_demographic_columns() {
        let dir = fixture_dir();
        let trips = read_trips(&dir.path().join("washington.csv")).unwrap();

        assert_eq!(trips.len(), 2);
        assert!(trips.iter().all(|t| t.gender.is_none()));
        assert!(trips.iter().all(|t| t.birth_year.is_none()));
        assert!((trips[0].trip_duration - 489.066).abs() < 1e-9);
    }

    #[test]
    fn test_read_trips_missing_file() {
        let err = read_trips(Path::new("/tmp/does-not-exist-bikeshare/chicago.csv")).unwrap_err();
        assert!(matches!(err, BikeshareError::FileRead { .. }));
    }

    #[test]
    fn test_read_trips_missing_required_column() {
        let body = "Start Time,Trip Duration\n2017-01-01 00:00:00,60\n";
        let err = read_trips_from(body.as_bytes(), Path::new("broken.csv")).unwrap_err();
        assert!(matches!(err, BikeshareError::Csv { .. }));
        assert!(err.to_string().contains("broken.csv"));
    }

    #[test]
    fn test_read_trips_bad_timestamp_reports_row() {
        let body = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,60,A,B,Subscriber
someday,60,A,B,Subscriber
";
        let err = read_trips_from(body.as_bytes(), Path::new("bad.csv")).unwrap_err();
        match err {
            BikeshareError::TimestampParse { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "someday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_trips_header_only() {
        let body = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
        let trips = read_trips_from(body.as_bytes(), Path::new("empty.csv")).unwrap();
        assert!(trips.is_empty());
    }

    // ── load_data ─────────────────────────────────────────────────────────────

    #[test]
    fn test_load_data_all_returns_every_row() {
        let dir = fixture_dir();
        let config = DataConfig::new(dir.path());

        let table = load_city(&config, City::Chicago).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.city(), City::Chicago);
    }

    #[test]
    fn test_load_data_month_filter() {
        let dir = fixture_dir();
        let config = DataConfig::new(dir.path());
        let criteria = FilterCriteria {
            city: City::Chicago,
            month: MonthFilter::Only(Month::January),
            day: DayFilter::All,
        };

        let table = load_data(&config, &criteria).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|t| t.month() == 1));
    }

    #[test]
    fn test_load_data_day_filter() {
        let dir = fixture_dir();
        let config = DataConfig::new(dir.path());
        // 2017-01-17 was a Tuesday.
        let criteria = FilterCriteria {
            city: City::Chicago,
            month: MonthFilter::All,
            day: DayFilter::Only(Weekday::Tue),
        };

        let table = load_data(&config, &criteria).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].start_station, "Clark St & Randolph St");
    }

    #[test]
    fn test_load_data_combined_filters_can_be_empty() {
        let dir = fixture_dir();
        let config = DataConfig::new(dir.path());
        let criteria = FilterCriteria {
            city: City::Washington,
            month: MonthFilter::Only(Month::February),
            day: DayFilter::Only(Weekday::Mon),
        };

        let table = load_data(&config, &criteria).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_data_uses_configured_file_name() {
        let dir = TempDir::new().unwrap();
        write_city(dir.path(), "dc.csv", WASHINGTON);
        let config = DataConfig::new(dir.path()).with_file(City::Washington, "dc.csv");

        let table = load_city(&config, City::Washington).unwrap();
        assert_eq!(table.len(), 2);
    }
}
