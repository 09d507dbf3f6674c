//! In-memory trip table for one city.

use bikeshare_core::models::{City, DayFilter, MonthFilter, TripRecord};

/// The trips of one city, narrowed by the active filters.
///
/// Rows are only ever removed, never edited.
#[derive(Debug, Clone)]
pub struct TripTable {
    city: City,
    rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, rows: Vec<TripRecord>) -> Self {
        Self { city, rows }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every trip whose start month does not match `filter`.
    pub fn retain_month(&mut self, filter: MonthFilter) {
        if filter != MonthFilter::All {
            self.rows.retain(|t| filter.matches(t.month()));
        }
    }

    /// Drop every trip whose start weekday does not match `filter`.
    pub fn retain_day(&mut self, filter: DayFilter) {
        if filter != DayFilter::All {
            self.rows.retain(|t| filter.matches(t.weekday()));
        }
    }

    /// Rows `offset..offset + size`, clamped to the table length.
    pub fn slice(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.rows.len());
        let end = offset.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}
