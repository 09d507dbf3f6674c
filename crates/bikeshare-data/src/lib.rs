//! Data layer for the bikeshare explorer.
//!
//! Reads the per-city CSV exports into a [`table::TripTable`], applies the
//! month / day filters and computes the descriptive statistics reports.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod table;

pub use bikeshare_core as core;
