//! Shared building blocks for the bikeshare explorer.
//!
//! Domain types for cities, filters and trip records, the crate-wide error
//! type, CLI settings, data-source configuration and text formatting helpers.

pub mod datasets;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
