//! Location of the per-city trip exports.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::City;

/// Where the loader finds each city's CSV file.
///
/// Built once at startup and passed to the loader explicitly; there is no
/// global city → file table.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Directory holding the exports.
    pub data_dir: PathBuf,
    /// File name per city, relative to `data_dir`.
    pub files: HashMap<City, String>,
}

impl DataConfig {
    /// Standard file names (`chicago.csv`, `new_york_city.csv`,
    /// `washington.csv`) inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let files = City::ALL
            .iter()
            .map(|c| (*c, c.default_file_name().to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    /// Replace the file name used for `city`.
    pub fn with_file(mut self, city: City, file_name: impl Into<String>) -> Self {
        self.files.insert(city, file_name.into());
        self
    }

    /// Full path of the export for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        let name = self
            .files
            .get(&city)
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file_name());
        self.data_dir.join(name)
    }

    /// Cities whose export file is present on disk.
    pub fn available_cities(&self) -> Vec<City> {
        City::ALL
            .into_iter()
            .filter(|c| self.path_for(*c).is_file())
            .collect()
    }

    /// `true` when `dir` looks like a data directory (has the Chicago export).
    pub fn looks_like_data_dir(dir: &Path) -> bool {
        dir.join(City::Chicago.default_file_name()).is_file()
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
