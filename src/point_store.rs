//! Named 2D points and the read-only store they are queried from.
//!
//! Cities are loaded once from a JSON array and never modified afterwards.
//! Both layouts produced by the original data files are accepted:
//!
//! ```json
//! [{ "city": "Alpha", "x": 1.0, "y": 2.0 }]
//! [{ "CityName": "Alpha", "X": 1.0, "Y": 2.0 }]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShieldError};

/// A named city with planar coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// City name, assumed unique (lookups take the first match)
    #[serde(alias = "city", alias = "CityName")]
    pub name: String,
    /// X coordinate
    #[serde(alias = "X")]
    pub x: f64,
    /// Y coordinate
    #[serde(alias = "Y")]
    pub y: f64,
}

impl Point {
    /// Creates a new named point
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Point { name: name.into(), x, y }
    }

    /// Squared euclidean distance from this point to `(x, y)`
    #[inline]
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name || self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Immutable, ordered collection of cities.
///
/// Store order is significant: it drives the tie-break of the placement
/// search and the order of every query result.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Creates a store from already deserialized points
    pub fn new(points: Vec<Point>) -> Self {
        PointStore { points }
    }

    /// Loads a store from a JSON file
    ///
    /// # Errors
    /// Returns [`ShieldError::Io`] if the file cannot be read and
    /// [`ShieldError::Json`] if it is not a JSON array of cities.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ShieldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&json, path.to_path_buf())?;
        info!("loaded {} cities from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parses a store from a JSON string
    ///
    /// # Errors
    /// Returns [`ShieldError::Json`] if `json` is not a JSON array of cities.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, PathBuf::from("<memory>"))
    }

    fn parse(json: &str, path: PathBuf) -> Result<Self> {
        let points: Vec<Point> =
            serde_json::from_str(json).map_err(|source| ShieldError::Json { path, source })?;
        Ok(PointStore::new(points))
    }

    /// Returns the number of cities
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the store holds no cities
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the city at `index` in store order
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All cities in store order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the cities in store order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Finds the first city whose name matches `name`, ignoring case
    pub fn find(&self, name: &str) -> Option<&Point> {
        find_by_name(&self.points, name)
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointStore::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// First point in `points` named `name` (case-insensitive)
pub fn find_by_name<'a>(points: &'a [Point], name: &str) -> Option<&'a Point> {
    points.iter().find(|point| point.has_name(name))
}
