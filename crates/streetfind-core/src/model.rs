// crates/streetfind-core/src/model.rs
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// GeoJSON order is `[longitude, latitude]`.
    pub fn from_lon_lat(lon_lat: [f64; 2]) -> Self {
        Self::new(lon_lat[1], lon_lat[0])
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// Parses `"LAT,LON"` (whitespace around either part is ignored).
impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LON but got {s:?}"))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude {:?}", lat.trim()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude {:?}", lon.trim()))?;

        let coord = Coord::new(latitude, longitude);
        if !coord.is_finite() || latitude.abs() > 90.0 || longitude.abs() > 180.0 {
            return Err(format!("coordinate out of range: {s}"));
        }
        Ok(coord)
    }
}

/// What the caller asked for in addition to a plain search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort_by_distance: bool,
    pub show_on_map: bool,
}

impl SearchOptions {
    /// Both distance sorting and map display need the device position.
    pub fn needs_reference_location(&self) -> bool {
        self.sort_by_distance || self.show_on_map
    }
}

/// The three triggers offered by the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Search,
    SortByDistance,
    ShowOnMap,
}

impl SearchAction {
    pub fn options(self) -> SearchOptions {
        match self {
            SearchAction::Search => SearchOptions::default(),
            SearchAction::SortByDistance => SearchOptions {
                sort_by_distance: true,
                show_on_map: false,
            },
            SearchAction::ShowOnMap => SearchOptions {
                sort_by_distance: false,
                show_on_map: true,
            },
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    street_name: String,
    reference_location: Option<Coord>,
    wants_distance_sort: bool,
}

impl SearchQuery {
    /// Trims `street_name` and rejects it if nothing is left.
    pub fn new(
        street_name: &str,
        reference_location: Option<Coord>,
        wants_distance_sort: bool,
    ) -> Result<Self> {
        let street_name = street_name.trim();
        if street_name.is_empty() {
            return Err(SearchError::InvalidInput);
        }
        Ok(Self {
            street_name: street_name.to_string(),
            reference_location,
            wants_distance_sort,
        })
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn reference_location(&self) -> Option<Coord> {
        self.reference_location
    }

    pub fn wants_distance_sort(&self) -> bool {
        self.wants_distance_sort
    }

    pub fn with_reference_location(mut self, reference_location: Option<Coord>) -> Self {
        self.reference_location = reference_location;
        self
    }
}

/// One feature as returned by the geocoder, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub kind: String,
    pub name: String,
    pub city: Option<String>,
    pub coord: Coord,
}

/// A city that has a street with the searched name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityResult {
    pub name: String,
    pub coordinates: Coord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl CityResult {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sort key: a missing distance counts as zero.
    pub fn distance_or_zero(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }
}

/// Result of one successful pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub cities: Vec<CityResult>,
    pub show_on_map: bool,
}

impl SearchOutcome {
    /// Map presentation needs both the request and at least one pin.
    pub fn map_ready(&self) -> bool {
        self.show_on_map && !self.cities.is_empty()
    }
}
