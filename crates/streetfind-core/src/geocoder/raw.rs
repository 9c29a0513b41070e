// crates/streetfind-core/src/geocoder/raw.rs

//! Wire model of the address-search response (GeoJSON FeatureCollection).
//!
//! These types mirror the external payload and are not part of the
//! normalized model; they are converted to [`RawMatch`] right after decoding.

use crate::error::GeocodeError;
use crate::model::{Coord, RawMatch};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

impl Feature {
    /// `None` when the geometry is missing or not a finite point.
    fn coord(&self) -> Option<Coord> {
        let coords = &self.geometry.as_ref()?.coordinates;
        if coords.len() < 2 {
            return None;
        }
        let coord = Coord::from_lon_lat([coords[0], coords[1]]);
        coord.is_finite().then_some(coord)
    }
}

impl FeatureCollection {
    /// Converts to [`RawMatch`], skipping features without a usable point.
    pub fn into_matches(self) -> Vec<RawMatch> {
        let total = self.features.len();
        let matches: Vec<RawMatch> = self
            .features
            .into_iter()
            .filter_map(|f| {
                let coord = f.coord()?;
                Some(RawMatch {
                    kind: f.properties.kind.unwrap_or_default(),
                    name: f.properties.name.unwrap_or_default(),
                    city: f.properties.city,
                    coord,
                })
            })
            .collect();
        if matches.len() != total {
            tracing::debug!(
                skipped = total - matches.len(),
                "dropped features without a usable point"
            );
        }
        matches
    }
}

/// Decodes a response body into matches.
pub fn parse_matches(body: &str) -> Result<Vec<RawMatch>, GeocodeError> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    Ok(collection.into_matches())
}
