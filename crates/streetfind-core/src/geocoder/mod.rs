// crates/streetfind-core/src/geocoder/mod.rs

//! # Geocoder
//!
//! The seam between the search pipeline and the address-search service.
//! The pipeline only sees [`RawMatch`] values; how they are fetched and
//! decoded lives behind the [`Geocoder`] trait.

use crate::config::SearchConfig;
use crate::error::GeocodeError;
use crate::model::{Coord, RawMatch};

pub mod raw;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpGeocoder;

/// Parameters of one street search request.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetRequest {
    /// Full street name, prefix included (`"rue Victor Hugo"`).
    pub text: String,
    pub index: String,
    pub street_type: String,
    pub limit: u16,
    /// Ranking hint. The service is free to ignore it.
    pub near: Option<Coord>,
}

impl StreetRequest {
    pub fn new(config: &SearchConfig, text: String, near: Option<Coord>) -> Self {
        Self {
            text,
            index: config.index.clone(),
            street_type: config.street_type.clone(),
            limit: config.limit,
            near,
        }
    }

    /// Query-string parameters in the order they are sent.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.text.clone()),
            ("index", self.index.clone()),
            ("limit", self.limit.to_string()),
            ("type", self.street_type.clone()),
        ];
        if let Some(near) = self.near {
            params.push(("lat", near.latitude.to_string()));
            params.push(("lon", near.longitude.to_string()));
        }
        params
    }
}

/// Something that can answer a street search.
pub trait Geocoder {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        (**self).search_streets(request)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        (**self).search_streets(request)
    }
}
