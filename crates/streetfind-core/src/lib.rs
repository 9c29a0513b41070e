// crates/streetfind-core/src/lib.rs

//! streetfind-core
//! ===============
//!
//! Finds every city that has a street with a given name.
//!
//! The user types `"Victor Hugo"`; the crate asks an address-search service
//! for `"rue Victor Hugo"`, keeps only street features whose name matches
//! exactly (ignoring case), reduces them to one entry per city and, when a
//! reference location is available, annotates and optionally sorts them by
//! great-circle distance.
//!
//! ```no_run
//! use streetfind_core::{FixedLocation, Coord, HttpGeocoder, SearchAction, SearchConfig, StreetSearch};
//!
//! let config = SearchConfig::from_env();
//! let geocoder = HttpGeocoder::new(&config)?;
//! let here = FixedLocation(Coord::new(48.8566, 2.3522));
//! let search = StreetSearch::new(geocoder, here, config);
//!
//! let outcome = search.search("Victor Hugo", SearchAction::SortByDistance.options())?;
//! for city in &outcome.cities {
//!     println!("{} ({:.1} km)", city.name, city.distance_km.unwrap_or_default());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod geo;
pub mod geocoder;
pub mod location;
pub mod map;
pub mod model;
pub mod pipeline;
pub mod session;
pub mod text;

// Re-exports
pub use crate::config::SearchConfig;
pub use crate::error::{GeocodeError, LocationError, Result, SearchError};
pub use crate::geo::haversine_km;
#[cfg(feature = "http")]
pub use crate::geocoder::HttpGeocoder;
pub use crate::geocoder::{Geocoder, StreetRequest};
pub use crate::location::{DeniedLocation, FixedLocation, LocationProvider, NoLocation, Permission};
pub use crate::model::{
    CityResult, Coord, RawMatch, SearchAction, SearchOptions, SearchOutcome, SearchQuery,
};
pub use crate::pipeline::StreetSearch;
pub use crate::session::{SearchSession, SearchState};
