// crates/streetfind-core/src/pipeline.rs

//! # Street search pipeline
//!
//! `street name -> geocoder -> exact-name filter -> distance -> city ->
//! dedupe -> optional sort`.
//!
//! The pipeline holds no state between invocations: every call builds a
//! fresh result list from its inputs and the geocoder's answer.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::geo::haversine_km;
use crate::geocoder::{Geocoder, StreetRequest};
use crate::location::{acquire_reference, LocationProvider};
use crate::model::{CityResult, Coord, RawMatch, SearchOptions, SearchOutcome, SearchQuery};
use crate::text::equals_folded;
use std::collections::HashMap;

/// A geocoder and a location provider wired together.
#[derive(Debug, Clone)]
pub struct StreetSearch<G, L> {
    geocoder: G,
    location: L,
    config: SearchConfig,
}

impl<G: Geocoder, L: LocationProvider> StreetSearch<G, L> {
    pub fn new(geocoder: G, location: L, config: SearchConfig) -> Self {
        Self {
            geocoder,
            location,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Full invocation: validate, acquire the reference location when the
    /// options need it, query, normalize.
    ///
    /// The location provider is only consulted for distance sorting or map
    /// display, and never before the input has been validated.
    pub fn search(&self, street_name: &str, options: SearchOptions) -> Result<SearchOutcome> {
        let query = SearchQuery::new(street_name, None, options.sort_by_distance)?;

        let reference = if options.needs_reference_location() {
            acquire_reference(&self.location)
        } else {
            None
        };

        self.execute(query.with_reference_location(reference), options.show_on_map)
    }

    /// Runs an already validated query. Issues exactly one geocoder call.
    pub fn execute(&self, query: SearchQuery, show_on_map: bool) -> Result<SearchOutcome> {
        let full_name = self.config.full_street_name(query.street_name());
        let request = StreetRequest::new(&self.config, full_name.clone(), query.reference_location());

        let matches = self.geocoder.search_streets(&request).map_err(|err| {
            tracing::warn!(error = %err, street = %full_name, "street search failed");
            SearchError::SearchFailed(err)
        })?;
        let received = matches.len();

        let mut cities = normalize(
            matches,
            &full_name,
            &self.config.street_type,
            query.reference_location(),
        );
        if query.wants_distance_sort() {
            sort_by_distance(&mut cities);
        }

        tracing::info!(
            street = %full_name,
            received,
            cities = cities.len(),
            sorted = query.wants_distance_sort(),
            "street search finished"
        );

        if cities.is_empty() {
            return Err(SearchError::NoMatch { street: full_name });
        }

        Ok(SearchOutcome {
            query,
            cities,
            show_on_map,
        })
    }
}

/// Filter, annotate and deduplicate raw matches. Order is first-seen.
pub fn normalize(
    matches: Vec<RawMatch>,
    full_name: &str,
    street_type: &str,
    reference: Option<Coord>,
) -> Vec<CityResult> {
    let candidates = matches
        .into_iter()
        .filter(|m| is_exact_street(m, full_name, street_type))
        .filter_map(|m| to_city_result(m, reference));
    dedupe_by_city(candidates)
}

/// Type must be exactly `street_type`; name must equal `full_name`
/// ignoring case.
pub fn is_exact_street(m: &RawMatch, full_name: &str, street_type: &str) -> bool {
    m.kind == street_type && equals_folded(&m.name, full_name)
}

fn to_city_result(m: RawMatch, reference: Option<Coord>) -> Option<CityResult> {
    let name = m.city?.trim().to_string();
    if name.is_empty() {
        return None;
    }
    Some(CityResult {
        name,
        coordinates: m.coord,
        distance_km: reference.map(|from| haversine_km(from, m.coord)),
    })
}

/// One entry per city name: first-seen coordinates, smallest distance.
pub fn dedupe_by_city(results: impl IntoIterator<Item = CityResult>) -> Vec<CityResult> {
    let mut out: Vec<CityResult> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for result in results {
        match seen.get(&result.name) {
            Some(&i) => {
                let kept = &mut out[i];
                kept.distance_km = min_distance(kept.distance_km, result.distance_km);
            }
            None => {
                seen.insert(result.name.clone(), out.len());
                out.push(result);
            }
        }
    }
    out
}

fn min_distance(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Stable ascending sort; a missing distance sorts as `0`.
pub fn sort_by_distance(cities: &mut [CityResult]) {
    cities.sort_by(|a, b| a.distance_or_zero().total_cmp(&b.distance_or_zero()));
}
