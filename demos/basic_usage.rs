//! Basic usage example for streetfind-rs
//!
//! Runs the three search triggers against an in-memory geocoder, so it works
//! offline:
//!
//! ```text
//! cargo run --example basic_usage
//! ```

use streetfind_rs::map::pins_to_geojson;
use streetfind_rs::{
    Coord, DeniedLocation, FixedLocation, GeocodeError, Geocoder, RawMatch, SearchAction,
    SearchConfig, SearchSession, StreetRequest, StreetSearch,
};

/// A handful of "rue Victor Hugo" answers, as the address service would send them.
struct SampleGeocoder;

impl Geocoder for SampleGeocoder {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        let street = |name: &str, city: &str, lat: f64, lon: f64| RawMatch {
            kind: "street".to_string(),
            name: name.to_string(),
            city: Some(city.to_string()),
            coord: Coord::new(lat, lon),
        };
        if !request.text.eq_ignore_ascii_case("rue victor hugo") {
            return Ok(Vec::new());
        }
        Ok(vec![
            street("Rue Victor Hugo", "Lyon", 45.7578, 4.8320),
            street("Rue Victor Hugot", "Marseille", 43.2965, 5.3698),
            street("Rue Victor Hugo", "Toulouse", 43.6045, 1.4440),
            street("Rue Victor Hugo", "Lille", 50.6330, 3.0586),
            street("Rue Victor Hugo", "Lyon", 45.7490, 4.8270),
        ])
    }
}

fn main() -> streetfind_rs::Result<()> {
    println!("=== streetfind-rs Basic Usage Example ===\n");

    let paris = FixedLocation(Coord::new(48.8566, 2.3522));
    let search = StreetSearch::new(SampleGeocoder, paris, SearchConfig::default());

    // Example 1: Plain search, service order
    println!("--- Example 1: Search ---");
    let outcome = search.search("Victor Hugo", SearchAction::Search.options())?;
    for city in &outcome.cities {
        println!("  {}", city.name);
    }
    println!();

    // Example 2: Closest first
    println!("--- Example 2: Sorted by distance from Paris ---");
    let outcome = search.search("Victor Hugo", SearchAction::SortByDistance.options())?;
    for city in &outcome.cities {
        println!("  {} ({:.1} km)", city.name, city.distance_km.unwrap_or_default());
    }
    println!();

    // Example 3: Map pins
    println!("--- Example 3: Map pins ---");
    let outcome = search.search("Victor Hugo", SearchAction::ShowOnMap.options())?;
    if outcome.map_ready() {
        let geojson = pins_to_geojson(&outcome.cities);
        println!("  {} pins", geojson["features"].as_array().map_or(0, Vec::len));
    }
    println!();

    // Example 4: Screen state, including the error kinds
    println!("--- Example 4: Session state ---");
    let denied = StreetSearch::new(SampleGeocoder, DeniedLocation, SearchConfig::default());
    let session = SearchSession::new();
    for input in ["Victor Hugo", "  ", "Introuvable"] {
        session.run(&denied, input, SearchAction::SortByDistance);
        let state = session.snapshot();
        match state.error_message() {
            Some(message) => println!("  {input:?}: {message}"),
            None => println!("  {input:?}: {} cities", state.cities.len()),
        }
    }

    Ok(())
}
