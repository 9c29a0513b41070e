use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;
use std::thread;

use streetfind_core::{
    Coord, FixedLocation, GeocodeError, Geocoder, NoLocation, RawMatch, SearchAction,
    SearchConfig, SearchError, SearchSession, StreetRequest, StreetSearch,
};

fn foch(city: &str, lat: f64, lon: f64) -> RawMatch {
    RawMatch {
        kind: "street".into(),
        name: "Rue Foch".into(),
        city: Some(city.into()),
        coord: Coord::new(lat, lon),
    }
}

/// Answers immediately, or fails for "rue Panne".
struct InstantGeocoder;

impl Geocoder for InstantGeocoder {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        match request.text.as_str() {
            "rue Foch" => Ok(vec![foch("Nancy", 48.6921, 6.1844)]),
            "rue Panne" => Err(GeocodeError::InvalidPayload("truncated".into())),
            _ => Ok(Vec::new()),
        }
    }
}

/// Blocks "rue Lente" until released; answers "rue Foch" at once.
struct GatedGeocoder {
    entered: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl Geocoder for GatedGeocoder {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        if request.text == "rue Lente" {
            self.entered.lock().unwrap().send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
            return Ok(vec![RawMatch {
                kind: "street".into(),
                name: "rue Lente".into(),
                city: Some("Brest".into()),
                coord: Coord::new(48.39, -4.49),
            }]);
        }
        Ok(vec![foch("Lyon", 45.764, 4.8357)])
    }
}

#[test]
fn successful_run_fills_state() {
    let session = SearchSession::new();
    let search = StreetSearch::new(
        InstantGeocoder,
        FixedLocation(Coord::new(48.8566, 2.3522)),
        SearchConfig::default(),
    );

    let report = session.run(&search, "Foch", SearchAction::ShowOnMap);
    assert!(report.applied);
    assert!(report.result.is_ok());

    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.map_visible);
    assert_eq!(state.cities.len(), 1);
    assert!(state.cities[0].distance_km.is_some());
}

#[test]
fn each_error_kind_is_reported_and_cleared_by_next_run() {
    let session = SearchSession::new();
    let search = StreetSearch::new(InstantGeocoder, NoLocation, SearchConfig::default());

    let report = session.run(&search, "Inconnue", SearchAction::Search);
    assert!(matches!(report.result, Err(SearchError::NoMatch { .. })));
    let state = session.snapshot();
    assert_eq!(state.error.as_ref().map(|e| e.kind), Some("no_match"));
    assert!(state.error_message().unwrap().contains("rue Inconnue"));

    let report = session.run(&search, "Panne", SearchAction::Search);
    assert!(matches!(report.result, Err(SearchError::SearchFailed(_))));
    let state = session.snapshot();
    assert_eq!(state.error.as_ref().map(|e| e.kind), Some("search_failed"));
    assert!(!state.error_message().unwrap().contains("truncated"));

    let report = session.run(&search, "Foch", SearchAction::Search);
    assert!(report.result.is_ok());
    let state = session.snapshot();
    assert!(state.error.is_none());
    assert!(!state.map_visible);
}

#[test]
fn invalid_input_keeps_results_and_sets_prompt() {
    let session = SearchSession::new();
    let search = StreetSearch::new(InstantGeocoder, NoLocation, SearchConfig::default());

    session.run(&search, "Foch", SearchAction::Search);
    let report = session.run(&search, "   ", SearchAction::Search);

    assert!(matches!(report.result, Err(SearchError::InvalidInput)));
    let state = session.snapshot();
    assert_eq!(state.cities.len(), 1);
    assert_eq!(state.error.as_ref().map(|e| e.kind), Some("invalid_input"));
}

#[test]
fn slower_superseded_search_does_not_overwrite_newer_result() {
    let (entered_tx, entered_rx) = channel();
    let (release_tx, release_rx) = channel();
    let search = StreetSearch::new(
        GatedGeocoder {
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        },
        NoLocation,
        SearchConfig::default(),
    );
    let session = SearchSession::new();

    thread::scope(|scope| {
        let slow = scope.spawn(|| session.run(&search, "Lente", SearchAction::Search));

        // The slow search has its ticket and is waiting on the geocoder.
        entered_rx.recv().unwrap();

        let fast = session.run(&search, "Foch", SearchAction::Search);
        assert!(fast.applied);

        release_tx.send(()).unwrap();
        let slow = slow.join().unwrap();
        assert!(!slow.applied);
        assert!(slow.result.is_ok());
    });

    let state = session.snapshot();
    assert_eq!(state.cities.len(), 1);
    assert_eq!(state.cities[0].name, "Lyon");
    assert!(!state.loading);
}
