use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use streetfind_core::geocoder::raw::parse_matches;
use streetfind_core::pipeline::{normalize, sort_by_distance};
use streetfind_core::{Coord, RawMatch};

/// A full page of 50 features spread over 20 cities, most of them matching.
fn page() -> Vec<RawMatch> {
    (0..50)
        .map(|i| RawMatch {
            kind: if i % 7 == 0 { "locality" } else { "street" }.to_string(),
            name: if i % 5 == 0 {
                "Rue Victor Hugot".to_string()
            } else {
                "Rue Victor Hugo".to_string()
            },
            city: Some(format!("Ville {}", i % 20)),
            coord: Coord::new(43.0 + i as f64 * 0.1, 1.0 + i as f64 * 0.05),
        })
        .collect()
}

fn page_json() -> String {
    let features: Vec<String> = page()
        .iter()
        .map(|m| {
            format!(
                r#"{{"type":"Feature","geometry":{{"type":"Point","coordinates":[{},{}]}},"properties":{{"type":"{}","name":"{}","city":"{}"}}}}"#,
                m.coord.longitude,
                m.coord.latitude,
                m.kind,
                m.name,
                m.city.as_deref().unwrap_or_default()
            )
        })
        .collect();
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features.join(","))
}

fn bench_pipeline(c: &mut Criterion) {
    let paris = Coord::new(48.8566, 2.3522);
    let body = page_json();

    c.bench_function("parse_page", |b| {
        b.iter(|| parse_matches(black_box(&body)).unwrap())
    });

    c.bench_function("normalize_plain", |b| {
        b.iter_batched(
            page,
            |matches| normalize(black_box(matches), "rue Victor Hugo", "street", None),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("normalize_and_sort", |b| {
        b.iter_batched(
            page,
            |matches| {
                let mut cities =
                    normalize(black_box(matches), "rue Victor Hugo", "street", Some(paris));
                sort_by_distance(&mut cities);
                cities
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
