// crates/streetfind-core/src/map.rs
use crate::model::CityResult;
use serde::Serialize;
use serde_json::{json, Value};

/// A marker for map presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<&CityResult> for MapPin {
    fn from(city: &CityResult) -> Self {
        Self {
            title: city.name.clone(),
            latitude: city.coordinates.latitude,
            longitude: city.coordinates.longitude,
            distance_km: city.distance_km,
        }
    }
}

pub fn pins(cities: &[CityResult]) -> Vec<MapPin> {
    cities.iter().map(MapPin::from).collect()
}

/// GeoJSON `FeatureCollection` with one `Point` per city.
pub fn pins_to_geojson(cities: &[CityResult]) -> Value {
    let features: Vec<Value> = pins(cities)
        .into_iter()
        .map(|pin| {
            let mut properties = json!({ "title": pin.title });
            if let Some(d) = pin.distance_km {
                properties["distance_km"] = json!(d);
            }
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [pin.longitude, pin.latitude],
                },
                "properties": properties,
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
