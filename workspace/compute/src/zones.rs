//! Zone boundary asset.
//!
//! The boundaries ship with the frontend as a GeoJSON feature collection. Each
//! feature carries an integer `zone` property that joins it to the forecast.

use common::ZoneId;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ComputeError, Result};

/// Closed ring of `(longitude, latitude)` positions.
pub type Ring = Vec<(f64, f64)>;
/// Outer ring followed by any holes.
pub type Polygon = Vec<Ring>;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFeature {
    pub zone: ZoneId,
    pub name: Option<String>,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneCollection {
    pub features: Vec<ZoneFeature>,
}

#[derive(Deserialize)]
struct FeatureCollectionWire {
    features: Vec<FeatureWire>,
}

#[derive(Deserialize)]
struct FeatureWire {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<GeometryWire>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeometryWire {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

fn ring(positions: Vec<Vec<f64>>) -> Result<Ring> {
    positions
        .into_iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok((*lon, *lat)),
            _ => Err(ComputeError::ZoneAsset(format!(
                "Position needs longitude and latitude, got {:?}",
                position
            ))),
        })
        .collect()
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon> {
    rings.into_iter().map(ring).collect()
}

fn zone_property(properties: &Map<String, Value>) -> Option<ZoneId> {
    properties
        .get("zone")
        .and_then(Value::as_u64)
        .and_then(|zone| ZoneId::try_from(zone).ok())
}

impl ZoneCollection {
    /// Parses the bundled GeoJSON. Features without an integer `zone` property
    /// cannot be joined to a forecast and are skipped.
    pub fn from_geojson(json: &str) -> Result<Self> {
        let wire: FeatureCollectionWire = serde_json::from_str(json)?;
        let mut features = Vec::with_capacity(wire.features.len());

        for (position, feature) in wire.features.into_iter().enumerate() {
            let properties = feature.properties.unwrap_or_default();
            let Some(zone) = zone_property(&properties) else {
                warn!(position, "Skipping zone feature without an integer zone property");
                continue;
            };
            let polygons = match feature.geometry {
                Some(GeometryWire::Polygon { coordinates }) => vec![polygon(coordinates)?],
                Some(GeometryWire::MultiPolygon { coordinates }) => coordinates
                    .into_iter()
                    .map(polygon)
                    .collect::<Result<Vec<_>>>()?,
                Some(GeometryWire::Unsupported) | None => {
                    warn!(zone, "Skipping zone feature without polygon geometry");
                    continue;
                }
            };
            features.push(ZoneFeature {
                zone,
                name: properties.get("name").and_then(Value::as_str).map(str::to_string),
                polygons,
            });
        }

        debug!(features = features.len(), "Loaded zone boundaries");
        Ok(Self { features })
    }

    pub fn get(&self, zone: ZoneId) -> Option<&ZoneFeature> {
        self.features.iter().find(|feature| feature.zone == zone)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.features
            .iter()
            .flat_map(|feature| feature.polygons.iter().flatten().flatten())
            .fold(None, |bounds: Option<Bounds>, &(lon, lat)| {
                Some(match bounds {
                    None => Bounds {
                        min_lon: lon,
                        min_lat: lat,
                        max_lon: lon,
                        max_lat: lat,
                    },
                    Some(b) => Bounds {
                        min_lon: b.min_lon.min(lon),
                        min_lat: b.min_lat.min(lat),
                        max_lon: b.max_lon.max(lon),
                        max_lat: b.max_lat.max(lat),
                    },
                })
            })
    }
}

/// Equirectangular projection of a bounding box onto a `width` x `height` viewport.
/// Latitude grows upwards, screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bounds: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    pub fn fit(bounds: Bounds, width: f64, height: f64) -> Self {
        // Longitude degrees shrink with latitude.
        let mid_lat = ((bounds.min_lat + bounds.max_lat) / 2.0).to_radians();
        let span_x = ((bounds.max_lon - bounds.min_lon) * mid_lat.cos()).max(f64::EPSILON);
        let span_y = (bounds.max_lat - bounds.min_lat).max(f64::EPSILON);
        let scale = (width / span_x).min(height / span_y);
        Self {
            bounds,
            scale,
            offset_x: (width - span_x * scale) / 2.0,
            offset_y: (height - span_y * scale) / 2.0,
        }
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let mid_lat = ((self.bounds.min_lat + self.bounds.max_lat) / 2.0).to_radians();
        let x = (lon - self.bounds.min_lon) * mid_lat.cos() * self.scale + self.offset_x;
        let y = (self.bounds.max_lat - lat) * self.scale + self.offset_y;
        (x, y)
    }

    /// SVG path data of a feature, one closed subpath per ring.
    pub fn svg_path(&self, feature: &ZoneFeature) -> String {
        let mut path = String::new();
        for ring in feature.polygons.iter().flatten() {
            for (i, &(lon, lat)) in ring.iter().enumerate() {
                let (x, y) = self.project(lon, lat);
                let command = if i == 0 { 'M' } else { 'L' };
                path.push_str(&format!("{}{:.2},{:.2} ", command, x, y));
            }
            if !ring.is_empty() {
                path.push_str("Z ");
            }
        }
        path.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"zone": 1, "name": "Haro Strait"},
                "geometry": {"type": "Polygon", "coordinates": [[[-123.3, 48.4], [-123.1, 48.4], [-123.1, 48.7], [-123.3, 48.4]]]}
            },
            {
                "type": "Feature",
                "properties": {"zone": 2},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[-122.9, 48.5, 0.0], [-122.7, 48.5, 0.0], [-122.8, 48.6, 0.0]]],
                    [[[-122.6, 48.1], [-122.4, 48.1], [-122.5, 48.2]]]
                ]}
            },
            {
                "type": "Feature",
                "properties": {"name": "No zone id"},
                "geometry": {"type": "Polygon", "coordinates": []}
            },
            {
                "type": "Feature",
                "properties": {"zone": 3},
                "geometry": {"type": "Point", "coordinates": [-122.0, 48.0]}
            }
        ]
    }"#;

    #[test]
    fn test_load_joinable_features() {
        let zones = ZoneCollection::from_geojson(ASSET).unwrap();

        assert_eq!(zones.features.len(), 2);
        assert_eq!(zones.get(1).unwrap().name.as_deref(), Some("Haro Strait"));
        assert_eq!(zones.get(2).unwrap().polygons.len(), 2);
        assert!(zones.get(3).is_none());
    }

    #[test]
    fn test_bounds_cover_all_positions() {
        let zones = ZoneCollection::from_geojson(ASSET).unwrap();
        let bounds = zones.bounds().unwrap();

        assert_eq!(bounds.min_lon, -123.3);
        assert_eq!(bounds.max_lon, -122.4);
        assert_eq!(bounds.min_lat, 48.1);
        assert_eq!(bounds.max_lat, 48.7);
        assert_eq!(ZoneCollection::default().bounds(), None);
    }

    #[test]
    fn test_projection_keeps_points_in_viewport() {
        let zones = ZoneCollection::from_geojson(ASSET).unwrap();
        let projection = Projection::fit(zones.bounds().unwrap(), 800.0, 600.0);

        for feature in &zones.features {
            for &(lon, lat) in feature.polygons.iter().flatten().flatten() {
                let (x, y) = projection.project(lon, lat);
                assert!((-1e-6..=800.0 + 1e-6).contains(&x));
                assert!((-1e-6..=600.0 + 1e-6).contains(&y));
            }
        }
        // North is up.
        let (_, north) = projection.project(-123.0, 48.7);
        let (_, south) = projection.project(-123.0, 48.1);
        assert!(north < south);
    }

    #[test]
    fn test_svg_path_closes_each_ring() {
        let zones = ZoneCollection::from_geojson(ASSET).unwrap();
        let projection = Projection::fit(zones.bounds().unwrap(), 100.0, 100.0);
        let path = projection.svg_path(zones.get(2).unwrap());

        assert!(path.starts_with('M'));
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
    }

    #[test]
    fn test_malformed_asset_is_an_error() {
        assert!(matches!(
            ZoneCollection::from_geojson("{\"features\": 5}"),
            Err(ComputeError::ZoneAsset(_))
        ));
        let bad_position = r#"{"features": [{"properties": {"zone": 1},
            "geometry": {"type": "Polygon", "coordinates": [[[1.0]]]}}]}"#;
        assert!(ZoneCollection::from_geojson(bad_position).is_err());
    }
}
