/*
This file is part of the Grilling Area Report
Copyright (C) 2022 Novel-T

The Grilling Area Report is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use geo::Coord;
use geojson::{Feature, GeoJson, JsonObject, PolygonType, Position, Value};
use log::debug;

use crate::errors::ErrorKind;
use crate::vector::{prepare_ring, AreaFeature, RingClosure};

/// Reads a GeoJSON FeatureCollection of single ring polygons
pub fn read_feature_collection(path: &Path, closure: RingClosure) -> Result<Vec<AreaFeature>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read feature collection: {:?}", path))?;
    let reader = BufReader::new(file);

    GeoJson::from_reader(reader)
        .context("Failed to parse GeoJSON")
        .and_then(|geojson| to_area_features(geojson, closure))
        .with_context(|| format!("Invalid feature collection: {:?}", path))
}

pub fn parse_feature_collection_str(json: &str, closure: RingClosure) -> Result<Vec<AreaFeature>> {
    let geojson = json.parse::<GeoJson>().context("Failed to parse GeoJSON")?;

    to_area_features(geojson, closure)
}

fn to_area_features(geojson: GeoJson, closure: RingClosure) -> Result<Vec<AreaFeature>> {
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("GeoJSON must be a FeatureCollection")),
    };

    let mut area_features = Vec::with_capacity(collection.features.len());

    for (idx, feature) in collection.features.into_iter().enumerate() {
        area_features.push(to_area_feature(idx, feature, closure)?);
    }

    Ok(area_features)
}

fn to_area_feature(idx: usize, feature: Feature, closure: RingClosure) -> Result<AreaFeature> {
    //Other properties (description, rules, official_id...) are not needed
    let name = string_property(idx, feature.properties.as_ref(), "name")?;
    let district = string_property(idx, feature.properties.as_ref(), "district")?;

    let geometry = feature.geometry.ok_or_else(|| ErrorKind::UnsupportedGeometry {
        feature: name.clone(),
        reason: "null geometry".to_string(),
    })?;

    let positions = single_ring(&name, geometry.value)?;
    let coords = to_coords(&name, &positions)?;

    debug!("Feature {} has {} positions", name, coords.len());

    let ring = prepare_ring(&name, coords, closure)?;

    Ok(AreaFeature { name, district, ring })
}

fn string_property(idx: usize, properties: Option<&JsonObject>, key: &str) -> Result<String> {
    properties
        .and_then(|props| props.get(key))
        .and_then(|value| value.as_str())
        .map(|value| value.to_string())
        .with_context(|| format!("Feature {} has no string property '{}'", idx + 1, key))
}

fn single_ring(feature: &str, value: Value) -> Result<Vec<Position>, ErrorKind> {
    match value {
        Value::Polygon(rings) => single_polygon_ring(feature, rings),
        Value::MultiPolygon(mut polygons) => {
            if polygons.len() != 1 {
                return Err(ErrorKind::UnsupportedGeometry {
                    feature: feature.to_string(),
                    reason: format!("multi polygon with {} parts", polygons.len()),
                });
            }
            single_polygon_ring(feature, polygons.remove(0))
        }
        _ => Err(ErrorKind::UnsupportedGeometry {
            feature: feature.to_string(),
            reason: "not a polygon nor a multi polygon".to_string(),
        }),
    }
}

fn single_polygon_ring(feature: &str, mut rings: PolygonType) -> Result<Vec<Position>, ErrorKind> {
    match rings.len() {
        0 => Err(ErrorKind::UnsupportedGeometry {
            feature: feature.to_string(),
            reason: "polygon without rings".to_string(),
        }),
        1 => Ok(rings.remove(0)),
        n => Err(ErrorKind::UnsupportedGeometry {
            feature: feature.to_string(),
            reason: format!("polygon with {} holes", n - 1),
        }),
    }
}

/// Altitude, if present, is dropped
fn to_coords(feature: &str, positions: &[Position]) -> Result<Vec<Coord<f64>>, ErrorKind> {
    positions
        .iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(ErrorKind::InvalidPosition {
                feature: feature.to_string(),
                len: p.len(),
            }),
        })
        .collect()
}
