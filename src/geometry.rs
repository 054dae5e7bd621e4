//! GeoJSON polygons for aggregated cells.

use crate::aggregate::{CellAggregate, CellAggregates};
use crate::h3_utils::CellIndexer;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value, feature::Id};
use h3o::CellIndex;

/// One closed GeoJSON Polygon feature per aggregate, in cell order.
///
/// Each feature carries `h3_index`, `resolution`, `total_mw` and
/// `turbine_count` properties.
pub fn materialize<I: CellIndexer + ?Sized>(
    aggregates: &CellAggregates,
    indexer: &I,
) -> FeatureCollection {
    let features = aggregates
        .iter()
        .map(|(cell, aggregate)| cell_feature(*cell, aggregate, indexer))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn cell_feature<I: CellIndexer + ?Sized>(
    cell: CellIndex,
    aggregate: &CellAggregate,
    indexer: &I,
) -> Feature {
    let ring = closed_lng_lat_ring(&indexer.boundary(cell));

    let mut properties = JsonObject::new();
    properties.insert("h3_index".to_string(), cell.to_string().into());
    properties.insert("resolution".to_string(), u8::from(cell.resolution()).into());
    properties.insert("total_mw".to_string(), aggregate.total_mw.into());
    properties.insert("turbine_count".to_string(), aggregate.turbine_count.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: Some(Id::String(cell.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Swaps `(lat, lng)` vertices to GeoJSON `[lng, lat]` and closes the ring if
/// the last vertex does not already repeat the first.
pub fn closed_lng_lat_ring(boundary: &[(f64, f64)]) -> Vec<Vec<f64>> {
    let mut ring: Vec<Vec<f64>> = boundary
        .iter()
        .map(|&(lat, lng)| vec![lng, lat])
        .collect();

    let open = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first != last,
        _ => false,
    };
    if open {
        ring.push(ring[0].clone());
    }
    ring
}
