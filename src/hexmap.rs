/// Region-level pipeline: turbines in, one styled hexagon layer per resolution out.
///
/// Every `build` starts from scratch. Nothing from a previous build is kept,
/// so a region switch can never mix cells from two runs.

use crate::aggregate::aggregate_resolutions;
use crate::catalog::Region;
use crate::color::ColorRamp;
use crate::config::HexMapConfig;
use crate::error::Result;
use crate::geometry::materialize;
use crate::h3_utils::{CellIndexer, H3Indexer, ResolutionSet};
use crate::stats::{TurbineStats, summarize};
use crate::turbine::TurbineRecord;
use geojson::FeatureCollection;
use h3o::Resolution;
use log::debug;
use serde::Serialize;

/// One resolution's polygons plus the scalar the renderer calibrates colors with.
#[derive(Debug, Clone)]
pub struct HexLayer {
    pub resolution: Resolution,
    pub max_total_mw: f64,
    pub features: FeatureCollection,
}

#[derive(Debug, Clone)]
pub struct HexMap {
    pub region: &'static Region,
    pub stats: TurbineStats,
    pub layers: Vec<HexLayer>,
}

/// Compact, serializable digest of a [`HexMap`] for the summary panel.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HexMapSummary {
    pub region: String,
    pub center: (f64, f64),
    pub zoom: u8,
    pub stats: TurbineStats,
    pub layers: Vec<LayerSummary>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub resolution: u8,
    pub cells: usize,
    pub max_total_mw: f64,
}

impl HexMap {
    pub fn layer(&self, resolution: Resolution) -> Option<&HexLayer> {
        self.layers.iter().find(|layer| layer.resolution == resolution)
    }

    pub fn summary(&self) -> HexMapSummary {
        HexMapSummary {
            region: self.region.key.to_string(),
            center: self.region.center,
            zoom: self.region.zoom,
            stats: self.stats,
            layers: self
                .layers
                .iter()
                .map(|layer| LayerSummary {
                    resolution: u8::from(layer.resolution),
                    cells: layer.features.features.len(),
                    max_total_mw: layer.max_total_mw,
                })
                .collect(),
        }
    }
}

pub struct HexMapBuilder {
    resolutions: ResolutionSet,
    ramp: ColorRamp,
    indexer: Box<dyn CellIndexer>,
}

impl HexMapBuilder {
    pub fn new(config: &HexMapConfig) -> Result<Self> {
        Ok(Self {
            resolutions: config.resolution_set()?,
            ramp: config.color_ramp()?,
            indexer: Box::new(H3Indexer),
        })
    }

    pub fn with_indexer(mut self, indexer: Box<dyn CellIndexer>) -> Self {
        self.indexer = indexer;
        self
    }

    pub fn resolutions(&self) -> &ResolutionSet {
        &self.resolutions
    }

    pub fn build(&self, region: &'static Region, records: &[TurbineRecord]) -> HexMap {
        let stats = summarize(records);
        let layers = aggregate_resolutions(records, &self.resolutions, self.indexer.as_ref())
            .into_iter()
            .map(|aggregates| {
                let max_total_mw = aggregates.max_total_mw();
                let mut features = materialize(&aggregates, self.indexer.as_ref());
                self.style(&mut features, max_total_mw);
                debug!(
                    "{}: resolution {} -> {} cells, max {} MW",
                    region.key,
                    u8::from(aggregates.resolution),
                    aggregates.len(),
                    max_total_mw
                );
                HexLayer {
                    resolution: aggregates.resolution,
                    max_total_mw,
                    features,
                }
            })
            .collect();

        HexMap {
            region,
            stats,
            layers,
        }
    }

    fn style(&self, features: &mut FeatureCollection, max_total_mw: f64) {
        for feature in &mut features.features {
            let Some(properties) = feature.properties.as_mut() else {
                continue;
            };
            let total = properties
                .get("total_mw")
                .and_then(serde_json::Value::as_f64)
                .unwrap_or(0.0);
            properties.insert(
                "fill_color".to_string(),
                self.ramp.color_for(total, max_total_mw).into(),
            );
        }
    }
}
