pub mod aggregate;
pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod h3_utils;
pub mod hexmap;
pub mod math_utils;
pub mod source;
pub mod stats;
pub mod synth;
pub mod turbine;

pub use aggregate::{CellAggregate, CellAggregates, aggregate_cells, aggregate_resolutions};
pub use error::{HexMapError, Result};
pub use geometry::materialize;
pub use h3_utils::{CellIndexer, H3Indexer, ResolutionSet};
pub use hexmap::{HexLayer, HexMap, HexMapBuilder};
pub use stats::{TurbineStats, summarize};
pub use turbine::{TurbineMeta, TurbineRecord};
