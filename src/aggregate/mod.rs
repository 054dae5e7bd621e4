mod serialize_cell_indexes;

use crate::constants::CELL_TOTAL_DECIMALS;
use crate::h3_utils::{CellIndexer, ResolutionSet};
use crate::math_utils::{round_to, sorted_sum};
use crate::turbine::TurbineRecord;
use h3o::{CellIndex, Resolution};
use log::debug;
use serde::{Deserialize, Serialize};
use serialize_cell_indexes::{
    deserialize_cell_map, deserialize_resolution, serialize_cell_map, serialize_resolution,
};
use std::collections::BTreeMap;

/// Accumulated capacity and member count of one hexagon.
///
/// Only ever created from a non-empty member list, so `turbine_count >= 1`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CellAggregate {
    pub total_mw: f64,
    pub turbine_count: u64,
}

impl CellAggregate {
    fn from_members(mut capacities: Vec<f64>) -> Self {
        Self {
            total_mw: round_to(sorted_sum(&mut capacities), CELL_TOTAL_DECIMALS),
            turbine_count: capacities.len() as u64,
        }
    }
}

/// Every occupied cell at a single resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CellAggregates {
    #[serde(
        serialize_with = "serialize_resolution",
        deserialize_with = "deserialize_resolution"
    )]
    pub resolution: Resolution,

    #[serde(
        serialize_with = "serialize_cell_map",
        deserialize_with = "deserialize_cell_map"
    )]
    pub cells: BTreeMap<CellIndex, CellAggregate>,
}

impl CellAggregates {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, cell: &CellIndex) -> Option<&CellAggregate> {
        self.cells.get(cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellIndex, &CellAggregate)> {
        self.cells.iter()
    }

    /// Largest cell total, used to calibrate the color ramp. 0.0 when empty.
    pub fn max_total_mw(&self) -> f64 {
        self.cells
            .values()
            .map(|aggregate| aggregate.total_mw)
            .fold(0.0, f64::max)
    }

    pub fn turbine_count(&self) -> u64 {
        self.cells
            .values()
            .map(|aggregate| aggregate.turbine_count)
            .sum()
    }
}

/// Bins turbines into cells at one resolution.
///
/// Member capacities are collected per cell, summed in ascending order so the
/// total does not depend on input order, and rounded to one decimal once.
pub fn aggregate_cells<I: CellIndexer + ?Sized>(
    records: &[TurbineRecord],
    resolution: Resolution,
    indexer: &I,
) -> CellAggregates {
    let mut members: BTreeMap<CellIndex, Vec<f64>> = BTreeMap::new();

    for record in records {
        let cell = indexer.cell_at(record.position(), resolution);
        members.entry(cell).or_default().push(record.capacity_mw());
    }

    let cells: BTreeMap<CellIndex, CellAggregate> = members
        .into_iter()
        .map(|(cell, capacities)| (cell, CellAggregate::from_members(capacities)))
        .collect();

    debug!(
        "aggregated {} turbines into {} cells at resolution {}",
        records.len(),
        cells.len(),
        u8::from(resolution)
    );

    CellAggregates { resolution, cells }
}

/// Runs [`aggregate_cells`] once per resolution, in set order.
pub fn aggregate_resolutions<I: CellIndexer + ?Sized>(
    records: &[TurbineRecord],
    resolutions: &ResolutionSet,
    indexer: &I,
) -> Vec<CellAggregates> {
    resolutions
        .iter()
        .map(|resolution| aggregate_cells(records, resolution, indexer))
        .collect()
}
