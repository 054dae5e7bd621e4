/// H3 integration: point → cell lookup, cell → boundary, and resolution sets.
///
/// The aggregation and geometry code only ever talk to [`CellIndexer`], so the
/// hexagon library stays a black box behind one seam.

use crate::constants::{DEFAULT_RESOLUTIONS, MAX_H3_RESOLUTION};
use crate::error::{HexMapError, Result};
use h3o::{CellIndex, LatLng, Resolution};

/// The two hexagon-library capabilities the pipeline depends on.
pub trait CellIndexer {
    /// Cell containing `position` at `resolution`. Pure: same inputs, same cell.
    fn cell_at(&self, position: LatLng, resolution: Resolution) -> CellIndex;

    /// Cell outline as `(latitude, longitude)` vertex pairs, in ring order.
    /// The ring is not guaranteed to be closed.
    fn boundary(&self, cell: CellIndex) -> Vec<(f64, f64)>;
}

/// [`CellIndexer`] backed by `h3o`.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Indexer;

impl CellIndexer for H3Indexer {
    fn cell_at(&self, position: LatLng, resolution: Resolution) -> CellIndex {
        position.to_cell(resolution)
    }

    fn boundary(&self, cell: CellIndex) -> Vec<(f64, f64)> {
        cell.boundary()
            .iter()
            .map(|vertex| (vertex.lat(), vertex.lng()))
            .collect()
    }
}

/// Ordered, duplicate-free list of H3 resolutions, coarse to fine as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSet {
    resolutions: Vec<Resolution>,
}

impl ResolutionSet {
    pub fn new(levels: &[u8]) -> Result<Self> {
        if levels.is_empty() {
            return Err(HexMapError::EmptyResolutionSet);
        }
        let mut resolutions: Vec<Resolution> = Vec::with_capacity(levels.len());
        for &level in levels {
            if level > MAX_H3_RESOLUTION {
                return Err(HexMapError::InvalidResolution(level));
            }
            let resolution =
                Resolution::try_from(level).map_err(|_| HexMapError::InvalidResolution(level))?;
            if resolutions.contains(&resolution) {
                return Err(HexMapError::DuplicateResolution(level));
            }
            resolutions.push(resolution);
        }
        Ok(Self { resolutions })
    }

    pub fn iter(&self) -> impl Iterator<Item = Resolution> + '_ {
        self.resolutions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
}

impl Default for ResolutionSet {
    fn default() -> Self {
        let resolutions = DEFAULT_RESOLUTIONS
            .iter()
            .filter_map(|&level| Resolution::try_from(level).ok())
            .collect();
        Self { resolutions }
    }
}
