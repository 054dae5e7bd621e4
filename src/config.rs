use crate::color::ColorRamp;
use crate::constants::{DEFAULT_RESOLUTIONS, DEFAULT_SEED};
use crate::error::Result;
use crate::h3_utils::ResolutionSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run settings, loadable from a JSON file. Missing keys take defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HexMapConfig {
    pub resolutions: Vec<u8>,
    pub seed: u64,
    /// Overrides the region's default synthetic fleet size
    pub turbine_count: Option<usize>,
    pub color_stops: Option<Vec<String>>,
}

impl Default for HexMapConfig {
    fn default() -> Self {
        Self {
            resolutions: DEFAULT_RESOLUTIONS.to_vec(),
            seed: DEFAULT_SEED,
            turbine_count: None,
            color_stops: None,
        }
    }
}

impl HexMapConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resolution_set(&self) -> Result<ResolutionSet> {
        ResolutionSet::new(&self.resolutions)
    }

    pub fn color_ramp(&self) -> Result<ColorRamp> {
        match &self.color_stops {
            Some(stops) => ColorRamp::from_hex_stops(stops.as_slice()),
            None => Ok(ColorRamp::default()),
        }
    }
}
