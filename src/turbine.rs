use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::{HexMapError, Result};
use h3o::LatLng;
use serde::{Deserialize, Serialize};

/// Descriptive fields that travel with a turbine but play no part in aggregation.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TurbineMeta {
    pub manufacturer: String,
    pub model: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Administrative region label (state, county, ...)
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotor_diameter_m: Option<f64>,
}

/// One installed turbine.
///
/// Coordinates and capacity are checked when the record is built, so every
/// `TurbineRecord` in existence has a finite, in-range position and a
/// positive capacity. Degrees are kept exactly as given; `position` is the
/// derived h3o point used for cell lookups.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "TurbineRow", into = "TurbineRow")]
pub struct TurbineRecord {
    latitude: f64,
    longitude: f64,
    position: LatLng,
    capacity_mw: f64,
    meta: TurbineMeta,
}

/// Flat wire shape of a turbine, as found in JSON input files.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TurbineRow {
    pub longitude: f64,
    pub latitude: f64,
    pub capacity_mw: f64,
    #[serde(flatten)]
    pub meta: TurbineMeta,
}

impl TurbineRecord {
    pub fn new(latitude: f64, longitude: f64, capacity_mw: f64, meta: TurbineMeta) -> Result<Self> {
        let position = validate_position(latitude, longitude)?;
        if !capacity_mw.is_finite() || capacity_mw <= 0.0 {
            return Err(HexMapError::InvalidCapacity(capacity_mw));
        }
        Ok(Self {
            latitude,
            longitude,
            position,
            capacity_mw,
            meta,
        })
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn capacity_mw(&self) -> f64 {
        self.capacity_mw
    }

    pub fn meta(&self) -> &TurbineMeta {
        &self.meta
    }
}

fn validate_position(latitude: f64, longitude: f64) -> Result<LatLng> {
    let invalid = || HexMapError::InvalidCoordinate {
        lat: latitude,
        lng: longitude,
    };
    if !latitude.is_finite()
        || !longitude.is_finite()
        || latitude.abs() > MAX_LATITUDE
        || longitude.abs() > MAX_LONGITUDE
    {
        return Err(invalid());
    }
    LatLng::new(latitude, longitude).map_err(|_| invalid())
}

impl TryFrom<TurbineRow> for TurbineRecord {
    type Error = HexMapError;

    fn try_from(row: TurbineRow) -> Result<Self> {
        TurbineRecord::new(row.latitude, row.longitude, row.capacity_mw, row.meta)
    }
}

impl From<TurbineRecord> for TurbineRow {
    fn from(record: TurbineRecord) -> Self {
        TurbineRow {
            longitude: record.longitude,
            latitude: record.latitude,
            capacity_mw: record.capacity_mw,
            meta: record.meta,
        }
    }
}
