// Aggregation and display
pub const DEFAULT_RESOLUTIONS: &[u8] = &[4, 5, 6, 7];
pub const MAX_H3_RESOLUTION: u8 = 15;
pub const CELL_TOTAL_DECIMALS: i32 = 1; // per-cell total_mw display precision

// Synthetic data
pub const DEFAULT_SEED: u64 = 42;
pub const FIRST_COMMISSIONING_YEAR: u16 = 1995;
pub const LAST_COMMISSIONING_YEAR: u16 = 2024;
pub const UNKNOWN_YEAR_PROBABILITY: f64 = 0.1;
pub const KM_PER_DEGREE_LAT: f64 = 111.32;

// Coordinate limits (degrees)
pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Color ramp: pale yellow -> orange -> dark red
pub const DEFAULT_COLOR_STOPS: &[&str] = &["#ffffb2", "#fecc5c", "#fd8d3c", "#f03b20", "#bd0026"];
