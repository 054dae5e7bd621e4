//! Turbine input: JSON files on disk, with synthetic data as the fallback.

use crate::catalog::Region;
use crate::error::Result;
use crate::synth::synthesize;
use crate::turbine::{TurbineRecord, TurbineRow};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum DataOrigin {
    File(PathBuf),
    Synthetic { seed: u64 },
}

#[derive(Debug, Clone)]
pub struct LoadedTurbines {
    pub records: Vec<TurbineRecord>,
    pub origin: DataOrigin,
    /// Rows dropped because their coordinates or capacity were invalid
    pub skipped: usize,
}

/// Reads a JSON array of turbine rows. Rows that fail validation are skipped
/// and counted; unreadable or unparsable files are errors.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<(Vec<TurbineRecord>, usize)> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for (row, value) in rows.into_iter().enumerate() {
        let parsed = serde_json::from_value::<TurbineRow>(value)
            .map_err(crate::error::HexMapError::from)
            .and_then(TurbineRecord::try_from);
        match parsed {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                warn!("{}: skipping row {row}: {err}", path.display());
            }
        }
    }

    info!(
        "loaded {} turbines from {} ({} skipped)",
        records.len(),
        path.display(),
        skipped
    );
    Ok((records, skipped))
}

/// Loads `path` when given, otherwise (or on any failure) synthesizes a fleet
/// for `region`. Never fails.
pub fn load_or_synthesize(
    path: Option<&Path>,
    region: &Region,
    count: Option<usize>,
    seed: u64,
) -> LoadedTurbines {
    if let Some(path) = path {
        match load_json(path) {
            Ok((records, skipped)) if !records.is_empty() => {
                return LoadedTurbines {
                    records,
                    origin: DataOrigin::File(path.to_path_buf()),
                    skipped,
                };
            }
            Ok(_) => warn!(
                "{} contained no usable turbines, using synthetic data for {}",
                path.display(),
                region.name
            ),
            Err(err) => warn!(
                "failed to load {}: {err}, using synthetic data for {}",
                path.display(),
                region.name
            ),
        }
    }

    LoadedTurbines {
        records: synthesize(region, count.unwrap_or(region.default_count), seed),
        origin: DataOrigin::Synthetic { seed },
        skipped: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::region;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const ROWS: &str = r#"[
        {"longitude": 13.0, "latitude": 52.0, "capacity_mw": 3.0,
         "manufacturer": "Enercon", "model": "E-115", "project": "A", "region": "Brandenburg"},
        {"longitude": 13.1, "latitude": 999.0, "capacity_mw": 3.0,
         "manufacturer": "Enercon", "model": "E-115", "project": "B", "region": "Brandenburg"},
        {"longitude": 13.2, "latitude": 52.2, "capacity_mw": -1.0,
         "manufacturer": "Enercon", "model": "E-115", "project": "C", "region": "Brandenburg"},
        {"longitude": 13.3, "latitude": 52.3},
        {"longitude": 13.4, "latitude": 52.4, "capacity_mw": 2.3,
         "manufacturer": "Enercon", "model": "E-82 E2", "project": "D", "region": "Brandenburg",
         "year": 2011}
    ]"#;

    #[test]
    fn loads_valid_rows_and_skips_the_rest() {
        let file = write_temp(ROWS);
        let (records, skipped) = load_json(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(skipped, 3);
        assert_eq!(records[1].meta().year, Some(2011));
    }

    #[test]
    fn file_origin_when_load_succeeds() {
        let file = write_temp(ROWS);
        let germany = region("germany").unwrap();
        let loaded = load_or_synthesize(Some(file.path()), germany, None, 1);
        assert_eq!(loaded.origin, DataOrigin::File(file.path().to_path_buf()));
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped, 3);
    }

    #[test]
    fn falls_back_on_missing_file() {
        let germany = region("germany").unwrap();
        let loaded = load_or_synthesize(Some(Path::new("/no/such/turbines.json")), germany, Some(50), 5);
        assert_eq!(loaded.origin, DataOrigin::Synthetic { seed: 5 });
        assert_eq!(loaded.records.len(), 50);
    }

    #[test]
    fn falls_back_on_malformed_json() {
        let file = write_temp("longitude,latitude\n13,52\n");
        let denmark = region("denmark").unwrap();
        let loaded = load_or_synthesize(Some(file.path()), denmark, Some(20), 2);
        assert!(matches!(loaded.origin, DataOrigin::Synthetic { .. }));
        assert_eq!(loaded.records.len(), 20);
    }

    #[test]
    fn falls_back_when_every_row_is_invalid() {
        let file = write_temp(r#"[{"longitude": 500.0, "latitude": 0.0, "capacity_mw": 1.0,
            "manufacturer": "", "model": "", "project": "", "region": ""}]"#);
        let iowa = region("iowa").unwrap();
        let loaded = load_or_synthesize(Some(file.path()), iowa, None, 3);
        assert!(matches!(loaded.origin, DataOrigin::Synthetic { seed: 3 }));
        assert_eq!(loaded.records.len(), iowa.default_count);
    }

    #[test]
    fn no_path_means_synthetic() {
        let scotland = region("scotland").unwrap();
        let loaded = load_or_synthesize(None, scotland, Some(10), 4);
        assert_eq!(loaded.records, synthesize(scotland, 10, 4));
    }
}
