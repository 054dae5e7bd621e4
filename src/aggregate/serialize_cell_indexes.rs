use super::CellAggregate;
use h3o::CellIndex;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Writes the cell map with each `CellIndex` as its canonical hex string key.
pub fn serialize_cell_map<S>(
    cells: &BTreeMap<CellIndex, CellAggregate>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(cells.len()))?;
    for (cell, aggregate) in cells {
        map.serialize_entry(&cell.to_string(), aggregate)?;
    }
    map.end()
}

pub fn deserialize_cell_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<CellIndex, CellAggregate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, CellAggregate>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, aggregate)| {
            key.parse::<CellIndex>()
                .map(|cell| (cell, aggregate))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

pub fn serialize_resolution<S>(resolution: &h3o::Resolution, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*resolution))
}

pub fn deserialize_resolution<'de, D>(deserializer: D) -> Result<h3o::Resolution, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    h3o::Resolution::try_from(raw).map_err(serde::de::Error::custom)
}
