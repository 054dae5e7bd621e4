//! Static lookup tables: turbine models per manufacturer and the regions the
//! map can be switched to. Plain constants, read-only for the program's life.

use crate::error::{HexMapError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineModel {
    pub name: &'static str,
    pub capacity_mw: f64,
    pub hub_height_m: f64,
    pub rotor_diameter_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manufacturer {
    pub name: &'static str,
    pub models: &'static [TurbineModel],
}

/// A dense area of installations inside a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Administrative label stamped on synthesized turbines
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub spread_km: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub key: &'static str,
    pub name: &'static str,
    pub center: (f64, f64),
    pub zoom: u8,
    pub default_count: usize,
    pub clusters: &'static [Cluster],
}

const fn model(name: &'static str, capacity_mw: f64, hub_height_m: f64, rotor_diameter_m: f64) -> TurbineModel {
    TurbineModel {
        name,
        capacity_mw,
        hub_height_m,
        rotor_diameter_m,
    }
}

const fn cluster(label: &'static str, latitude: f64, longitude: f64, spread_km: f64, weight: f64) -> Cluster {
    Cluster {
        label,
        latitude,
        longitude,
        spread_km,
        weight,
    }
}

pub const MANUFACTURERS: &[Manufacturer] = &[
    Manufacturer {
        name: "Vestas",
        models: &[
            model("V90-2.0", 2.0, 80.0, 90.0),
            model("V112-3.45", 3.45, 94.0, 112.0),
            model("V136-4.2", 4.2, 112.0, 136.0),
            model("V150-4.2", 4.2, 105.0, 150.0),
        ],
    },
    Manufacturer {
        name: "Siemens Gamesa",
        models: &[
            model("SWT-2.3-93", 2.3, 80.0, 93.0),
            model("SG 2.1-114", 2.1, 93.0, 114.0),
            model("SG 5.0-145", 5.0, 107.5, 145.0),
        ],
    },
    Manufacturer {
        name: "Enercon",
        models: &[
            model("E-82 E2", 2.3, 98.0, 82.0),
            model("E-115", 3.0, 135.0, 115.0),
            model("E-138 EP3", 4.2, 131.0, 138.0),
        ],
    },
    Manufacturer {
        name: "Nordex",
        models: &[
            model("N117/3600", 3.6, 91.0, 117.0),
            model("N149/5.X", 5.7, 125.0, 149.0),
        ],
    },
    Manufacturer {
        name: "GE Vernova",
        models: &[
            model("1.5sle", 1.5, 80.0, 77.0),
            model("2.8-127", 2.8, 89.0, 127.0),
            model("3.6-154", 3.6, 98.0, 154.0),
        ],
    },
];

pub const REGIONS: &[Region] = &[
    Region {
        key: "germany",
        name: "Germany",
        center: (51.2, 10.4),
        zoom: 6,
        default_count: 2500,
        clusters: &[
            cluster("Schleswig-Holstein", 54.3, 9.6, 60.0, 3.0),
            cluster("Niedersachsen", 52.9, 8.2, 90.0, 4.0),
            cluster("Brandenburg", 52.4, 13.6, 80.0, 3.0),
            cluster("Sachsen-Anhalt", 51.9, 11.7, 60.0, 2.0),
            cluster("Nordrhein-Westfalen", 51.7, 7.6, 70.0, 2.0),
            cluster("Mecklenburg-Vorpommern", 53.8, 12.6, 70.0, 1.5),
        ],
    },
    Region {
        key: "denmark",
        name: "Denmark",
        center: (56.0, 10.0),
        zoom: 7,
        default_count: 900,
        clusters: &[
            cluster("Vestjylland", 56.1, 8.4, 40.0, 4.0),
            cluster("Nordjylland", 57.1, 9.6, 40.0, 2.0),
            cluster("Lolland", 54.8, 11.4, 20.0, 1.0),
            cluster("Sjaelland", 55.5, 11.8, 35.0, 1.0),
        ],
    },
    Region {
        key: "texas",
        name: "Texas",
        center: (32.5, -99.5),
        zoom: 6,
        default_count: 3000,
        clusters: &[
            cluster("Nolan County", 32.3, -100.4, 60.0, 3.0),
            cluster("Panhandle", 35.4, -101.6, 120.0, 4.0),
            cluster("Gulf Coast", 27.3, -97.7, 80.0, 1.5),
            cluster("Pecos", 31.2, -102.6, 90.0, 1.5),
        ],
    },
    Region {
        key: "iowa",
        name: "Iowa",
        center: (42.0, -93.5),
        zoom: 7,
        default_count: 1800,
        clusters: &[
            cluster("Northwest Iowa", 43.1, -95.3, 70.0, 3.0),
            cluster("North Central Iowa", 43.1, -93.4, 60.0, 2.0),
            cluster("Adair County", 41.3, -94.5, 40.0, 1.0),
        ],
    },
    Region {
        key: "scotland",
        name: "Scotland",
        center: (56.8, -4.2),
        zoom: 7,
        default_count: 800,
        clusters: &[
            cluster("Southern Uplands", 55.5, -3.8, 60.0, 3.0),
            cluster("Highland", 57.6, -4.4, 80.0, 2.0),
            cluster("Aberdeenshire", 57.2, -2.6, 40.0, 1.0),
        ],
    },
];

pub fn region(key: &str) -> Result<&'static Region> {
    REGIONS
        .iter()
        .find(|region| region.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| HexMapError::UnknownRegion(key.to_string()))
}

pub fn manufacturer(name: &str) -> Option<&'static Manufacturer> {
    MANUFACTURERS.iter().find(|manufacturer| manufacturer.name == name)
}
