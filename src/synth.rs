//! Seeded generator of plausible turbine fleets for a catalog region.
//!
//! Used whenever real installation data is missing or unreadable. The same
//! region, count and seed always give the same fleet.

use crate::catalog::{Cluster, MANUFACTURERS, Region};
use crate::constants::{
    FIRST_COMMISSIONING_YEAR, KM_PER_DEGREE_LAT, LAST_COMMISSIONING_YEAR, MAX_LATITUDE,
    MAX_LONGITUDE, UNKNOWN_YEAR_PROBABILITY,
};
use crate::math_utils::clamp;
use crate::turbine::{TurbineMeta, TurbineRecord};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Keeps cos(lat) away from zero near the poles.
const MIN_LAT_SCALE: f64 = 0.01;

pub fn synthesize(region: &Region, count: usize, seed: u64) -> Vec<TurbineRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let total_weight: f64 = region.clusters.iter().map(|cluster| cluster.weight).sum();

    let mut records = Vec::with_capacity(count);
    for index in 0..count {
        let cluster = pick_cluster(region.clusters, total_weight, &mut rng);
        match synthesize_one(cluster, index, &mut rng) {
            Ok(record) => records.push(record),
            Err(err) => warn!("dropping synthesized turbine {index}: {err}"),
        }
    }

    debug!(
        "synthesized {} turbines for {} (seed {seed})",
        records.len(),
        region.name
    );
    records
}

fn pick_cluster<'a>(clusters: &'a [Cluster], total_weight: f64, rng: &mut StdRng) -> &'a Cluster {
    let mut target = rng.random_range(0.0..total_weight.max(f64::MIN_POSITIVE));
    for cluster in clusters {
        if target < cluster.weight {
            return cluster;
        }
        target -= cluster.weight;
    }
    &clusters[clusters.len() - 1]
}

fn synthesize_one(
    cluster: &Cluster,
    index: usize,
    rng: &mut StdRng,
) -> crate::error::Result<TurbineRecord> {
    // Uniform over the disk: sqrt keeps density flat toward the rim.
    let distance_km = cluster.spread_km * rng.random::<f64>().sqrt();
    let bearing = rng.random_range(0.0..std::f64::consts::TAU);
    let lat_scale = cluster.latitude.to_radians().cos().max(MIN_LAT_SCALE);

    let latitude = clamp(
        cluster.latitude + distance_km * bearing.cos() / KM_PER_DEGREE_LAT,
        -MAX_LATITUDE,
        MAX_LATITUDE,
    );
    let longitude = clamp(
        cluster.longitude + distance_km * bearing.sin() / (KM_PER_DEGREE_LAT * lat_scale),
        -MAX_LONGITUDE,
        MAX_LONGITUDE,
    );

    let manufacturer = &MANUFACTURERS[rng.random_range(0..MANUFACTURERS.len())];
    let model = &manufacturer.models[rng.random_range(0..manufacturer.models.len())];

    let year = if rng.random_bool(UNKNOWN_YEAR_PROBABILITY) {
        None
    } else {
        Some(rng.random_range(FIRST_COMMISSIONING_YEAR..=LAST_COMMISSIONING_YEAR))
    };

    let meta = TurbineMeta {
        manufacturer: manufacturer.name.to_string(),
        model: model.name.to_string(),
        project: format!("{} Wind Farm {}", cluster.label, index / 10 + 1),
        year,
        region: cluster.label.to_string(),
        hub_height_m: Some(model.hub_height_m),
        rotor_diameter_m: Some(model.rotor_diameter_m),
    };

    TurbineRecord::new(latitude, longitude, model.capacity_mw, meta)
}
