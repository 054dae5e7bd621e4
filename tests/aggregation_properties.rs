// Properties the hexagon pipeline must hold for any well-formed fleet.

use h3o::Resolution;
use more_asserts::assert_le;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use turbine_hexmap::catalog::{REGIONS, region};
use turbine_hexmap::synth::synthesize;
use turbine_hexmap::{
    CellIndexer, H3Indexer, ResolutionSet, TurbineMeta, TurbineRecord, aggregate_cells,
    aggregate_resolutions, assert_deviation, materialize, summarize,
};

fn fleets() -> Vec<Vec<TurbineRecord>> {
    REGIONS
        .iter()
        .enumerate()
        .map(|(i, region)| synthesize(region, 400, i as u64 + 100))
        .collect()
}

#[test]
fn member_counts_sum_to_input_length() {
    let resolutions = ResolutionSet::new(&[2, 4, 5, 6, 7, 8]).unwrap();
    for fleet in fleets() {
        for layer in aggregate_resolutions(&fleet, &resolutions, &H3Indexer) {
            assert_eq!(layer.turbine_count(), fleet.len() as u64, "resolution {:?}", layer.resolution);
            assert!(layer.iter().all(|(_, aggregate)| aggregate.turbine_count >= 1));
        }
    }
}

#[test]
fn capacity_is_conserved_within_rounding() {
    let resolutions = ResolutionSet::default();
    for fleet in fleets() {
        let input_total: f64 = fleet.iter().map(TurbineRecord::capacity_mw).sum();
        for layer in aggregate_resolutions(&fleet, &resolutions, &H3Indexer) {
            let cell_total: f64 = layer.iter().map(|(_, aggregate)| aggregate.total_mw).sum();
            let tolerance = 0.05 * layer.len() as f64 + 1e-9;
            assert_le!((cell_total - input_total).abs(), tolerance);
            assert_deviation!(cell_total, input_total, 1.0, "resolution {:?}", layer.resolution);
        }
    }
}

#[test]
fn aggregation_is_idempotent() {
    let fleet = synthesize(region("germany").unwrap(), 500, 21);
    let first = aggregate_cells(&fleet, Resolution::Six, &H3Indexer);
    let second = aggregate_cells(&fleet, Resolution::Six, &H3Indexer);
    assert_eq!(first, second);
}

#[test]
fn aggregation_ignores_input_order() {
    let mut fleet = synthesize(region("texas").unwrap(), 500, 22);
    let ordered = aggregate_cells(&fleet, Resolution::Five, &H3Indexer);

    let mut rng = StdRng::seed_from_u64(5);
    fleet.shuffle(&mut rng);
    let shuffled = aggregate_cells(&fleet, Resolution::Five, &H3Indexer);

    assert_eq!(ordered, shuffled);

    fleet.reverse();
    assert_eq!(aggregate_cells(&fleet, Resolution::Five, &H3Indexer), ordered);
}

#[test]
fn two_nearby_turbines_make_one_cell() {
    let records = vec![
        TurbineRecord::new(52.0, 13.0, 3.0, TurbineMeta::default()).unwrap(),
        TurbineRecord::new(52.001, 13.001, 2.0, TurbineMeta::default()).unwrap(),
    ];
    let resolution = Resolution::Three;
    assert_eq!(
        H3Indexer.cell_at(records[0].position(), resolution),
        H3Indexer.cell_at(records[1].position(), resolution)
    );

    let aggregates = aggregate_cells(&records, resolution, &H3Indexer);
    assert_eq!(aggregates.len(), 1);
    let (_, aggregate) = aggregates.iter().next().unwrap();
    assert_eq!(aggregate.total_mw, 5.0);
    assert_eq!(aggregate.turbine_count, 2);
}

#[test]
fn empty_input_everywhere() {
    for layer in aggregate_resolutions(&[], &ResolutionSet::default(), &H3Indexer) {
        assert!(layer.is_empty());
        assert_eq!(layer.max_total_mw(), 0.0);
        assert!(materialize(&layer, &H3Indexer).features.is_empty());
    }
    let stats = summarize(&[]);
    assert_eq!((stats.count, stats.total_mw), (0, 0.0));
}

#[test]
fn polygons_are_closed_lng_lat_rings() {
    let fleet = synthesize(region("scotland").unwrap(), 200, 23);
    let aggregates = aggregate_cells(&fleet, Resolution::Five, &H3Indexer);
    let collection = materialize(&aggregates, &H3Indexer);

    for (feature, (cell, _)) in collection.features.iter().zip(aggregates.iter()) {
        let geometry = feature.geometry.as_ref().unwrap();
        let geojson::Value::Polygon(rings) = &geometry.value else {
            panic!("expected polygon for {cell}");
        };
        let ring = &rings[0];
        assert_eq!(ring.first(), ring.last());

        let raw = H3Indexer.boundary(*cell);
        assert_eq!(ring.len(), raw.len() + 1);
        for (vertex, (lat, lng)) in ring.iter().zip(&raw) {
            assert_eq!(vertex.as_slice(), &[*lng, *lat]);
        }
        // Scotland sits at negative longitude and high positive latitude.
        assert!(ring.iter().all(|vertex| vertex[0] < 0.0 && vertex[1] > 50.0));
    }
}

#[test]
fn max_scan_matches_largest_cell() {
    let fleet = synthesize(region("iowa").unwrap(), 300, 24);
    let aggregates = aggregate_cells(&fleet, Resolution::Four, &H3Indexer);
    let expected = aggregates
        .iter()
        .map(|(_, aggregate)| aggregate.total_mw)
        .fold(f64::MIN, f64::max);
    assert_eq!(aggregates.max_total_mw(), expected);
}

#[test]
fn stats_example() {
    let records: Vec<_> = [1.234, 2.5, 0.27]
        .iter()
        .map(|&capacity| TurbineRecord::new(45.0, 7.0, capacity, TurbineMeta::default()).unwrap())
        .collect();
    let stats = summarize(&records);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_mw, 4.0);
}
