use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use turbine_hexmap::catalog::{REGIONS, region};
use turbine_hexmap::config::HexMapConfig;
use turbine_hexmap::hexmap::HexMapBuilder;
use turbine_hexmap::source::{DataOrigin, load_or_synthesize};

#[derive(Parser, Debug)]
#[command(
    name = "turbine-hexmap",
    about = "Write multi-resolution hexagon density maps of wind turbines as GeoJSON",
    version
)]
struct Args {
    #[arg(long, default_value = "germany", help = "Region key from the catalog")]
    region: String,

    #[arg(long, value_name = "FILE", help = "JSON array of turbine rows; synthetic data is used if absent or unreadable")]
    input: Option<PathBuf>,

    #[arg(long, value_name = "FILE", env = "TURBINE_HEXMAP_CONFIG", help = "JSON configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Seed for synthetic data (overrides config)")]
    seed: Option<u64>,

    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, help = "Print the region catalog and exit")]
    list_regions: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list_regions {
        for region in REGIONS {
            println!(
                "{:<10} {:<12} {} clusters, {} synthetic turbines",
                region.key,
                region.name,
                region.clusters.len(),
                region.default_count
            );
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => HexMapConfig::from_json_file(path)?,
        None => HexMapConfig::default(),
    };
    let seed = args.seed.unwrap_or(config.seed);
    let region = region(&args.region)?;
    let builder = HexMapBuilder::new(&config)?;

    let loaded = load_or_synthesize(args.input.as_deref(), region, config.turbine_count, seed);
    match &loaded.origin {
        DataOrigin::File(path) => info!("using {} turbines from {}", loaded.records.len(), path.display()),
        DataOrigin::Synthetic { seed } => {
            info!("using {} synthetic turbines (seed {seed})", loaded.records.len())
        }
    }

    let map = builder.build(region, &loaded.records);
    info!(
        "{}: {} turbines, {} MW total",
        region.name, map.stats.count, map.stats.total_mw
    );

    fs::create_dir_all(&args.out_dir)?;
    for layer in &map.layers {
        let path = args
            .out_dir
            .join(format!("{}_r{}.geojson", region.key, u8::from(layer.resolution)));
        fs::write(&path, serde_json::to_string(&layer.features)?)?;
        info!(
            "resolution {}: {} cells, max {} MW -> {}",
            u8::from(layer.resolution),
            layer.features.features.len(),
            layer.max_total_mw,
            path.display()
        );
    }

    let summary_path = args.out_dir.join(format!("{}_summary.json", region.key));
    fs::write(&summary_path, serde_json::to_string_pretty(&map.summary())?)?;
    info!("summary -> {}", summary_path.display());

    Ok(())
}
