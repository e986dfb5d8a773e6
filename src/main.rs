use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use scene_region::{Region, SceneFile, Vertex};

/// Classify points against the region polygons of a scene file
///
/// Examples:
///   # Check two points against every region in ./scene-region.toml
///   scene-region 2,2 5,5
///
///   # Check one region of an explicit scene file, JSON output
///   scene-region --scene yard.json --region dock --json -- -1.5,2
#[derive(Parser, Debug)]
#[command(name = "scene-region")]
#[command(version, about, long_about = None)]
struct Args {
    /// Scene file (.toml or .json); auto-searches scene-region.toml if not provided
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Only test against the named region
    #[arg(short = 'r', long)]
    region: Option<String>,

    /// Emit results as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Query points as x,y
    #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
    points: Vec<Vertex>,
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    x: f64,
    y: f64,
    region: &'a str,
    inside: bool,
}

fn parse_point(s: &str) -> Result<Vertex, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in {:?}: {}", s, e))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in {:?}: {}", s, e))?;
    Ok(Vertex::new(x, y))
}

fn classify<'a>(regions: &[&'a Region], points: &[Vertex]) -> Vec<Classification<'a>> {
    points
        .iter()
        .flat_map(|&point| {
            regions.iter().map(move |&region| Classification {
                x: point.x,
                y: point.y,
                region: &region.name,
                inside: region.polygon.contains(point),
            })
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let scene = match args.scene {
        Some(ref path) => SceneFile::from_path(path)
            .with_context(|| format!("Failed to load scene file: {:?}", path))?,
        None => match SceneFile::load() {
            Some(scene) => scene,
            None => bail!("No scene file found; pass --scene or create scene-region.toml"),
        },
    };

    let regions: Vec<&Region> = match args.region {
        Some(ref name) => vec![scene.region(name)?],
        None => scene.regions.iter().collect(),
    };
    if regions.is_empty() {
        bail!("Scene file defines no regions");
    }

    for region in &regions {
        if let Some(bounds) = region.polygon.bounds() {
            tracing::debug!(
                region = %region.name,
                vertices = region.polygon.len(),
                width = bounds.width(),
                height = bounds.height(),
                "region"
            );
        }
    }

    let results = classify(&regions, &args.points);

    if args.json {
        let out = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{}", out);
    } else {
        for r in &results {
            let state = if r.inside { "inside" } else { "outside" };
            println!("{},{}\t{}\t{}", r.x, r.y, r.region, state);
        }
    }

    Ok(())
}
