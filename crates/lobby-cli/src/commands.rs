//! Subcommand implementations. Each returns the text printed to stdout.

use clap::Subcommand;
use lobby_config::{Config, ConfigError};
use lobby_gen::{
    RngAlgorithm, SpawnPoint, SpawnRng, fill_spawn_points, generate_heightmap,
    generate_spawn_points, pick_spawn_point, spawn_buffer_len,
};
use serde::Serialize;
use tracing::{info, warn};

/// Errors surfaced by the host binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a heightmap as JSON.
    Heightmap,
    /// Print spawn points as JSON.
    SpawnPoints,
    /// Assign a joining player one of the spawn points and print it as JSON.
    Pick {
        /// Count other spawn points within this distance of the pick.
        #[arg(long, default_value_t = 10.0)]
        radius: f32,
    },
    /// Print the effective configuration as RON.
    Config,
}

#[derive(Debug, Serialize)]
pub struct HeightmapReport {
    pub seed: i32,
    pub size: usize,
    pub cells: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct SpawnReport {
    pub seed: i32,
    pub rng: RngAlgorithm,
    pub points: Vec<SpawnPoint>,
}

pub fn heightmap_report(config: &Config) -> HeightmapReport {
    let generator = &config.generator;
    let size = generator.heightmap_size as usize;
    HeightmapReport {
        seed: generator.seed,
        size,
        cells: generate_heightmap(size, generator.seed),
    }
}

pub fn spawn_report(config: &Config) -> SpawnReport {
    let generator = &config.generator;
    SpawnReport {
        seed: generator.seed,
        rng: generator.rng,
        points: generate_spawn_points(
            generator.spawn_points as usize,
            generator.seed,
            generator.rng,
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct PickReport {
    pub seed: i32,
    pub rng: RngAlgorithm,
    /// `None` when the lobby has no spawn points.
    pub point: Option<SpawnPoint>,
    pub valid: bool,
    pub radius: f32,
    /// Other spawn points within `radius` of `point`.
    pub nearby: usize,
}

pub fn pick_report(config: &Config, radius: f32) -> PickReport {
    let generator = &config.generator;
    let count = generator.spawn_points as usize;

    // Placement and the pick share one stream, as in a lobby assigning a joiner.
    let mut rng = SpawnRng::new(generator.rng, generator.seed);
    let mut buffer = vec![0.0; spawn_buffer_len(count).unwrap_or_default()];
    fill_spawn_points(&mut buffer, count, &mut rng);
    let points = SpawnPoint::from_buffer(&buffer);

    let point = pick_spawn_point(&points, &mut rng);
    let nearby = point.map_or(0, |p| {
        points
            .iter()
            .filter(|other| **other != p && p.is_in_range(other, radius))
            .count()
    });
    PickReport {
        seed: generator.seed,
        rng: rng.algorithm(),
        point,
        valid: point.is_some_and(|p| p.is_valid()),
        radius,
        nearby,
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Run `command` against `config`.
pub fn run(command: &Command, config: &Config) -> Result<String, CliError> {
    let pretty = config.debug.pretty_output;
    match command {
        Command::Heightmap => {
            let report = heightmap_report(config);
            info!(size = report.size, seed = report.seed, "generated heightmap");
            to_json(&report, pretty)
        }
        Command::SpawnPoints => {
            let report = spawn_report(config);
            info!(
                count = report.points.len(),
                seed = report.seed,
                rng = %report.rng,
                "generated spawn points"
            );
            to_json(&report, pretty)
        }
        Command::Pick { radius } => {
            let report = pick_report(config, *radius);
            match report.point {
                Some(p) if !report.valid => warn!(?p, "picked spawn point outside the lobby"),
                Some(_) => info!(nearby = report.nearby, "picked spawn point"),
                None => warn!("no spawn points to pick from"),
            }
            to_json(&report, pretty)
        }
        Command::Config => Ok(config.to_ron()?),
    }
}
