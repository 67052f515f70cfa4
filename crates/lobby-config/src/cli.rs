//! Command-line overrides for the lobby generator host.

use std::path::PathBuf;

use clap::Args;
use lobby_gen::RngAlgorithm;

use crate::Config;

/// Global command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    /// Generation seed.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Heightmap cell count.
    #[arg(long, global = true)]
    pub size: Option<u32>,

    /// Number of spawn points.
    #[arg(long, global = true)]
    pub points: Option<u32>,

    /// Spawn generator (libc, chacha8).
    #[arg(long, global = true)]
    pub rng: Option<RngAlgorithm>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generator.seed = seed;
        }
        if let Some(size) = args.size {
            self.generator.heightmap_size = size;
        }
        if let Some(points) = args.points {
            self.generator.spawn_points = points;
        }
        if let Some(rng) = args.rng {
            self.generator.rng = rng;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
