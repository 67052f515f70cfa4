//! Native host for the lobby generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p lobby-cli -- heightmap --size 5 --seed 10`.
//! Run with `cargo run -p lobby-cli -- spawn-points --points 10 --rng chacha8`.
//! Run with `cargo run -p lobby-cli -- pick --radius 15` to assign a spawn point.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lobby_config::{CliArgs, Config};

use crate::commands::{CliError, Command};

const APP_NAME: &str = "lobby-gen";

#[derive(Parser, Debug)]
#[command(name = "lobby-gen", about = "Lobby heightmap and spawn point generator")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

fn config_dir(args: &CliArgs) -> Result<PathBuf, CliError> {
    if let Some(dir) = &args.config {
        return Ok(dir.clone());
    }
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(CliError::NoConfigDir)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = match config_dir(&cli.args) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&cli.args);

    let log_dir = config_dir.join("logs");
    lobby_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match commands::run(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobby_gen::RngAlgorithm;

    #[test]
    fn test_parse_subcommand_with_overrides() {
        let cli = Cli::try_parse_from([
            "lobby-gen",
            "spawn-points",
            "--points",
            "12",
            "--seed",
            "-7",
            "--rng",
            "chacha8",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::SpawnPoints);
        assert_eq!(cli.args.points, Some(12));
        assert_eq!(cli.args.seed, Some(-7));
        assert_eq!(cli.args.rng, Some(RngAlgorithm::ChaCha8));
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["lobby-gen", "--size", "300", "heightmap"]).unwrap();
        assert_eq!(cli.command, Command::Heightmap);
        assert_eq!(cli.args.size, Some(300));
    }

    #[test]
    fn test_pick_radius_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["lobby-gen", "pick"]).unwrap();
        assert_eq!(cli.command, Command::Pick { radius: 10.0 });

        let cli = Cli::try_parse_from(["lobby-gen", "pick", "--radius", "2.5"]).unwrap();
        assert_eq!(cli.command, Command::Pick { radius: 2.5 });
    }

    #[test]
    fn test_unknown_rng_rejected() {
        let result = Cli::try_parse_from(["lobby-gen", "spawn-points", "--rng", "mt19937"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["lobby-gen"]).is_err());
    }

    #[test]
    fn test_explicit_config_dir() {
        let args = CliArgs {
            config: Some(PathBuf::from("/tmp/lobby")),
            ..Default::default()
        };
        assert_eq!(config_dir(&args).unwrap(), PathBuf::from("/tmp/lobby"));
    }
}
