use anyhow::Context;
use bitga::config::ConfigManager;
use bitga::engines::generation::LoggingProgressCallback;
use bitga::EvolutionEngine;
use clap::Parser;
use std::path::PathBuf;

/// Minimize an objective over a box with a binary-encoded genetic algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML or JSON configuration file; `BITGA_*` variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full outcome as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut manager = ConfigManager::new();
    match &cli.config {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => manager
            .load_from_env()
            .context("failed to apply environment configuration")?,
    }

    if cli.dump_config {
        print!("{}", manager.to_toml()?);
        return Ok(());
    }

    let config = manager.get();
    let progress = LoggingProgressCallback::new(
        config.reporting.progress_interval,
        config.evolution.num_generations,
    );

    let mut engine = EvolutionEngine::from_config(&config)?;
    let outcome = engine.run(progress);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("\n=== Best solution ===");
    match &outcome.best {
        Some(best) => {
            println!("Chromosome: {}", best.bit_string());
            for (i, value) in best.variables.iter().enumerate() {
                println!("x{} = {:.5}", i + 1, value);
            }
            println!("f = {:.5}", best.objective);
            println!("Found in generation {}", best.generation);
        }
        None => println!("No point with a defined objective value was found"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["bitga", "--config", "bitga.toml", "--json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("bitga.toml")));
        assert!(cli.json);
        assert!(!cli.dump_config);

        let cli = Cli::try_parse_from(["bitga", "--dump-config"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.dump_config);
    }

    #[test]
    fn test_cli_rejects_unknown_flags_and_missing_values() {
        assert!(Cli::try_parse_from(["bitga", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["bitga", "--config"]).is_err());
    }
}
