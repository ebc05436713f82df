use anyhow::Result;
use clap::Parser;
use gatesoup_core::config::AppConfig;
use gatesoup_lib::app::ShutdownManager;
use gatesoup_lib::model::Evolver;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "gatesoup.toml")]
    config: String,

    /// Seed for the run; defaults to the config seed, then the clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Population size override
    #[arg(short, long)]
    population: Option<usize>,

    /// Emit one JSON line per generation on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(generations) = self.generations {
            config.population.max_generations = generations;
        }
        if let Some(size) = self.population {
            config.population.size = size;
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    gatesoup_core::init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;
    let seed = config.simulation.seed.unwrap_or_else(clock_seed);

    let mut shutdown = ShutdownManager::new();
    shutdown.install_ctrl_c_handler();
    let flag = shutdown.flag();
    let json = args.json;

    let summary = tokio::task::spawn_blocking(move || -> Result<_> {
        let mut evolver = Evolver::new(config, seed)?;
        if json {
            evolver = evolver.with_reporter(|stats| {
                if let Ok(line) = serde_json::to_string(stats) {
                    println!("{line}");
                }
            });
        }
        Ok(evolver.run(&flag))
    })
    .await??;

    match &summary.solution {
        Some(solution) => {
            println!("Found solution on generation {}", solution.generation);
            print!("{}", solution.listing);
        }
        None if summary.interrupted => {
            println!("Interrupted after {} generations.", summary.generations);
            shutdown.set_exit_code(130);
        }
        None => println!("No solution after {} generations.", summary.generations),
    }

    if shutdown.exit_code() != 0 {
        std::process::exit(shutdown.exit_code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["gatesoup"]);
        assert_eq!(args.config, "gatesoup.toml");
        assert!(args.seed.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from(["gatesoup", "-s", "42", "-g", "10", "-p", "64"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.population.max_generations, 10);
        assert_eq!(config.population.size, 64);
    }
}
