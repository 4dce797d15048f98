use anyhow::Context;
use georoute::config::ConfigManager;
use georoute::engine::progress::ConsoleProgress;
use georoute::engine::{EvolutionEngine, RewardMatrix};
use georoute::sweep::grid_search;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("run");

    let manager = ConfigManager::new();
    if let Some(path) = args.get(2) {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    match mode {
        "run" => {
            let matrix = RewardMatrix::sample();
            let mut engine = EvolutionEngine::new(config.evolution, matrix)?;
            let result = engine.run(&mut ConsoleProgress)?;

            println!("Best route: {}", result.best_route);
            println!("Points gained from this route: {}", result.best_fitness);
        }
        "sweep" => {
            let outcomes = grid_search(&config.sweep)?;

            let report_path = args.get(3).map(|s| s.as_str()).unwrap_or("sweep_results.json");
            let report = serde_json::to_string_pretty(&outcomes)?;
            std::fs::write(report_path, report)
                .with_context(|| format!("writing sweep report to {}", report_path))?;

            if let Some(best) = outcomes.first() {
                println!("Best combination (mean best fitness {:.1}):", best.mean_best_fitness);
                println!("{}", toml::to_string_pretty(&best.config)?);
            }
            println!("Full ranking written to {}", report_path);
        }
        other => {
            anyhow::bail!("unknown mode '{}', expected 'run' or 'sweep'", other);
        }
    }

    Ok(())
}
