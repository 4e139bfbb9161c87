use std::process::ExitCode;

use layer_score::catalog::LayerCatalog;
use layer_score::config::Config;
use layer_score::history::{load_history, random_history};
use layer_score::logging::{init_tracing, log_history, LogConfig};
use layer_score::score::LayerScorer;
use layer_score::types::LayerScore;

fn run(config: &Config) -> Result<Vec<LayerScore>, Box<dyn std::error::Error>> {
    let catalog = LayerCatalog::from_path(&config.catalog_path)?;
    catalog.validate()?;

    let history = match &config.history_path {
        Some(path) => load_history(path)?,
        None => {
            tracing::warn!(
                len = config.score.max_history_length,
                "LAYER_HISTORY_PATH not set, sampling a random history from the catalog"
            );
            random_history(
                catalog.layers(),
                config.score.max_history_length,
                &mut rand::thread_rng(),
            )
        }
    };

    let scorer = LayerScorer::new(&history, config.score.clone())?;
    log_history(scorer.history());

    Ok(scorer.results(catalog.layers())?)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&LogConfig {
        log_level: config.log_level.clone(),
        enable_file_logs: config.enable_file_logs,
        log_dir: config.log_dir.clone(),
    });
    tracing::info!(catalog = %config.catalog_path, "Starting layer-score");

    let results = match run(&config) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(error = %e, "Layer scoring failed");
            return ExitCode::FAILURE;
        }
    };

    for (rank, score) in results.iter().enumerate() {
        tracing::info!(
            rank = rank + 1,
            layer = %score.name,
            sum = score.sum,
            "Recommended layer"
        );
    }

    match serde_json::to_string_pretty(&results) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize results");
            ExitCode::FAILURE
        }
    }
}
