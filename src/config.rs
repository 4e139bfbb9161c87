use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_MAX_HISTORY_LENGTH, DEFAULT_TOP_N};
use crate::score::{HistoryOrder, ScoreOptions, ScoreWeights};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub catalog_path: String,
    /// 未设置时由目录随机生成历史
    pub history_path: Option<String>,
    pub score: ScoreOptions,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            catalog_path: env_or("LAYER_CATALOG_PATH", "./data/layers.json"),
            history_path: env::var("LAYER_HISTORY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            score: ScoreOptions {
                max_history_length: env_or_parse("MAX_HISTORY_LENGTH", DEFAULT_MAX_HISTORY_LENGTH),
                weights: ScoreWeights {
                    gamemode_score: env_or_parse("WEIGHT_GAMEMODE", 1.0_f64),
                    map_score: env_or_parse("WEIGHT_MAP", 1.0_f64),
                    size_score: env_or_parse("WEIGHT_SIZE", 1.0_f64),
                    faction_score: env_or_parse("WEIGHT_FACTION", 1.0_f64),
                },
                top_n: env_or_parse("TOP_N", DEFAULT_TOP_N),
                history_order: env_or_parse("HISTORY_ORDER", HistoryOrder::OldestFirst),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
