use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_HISTORY_LENGTH, DEFAULT_TOP_N};
use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    #[serde(default = "default_weight")]
    pub gamemode_score: f64,
    #[serde(default = "default_weight")]
    pub map_score: f64,
    #[serde(default = "default_weight")]
    pub size_score: f64,
    #[serde(default = "default_weight")]
    pub faction_score: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            gamemode_score: 1.0,
            map_score: 1.0,
            size_score: 1.0,
            faction_score: 1.0,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<(), ScoreError> {
        let fields = [
            ("gamemodeScore", self.gamemode_score),
            ("mapScore", self.map_score),
            ("sizeScore", self.size_score),
            ("factionScore", self.faction_score),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }
}

/// 调用方提供历史记录的顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryOrder {
    /// 下标 0 为最早一局，末尾为最近一局
    #[default]
    OldestFirst,
    /// 下标 0 为最近一局
    NewestFirst,
}

impl std::str::FromStr for HistoryOrder {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "oldest_first" | "oldestfirst" | "oldest-first" => Ok(Self::OldestFirst),
            "newest_first" | "newestfirst" | "newest-first" => Ok(Self::NewestFirst),
            other => Err(format!("unknown history order: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOptions {
    #[serde(default = "default_max_history_length")]
    pub max_history_length: usize,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub history_order: HistoryOrder,
}

fn default_max_history_length() -> usize {
    DEFAULT_MAX_HISTORY_LENGTH
}
fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            weights: ScoreWeights::default(),
            top_n: DEFAULT_TOP_N,
            history_order: HistoryOrder::OldestFirst,
        }
    }
}

impl ScoreOptions {
    /// 负权重、零长度窗口等配置直接拒绝，不做静默修正
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.max_history_length == 0 {
            return Err(ScoreError::InvalidMaxHistoryLength);
        }
        if self.top_n == 0 {
            return Err(ScoreError::InvalidTopN);
        }
        self.weights.validate()
    }
}
