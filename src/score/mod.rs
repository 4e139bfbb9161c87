pub mod config;
pub mod ranking;

pub use config::{HistoryOrder, ScoreOptions, ScoreWeights};
pub use ranking::{repetitiveness, score, LayerScorer};
