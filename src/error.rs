use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid weight: {field}={value} (must be finite and >= 0)")]
    InvalidWeight { field: &'static str, value: f64 },
    #[error("invalid maxHistoryLength: must be > 0")]
    InvalidMaxHistoryLength,
    #[error("invalid topN: must be > 0")]
    InvalidTopN,
    #[error("malformed layer: {input}[{index}] has empty field {field}")]
    MissingField {
        input: LayerSource,
        index: usize,
        field: &'static str,
    },
}

/// 出错图层所在的输入集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSource {
    History,
    Catalog,
}

impl std::fmt::Display for LayerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerSource::History => f.write_str("history"),
            LayerSource::Catalog => f.write_str("catalog"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
