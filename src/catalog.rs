//! 图层目录：外部提供的全部可选图层

use std::path::Path;

use crate::constants::EXCLUDED_MAP;
use crate::error::{LayerSource, LoadError, ScoreError};
use crate::normalize::normalize_layer;
use crate::types::Layer;

/// 教学等非对战地图不参与推荐
pub fn is_selectable(layer: &Layer) -> bool {
    layer.map != EXCLUDED_MAP
}

/// 任一图层存在空的必填字段即整体失败
pub(crate) fn check_layers(layers: &[Layer], input: LayerSource) -> Result<(), ScoreError> {
    for (index, layer) in layers.iter().enumerate() {
        if let Some(field) = layer.first_blank_field() {
            return Err(ScoreError::MissingField {
                input,
                index,
                field,
            });
        }
    }
    Ok(())
}

pub(crate) fn read_layers(path: &Path) -> Result<Vec<Layer>, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

#[derive(Debug, Clone, Default)]
pub struct LayerCatalog {
    layers: Vec<Layer>,
}

impl LayerCatalog {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let layers = read_layers(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            layers = layers.len(),
            "Loaded layer catalog"
        );
        Ok(Self::new(layers))
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// 规范化后的候选列表（保持目录顺序，剔除教学地图）
    pub fn normal_layers(&self) -> Vec<Layer> {
        self.layers
            .iter()
            .map(normalize_layer)
            .filter(is_selectable)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        check_layers(&self.layers, LayerSource::Catalog)
    }
}
