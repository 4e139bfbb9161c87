//! 轮换历史：有界的内存记录器，外加用于演示/测试的随机历史生成

use std::collections::VecDeque;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::read_layers;
use crate::constants::DEFAULT_MAX_HISTORY_LENGTH;
use crate::error::LoadError;
use crate::types::Layer;

/// 最多保留 `capacity` 局，超出时淘汰最早的一局
#[derive(Debug, Clone)]
pub struct LayerHistory {
    entries: VecDeque<Layer>,
    capacity: usize,
}

impl Default for LayerHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY_LENGTH)
    }
}

impl LayerHistory {
    /// `capacity` 为 0 时按 1 处理
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, layer: Layer) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::trace!(layer = %evicted.name, "Evicted oldest layer from history");
            }
        }
        self.entries.push_back(layer);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Layer> {
        self.entries.back()
    }

    pub fn oldest_first(&self) -> Vec<Layer> {
        self.entries.iter().cloned().collect()
    }

    pub fn newest_first(&self) -> Vec<Layer> {
        self.entries.iter().rev().cloned().collect()
    }
}

impl Extend<Layer> for LayerHistory {
    fn extend<T: IntoIterator<Item = Layer>>(&mut self, iter: T) {
        for layer in iter {
            self.record(layer);
        }
    }
}

/// 读取 JSON 数组形式的历史（最早一局在前）
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<Layer>, LoadError> {
    let layers = read_layers(path.as_ref())?;
    tracing::info!(
        path = %path.as_ref().display(),
        layers = layers.len(),
        "Loaded layer history"
    );
    Ok(layers)
}

/// 从目录中均匀随机抽取 `len` 局组成历史；目录为空时返回空历史
pub fn random_history<R: Rng + ?Sized>(catalog: &[Layer], len: usize, rng: &mut R) -> Vec<Layer> {
    (0..len)
        .filter_map(|_| catalog.choose(rng).cloned())
        .collect()
}
