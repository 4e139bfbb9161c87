//! 图层名称归一化：阵营别名替换与地图包前缀裁剪

use crate::constants::{FACTION_ALIASES, MAP_PACK_PREFIX};
use crate::types::{Layer, Team};

pub fn canonical_faction(faction: &str) -> &str {
    FACTION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == faction)
        .map(|(_, base)| *base)
        .unwrap_or(faction)
}

pub fn canonical_map(map: &str) -> &str {
    map.strip_prefix(MAP_PACK_PREFIX).unwrap_or(map)
}

/// 返回规范化后的副本，输入保持不变
pub fn normalize_layer(layer: &Layer) -> Layer {
    Layer {
        map: canonical_map(&layer.map).to_string(),
        team_one: Team::new(canonical_faction(&layer.team_one.faction)),
        team_two: Team::new(canonical_faction(&layer.team_two.faction)),
        ..layer.clone()
    }
}
