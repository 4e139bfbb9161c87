use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub faction: String,
}

impl Team {
    pub fn new(faction: impl Into<String>) -> Self {
        Self {
            faction: faction.into(),
        }
    }
}

/// 一个可选的对局配置：地图 + 模式 + 规模 + 双方阵营
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(alias = "layerClassname")]
    pub name: String,
    pub map: String,
    pub gamemode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub map_size: String,
    pub team_one: Team,
    pub team_two: Team,
}

impl Layer {
    /// 返回第一个为空（或仅含空白）的必填字段名
    pub fn first_blank_field(&self) -> Option<&'static str> {
        let fields = [
            ("name", self.name.as_str()),
            ("map", self.map.as_str()),
            ("gamemode", self.gamemode.as_str()),
            ("mapSize", self.map_size.as_str()),
            ("teamOne.faction", self.team_one.faction.as_str()),
            ("teamTwo.faction", self.team_two.faction.as_str()),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
    }

    pub fn has_faction(&self, faction: &str) -> bool {
        self.team_one.faction == faction || self.team_two.faction == faction
    }
}

/// 单个候选的重复度评分，数值越低越值得推荐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerScore {
    pub name: String,
    pub gamemode_score: f64,
    pub map_score: f64,
    pub size_score: f64,
    pub faction_score: f64,
    pub sum: f64,
}
