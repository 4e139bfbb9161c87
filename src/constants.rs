/// 默认保留的轮换历史长度
pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 32;

/// 默认返回的推荐数量
pub const DEFAULT_TOP_N: usize = 3;

/// 非对战（教学）地图，永远不进入候选列表
pub const EXCLUDED_MAP: &str = "Tutorials";

/// 地图包前缀：`"CAF Narva"` 归一化为 `"Narva"`
pub const MAP_PACK_PREFIX: &str = "CAF ";

/// 阵营别名表：地区变体映射到基础阵营代码
pub const FACTION_ALIASES: &[(&str, &str)] = &[("CAF_AR", "CAF"), ("RUS_DE", "RUS")];
