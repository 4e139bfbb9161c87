use layer_score::types::{Layer, Team};

pub fn layer(name: &str, map: &str, gamemode: &str, size: &str, one: &str, two: &str) -> Layer {
    Layer {
        name: name.to_string(),
        map: map.to_string(),
        gamemode: gamemode.to_string(),
        version: Some("v1".to_string()),
        map_size: size.to_string(),
        team_one: Team::new(one),
        team_two: Team::new(two),
    }
}

/// 所有属性都与 `unique_candidate` 生成的候选互不相同的历史条目
pub fn filler(gamemode: &str) -> Layer {
    layer("Filler", "FillerMap", gamemode, "FillerSize", "FillerA", "FillerB")
}

pub fn unique_candidate(idx: usize, gamemode: &str) -> Layer {
    layer(
        &format!("Candidate_{idx}"),
        &format!("Map{idx}"),
        gamemode,
        &format!("Size{idx}"),
        &format!("Red{idx}"),
        &format!("Blue{idx}"),
    )
}

pub fn seed_catalog() -> Vec<Layer> {
    vec![
        layer("Tutorial_Infantry", "Tutorials", "Training", "Small", "USA", "RUS"),
        layer("CAF_Narva_AAS_v1", "CAF Narva", "AAS", "Large", "CAF_AR", "RUS_DE"),
        layer("Gorodok_RAAS_v2", "Gorodok", "RAAS", "Medium", "USA", "MEA"),
        layer("Fallujah_Invasion_v1", "Fallujah", "Invasion", "Medium", "USA", "INS"),
        layer("Yehorivka_TC_v1", "Yehorivka", "TC", "Large", "GB", "RUS"),
        layer("Sumari_Skirmish_v1", "Sumari", "Skirmish", "Small", "USMC", "MEA"),
    ]
}
