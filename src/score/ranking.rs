//! 重复度评分：对历史窗口做近因加权计数，汇总为综合分并挑选最不重复的候选

use std::cmp::Ordering;

use crate::catalog::{check_layers, is_selectable};
use crate::error::{LayerSource, ScoreError};
use crate::normalize::normalize_layer;
use crate::score::config::{HistoryOrder, ScoreOptions};
use crate::types::{Layer, LayerScore};

fn sum_to(n: usize) -> f64 {
    (n * (n + 1)) as f64 / 2.0
}

fn sum_asc(a: &LayerScore, b: &LayerScore) -> Ordering {
    a.sum.partial_cmp(&b.sum).unwrap_or(Ordering::Equal)
}

/// 条件在历史中出现的频率与近因程度。
///
/// `history` 按最近一局在前排列；窗口长度为 `n` 时第 `i` 局权重为 `n - i`，
/// 结果除以全部命中时的权重和 `n(n+1)/2`。从未命中（含空历史）时为 0。
pub fn repetitiveness<F>(history: &[Layer], condition: F) -> f64
where
    F: Fn(&Layer) -> bool,
{
    let n = history.len();
    let occurrence: usize = history
        .iter()
        .enumerate()
        .filter(|(_, layer)| condition(layer))
        .map(|(i, _)| n - i)
        .sum();

    if occurrence == 0 {
        return 0.0;
    }
    occurrence as f64 / sum_to(n)
}

/// 截取最近的 `max_history_length` 局并规范化，统一成最近一局在前
fn canonical_window(history: &[Layer], options: &ScoreOptions) -> Vec<Layer> {
    let keep = history.len().min(options.max_history_length);
    match options.history_order {
        HistoryOrder::NewestFirst => history[..keep].iter().map(normalize_layer).collect(),
        HistoryOrder::OldestFirst => history[history.len() - keep..]
            .iter()
            .rev()
            .map(normalize_layer)
            .collect(),
    }
}

/// 针对一段固定历史的评分器；历史在构造时规范化一次
#[derive(Debug, Clone)]
pub struct LayerScorer {
    options: ScoreOptions,
    history: Vec<Layer>,
}

impl LayerScorer {
    pub fn new(history: &[Layer], options: ScoreOptions) -> Result<Self, ScoreError> {
        options.validate()?;
        check_layers(history, LayerSource::History)?;

        let history = canonical_window(history, &options);
        tracing::debug!(
            history_len = history.len(),
            max_history_length = options.max_history_length,
            "Built canonical layer history"
        );

        Ok(Self { options, history })
    }

    /// 规范化后的历史窗口，最近一局在前
    pub fn history(&self) -> &[Layer] {
        &self.history
    }

    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    pub fn gamemode_repetitiveness(&self, gamemode: &str) -> f64 {
        repetitiveness(&self.history, |l| l.gamemode == gamemode)
    }

    pub fn map_repetitiveness(&self, map: &str) -> f64 {
        repetitiveness(&self.history, |l| l.map == map)
    }

    pub fn size_repetitiveness(&self, map_size: &str) -> f64 {
        repetitiveness(&self.history, |l| l.map_size == map_size)
    }

    /// 历史中任一方使用过该阵营即视为命中
    pub fn faction_repetitiveness(&self, faction: &str) -> f64 {
        repetitiveness(&self.history, |l| l.has_faction(faction))
    }

    /// 对单个（已规范化的）候选图层评分
    pub fn score_layer(&self, candidate: &Layer) -> LayerScore {
        let weights = &self.options.weights;

        let gamemode_score =
            self.gamemode_repetitiveness(&candidate.gamemode) * weights.gamemode_score;
        let map_score = self.map_repetitiveness(&candidate.map) * weights.map_score;
        let size_score = self.size_repetitiveness(&candidate.map_size) * weights.size_score;
        let faction_score = (self.faction_repetitiveness(&candidate.team_one.faction)
            + self.faction_repetitiveness(&candidate.team_two.faction))
            / 2.0
            * weights.faction_score;

        LayerScore {
            name: candidate.name.clone(),
            gamemode_score,
            map_score,
            size_score,
            faction_score,
            sum: (gamemode_score + map_score + size_score + faction_score) / 4.0,
        }
    }

    /// 对已规范化、已过滤的候选按综合分升序排列，取前 `top_n` 个。
    /// `sort_by` 为稳定排序，同分候选保持输入顺序。
    pub fn rank(&self, candidates: &[Layer]) -> Vec<LayerScore> {
        let mut scored: Vec<LayerScore> = candidates.iter().map(|c| self.score_layer(c)).collect();
        scored.sort_by(sum_asc);
        scored.truncate(self.options.top_n);
        scored
    }

    /// 规范化目录、排除教学地图后给出推荐列表
    pub fn results(&self, catalog: &[Layer]) -> Result<Vec<LayerScore>, ScoreError> {
        check_layers(catalog, LayerSource::Catalog)?;

        let candidates: Vec<Layer> = catalog
            .iter()
            .map(normalize_layer)
            .filter(is_selectable)
            .collect();
        let ranked = self.rank(&candidates);

        tracing::debug!(
            candidates = candidates.len(),
            returned = ranked.len(),
            best = ranked.first().map(|s| s.name.as_str()).unwrap_or(""),
            "Ranked layer candidates"
        );
        Ok(ranked)
    }
}

/// 一次性评分：校验配置与输入，返回最不重复的候选（升序）
pub fn score(
    history: &[Layer],
    catalog: &[Layer],
    options: &ScoreOptions,
) -> Result<Vec<LayerScore>, ScoreError> {
    LayerScorer::new(history, options.clone())?.results(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Team;

    fn layer(name: &str, map: &str, gamemode: &str, size: &str, one: &str, two: &str) -> Layer {
        Layer {
            name: name.to_string(),
            map: map.to_string(),
            gamemode: gamemode.to_string(),
            version: None,
            map_size: size.to_string(),
            team_one: Team::new(one),
            team_two: Team::new(two),
        }
    }

    fn plain(gamemode: &str) -> Layer {
        layer("h", "HistMap", gamemode, "HistSize", "H1", "H2")
    }

    #[test]
    fn repetitiveness_is_zero_for_empty_history() {
        assert_eq!(repetitiveness(&[], |_| true), 0.0);
    }

    #[test]
    fn repetitiveness_is_one_when_always_matched() {
        let history = vec![plain("AAS"); 5];
        assert!((repetitiveness(&history, |l| l.gamemode == "AAS") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repetitiveness_weights_most_recent_highest() {
        // 最近一局在前：n = 4，权重依次为 4, 3, 2, 1，总和 10
        let history = vec![plain("AAS"), plain("RAAS"), plain("RAAS"), plain("Invasion")];
        assert!((repetitiveness(&history, |l| l.gamemode == "AAS") - 0.4).abs() < 1e-12);
        assert!((repetitiveness(&history, |l| l.gamemode == "RAAS") - 0.5).abs() < 1e-12);
        assert!((repetitiveness(&history, |l| l.gamemode == "Invasion") - 0.1).abs() < 1e-12);
    }

    #[test]
    fn oldest_first_window_keeps_most_recent_entries() {
        let history: Vec<Layer> = (0..5).map(|i| plain(&format!("M{i}"))).collect();
        let options = ScoreOptions {
            max_history_length: 3,
            ..ScoreOptions::default()
        };
        let scorer = LayerScorer::new(&history, options).unwrap();
        let modes: Vec<&str> = scorer.history().iter().map(|l| l.gamemode.as_str()).collect();
        assert_eq!(modes, vec!["M4", "M3", "M2"]);
    }

    #[test]
    fn newest_first_window_takes_leading_entries() {
        let history: Vec<Layer> = (0..5).map(|i| plain(&format!("M{i}"))).collect();
        let options = ScoreOptions {
            max_history_length: 3,
            history_order: HistoryOrder::NewestFirst,
            ..ScoreOptions::default()
        };
        let scorer = LayerScorer::new(&history, options).unwrap();
        let modes: Vec<&str> = scorer.history().iter().map(|l| l.gamemode.as_str()).collect();
        assert_eq!(modes, vec!["M0", "M1", "M2"]);
    }

    #[test]
    fn history_is_normalized() {
        let history = vec![layer("h", "CAF Narva", "AAS", "Large", "CAF_AR", "RUS_DE")];
        let scorer = LayerScorer::new(&history, ScoreOptions::default()).unwrap();
        assert_eq!(scorer.history()[0].map, "Narva");
        assert_eq!(scorer.map_repetitiveness("Narva"), 1.0);
        assert_eq!(scorer.faction_repetitiveness("CAF"), 1.0);
        assert_eq!(scorer.faction_repetitiveness("RUS"), 1.0);
    }

    #[test]
    fn faction_score_averages_both_teams() {
        // 单局历史，候选一方阵营出现过，另一方没有
        let history = vec![layer("h", "HistMap", "AAS", "Large", "USA", "RUS")];
        let scorer = LayerScorer::new(&history, ScoreOptions::default()).unwrap();
        let candidate = layer("c", "Other", "TC", "Small", "RUS", "MEA");
        let score = scorer.score_layer(&candidate);
        assert!((score.faction_score - 0.5).abs() < 1e-12);
        assert!((score.sum - 0.125).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            layer("a", "A", "AAS", "S", "F1", "F2"),
            layer("b", "B", "AAS", "S", "F1", "F2"),
            layer("c", "C", "AAS", "S", "F1", "F2"),
            layer("d", "D", "AAS", "S", "F1", "F2"),
        ];
        let ranked = score(&[], &catalog, &ScoreOptions::default()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn top_n_is_configurable() {
        let catalog: Vec<Layer> = (0..6)
            .map(|i| layer(&format!("l{i}"), "A", "AAS", "S", "F1", "F2"))
            .collect();
        let options = ScoreOptions {
            top_n: 5,
            ..ScoreOptions::default()
        };
        assert_eq!(score(&[], &catalog, &options).unwrap().len(), 5);
    }

    #[test]
    fn excluded_map_never_ranked() {
        let catalog = vec![
            layer("tutorial", "Tutorials", "Training", "Small", "USA", "RUS"),
            layer("narva", "Narva", "AAS", "Large", "USA", "RUS"),
        ];
        let ranked = score(&[], &catalog, &ScoreOptions::default()).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "narva");
    }

    #[test]
    fn malformed_catalog_fails_without_partial_result() {
        let catalog = vec![
            layer("ok", "Narva", "AAS", "Large", "USA", "RUS"),
            layer("broken", "Narva", "", "Large", "USA", "RUS"),
        ];
        let err = score(&[], &catalog, &ScoreOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ScoreError::MissingField {
                input: LayerSource::Catalog,
                index: 1,
                field: "gamemode",
            }
        );
    }

    #[test]
    fn malformed_history_is_rejected() {
        let history = vec![layer("h", "", "AAS", "Large", "USA", "RUS")];
        let err = LayerScorer::new(&history, ScoreOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::MissingField {
                input: LayerSource::History,
                field: "map",
                ..
            }
        ));
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut options = ScoreOptions::default();
        options.weights.faction_score = -1.0;
        assert!(score(&[], &[], &options).is_err());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let history = vec![plain("AAS")];
        assert!(score(&history, &[], &ScoreOptions::default()).unwrap().is_empty());
    }
}
