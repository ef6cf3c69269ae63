use std::time::Duration;

use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

/// Evaluation weights and tuning knobs for the `Searcher`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub path_weight: f32,
    pub walls_weight: f32,
    pub center_weight: f32,
    /// Kept for configuration compatibility; the evaluation has no separate blocking term.
    pub blocking_weight: f32,
    pub progress_weight: f32,
    pub strategic_move_probability: f64,
    pub random_move_probability: f64,
    pub easy_wall_sample_size: usize,
    pub wall_candidate_radius: usize,
    pub max_wall_candidates: usize,
    pub win_score: f32,
    pub parallel_root: bool,
    pub time_limit: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            path_weight: 10.0,
            walls_weight: 2.0,
            center_weight: 1.0,
            blocking_weight: 3.0,
            progress_weight: 2.0,
            strategic_move_probability: 0.7,
            random_move_probability: 0.8,
            easy_wall_sample_size: 10,
            wall_candidate_radius: 2,
            max_wall_candidates: 20,
            win_score: 1000.0,
            parallel_root: false,
            time_limit: None,
        }
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            path_weight: config
                .get("path_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.path_weight),
            walls_weight: config
                .get("walls_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.walls_weight),
            center_weight: config
                .get("center_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.center_weight),
            blocking_weight: config
                .get("blocking_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.blocking_weight),
            progress_weight: config
                .get("progress_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.progress_weight),
            strategic_move_probability: config
                .get("strategic_move_probability")
                .and_then(|v| v.as_f32())
                .map(f64::from)
                .unwrap_or(defaults.strategic_move_probability),
            random_move_probability: config
                .get("random_move_probability")
                .and_then(|v| v.as_f32())
                .map(f64::from)
                .unwrap_or(defaults.random_move_probability),
            easy_wall_sample_size: config
                .get("easy_wall_sample_size")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.easy_wall_sample_size),
            wall_candidate_radius: config
                .get("wall_candidate_radius")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.wall_candidate_radius),
            max_wall_candidates: config
                .get("max_wall_candidates")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.max_wall_candidates),
            win_score: config
                .get("win_score")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.win_score),
            parallel_root: config
                .get("parallel_root")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.parallel_root),
            time_limit: config
                .get("time_limit_ms")
                .and_then(|v| v.as_u64())
                .map(Duration::from_millis),
        })
    }
}
