use crate::error::{FfResult, FretForgeError};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Highest fret considered by the sliding-window search.
    #[arg(long, default_value_t = 18)]
    pub max_fret: i8,

    /// Maximum number of ranked voicings returned.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_fret: 18,
            limit: 10,
        }
    }
}

/// Additive playability weights. Lower total score = more playable;
/// bonuses subtract, penalties add.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === BASS NOTE ===
    #[arg(long, default_value_t = 50)]
    pub bonus_root_bass: i32,
    #[arg(long, default_value_t = 20)]
    pub penalty_inversion: i32,

    // === STRING USAGE ===
    #[arg(long, default_value_t = 20)]
    pub penalty_mute: i32,
    #[arg(long, default_value_t = 10)]
    pub bonus_open_string: i32,

    // === SHAPE ===
    // Standard rigid barres (E and A shape) beat partial ones
    #[arg(long, default_value_t = 20)]
    pub bonus_full_barre: i32,
    #[arg(long, default_value_t = 2)]
    pub weight_position: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            bonus_root_bass: 50,
            penalty_inversion: 20,
            penalty_mute: 20,
            bonus_open_string: 10,
            bonus_full_barre: 20,
            weight_position: 2,
        }
    }
}

impl ScoringWeights {
    /// Load a weights profile from JSON. Missing fields keep their
    /// defaults, so profiles only need the overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> FfResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Parse a comma-separated tuning string ("0,0,0,0,0,-2") into per-string
/// semitone offsets, highest-pitched string first.
pub fn parse_tuning(s: &str) -> FfResult<Vec<i32>> {
    s.split(',')
        .map(|part| {
            part.trim().parse::<i32>().map_err(|_| {
                FretForgeError::Config(format!("Invalid semitone offset '{}'", part.trim()))
            })
        })
        .collect()
}
