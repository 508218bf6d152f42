pub mod filter;
pub mod generator;
pub mod score;

use crate::config::{Config, ScoringWeights, SearchParams};
use crate::fretboard::{Fretboard, Instrument};
use crate::theory::{self, ChordQuality, PitchClass};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Sentinel fret value for a deliberately unsounded string.
pub const MUTED: i8 = -1;

/// One concrete fret-per-string assignment realizing a chord. Index order
/// matches the fretboard (index 0 = highest-pitched string). Immutable once
/// scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub frets: Vec<i8>,
    /// Lowest non-open fret used, or 0 if none. Anchors on-neck display.
    pub start_fret: i8,
    /// Lower = more playable. Total order used only for ranking.
    pub score: i32,
}

/// Stateless search pipeline: windowed candidate generation, validity
/// filtering, playability scoring, pattern dedup and ranking.
pub struct VoicingEngine {
    pub weights: ScoringWeights,
    pub search: SearchParams,
}

impl VoicingEngine {
    pub fn new(config: Config) -> Self {
        Self {
            weights: config.weights,
            search: config.search,
        }
    }

    /// Best playable voicings for the chord, ascending by score, at most
    /// `limit` entries. Unreachable chords yield an empty Vec, never an
    /// error.
    pub fn find(&self, board: &Fretboard, root: PitchClass, quality: ChordQuality) -> Vec<Voicing> {
        let required = theory::chord_tones(root, quality);
        let last_window = self.search.max_fret as i32 - 4;

        // Windows are independent; rayon's indexed collect keeps them in
        // neck order so dedup ties resolve identically to a serial run.
        let per_window: Vec<Vec<Voicing>> = (1..=last_window)
            .into_par_iter()
            .map(|window_start| self.window_candidates(board, &required, root, window_start as i8))
            .collect();

        let mut uniques: Vec<Voicing> = Vec::new();
        let mut by_pattern: HashMap<Vec<i8>, usize> = HashMap::new();
        for candidate in per_window.into_iter().flatten() {
            match by_pattern.get(&candidate.frets) {
                // Overlapping windows regenerate the same shape; keep the
                // best score at its first-seen position.
                Some(&slot) => {
                    if candidate.score < uniques[slot].score {
                        uniques[slot] = candidate;
                    }
                }
                None => {
                    by_pattern.insert(candidate.frets.clone(), uniques.len());
                    uniques.push(candidate);
                }
            }
        }

        debug!(
            "{}{}: {} unique voicings before ranking",
            root,
            quality.symbol(),
            uniques.len()
        );

        uniques.sort_by_key(|v| v.score);
        uniques.truncate(self.search.limit);
        uniques
    }

    fn window_candidates(
        &self,
        board: &Fretboard,
        required: &[PitchClass],
        root: PitchClass,
        window_start: i8,
    ) -> Vec<Voicing> {
        let choices = generator::string_choices(board, required, window_start, self.search.max_fret);

        let mut out = Vec::new();
        generator::for_each_fingering(&choices, &mut |frets| {
            if let Some(profile) = filter::analyze(frets, board, required, root) {
                out.push(Voicing {
                    frets: frets.to_vec(),
                    start_fret: profile.start_fret,
                    score: score::score(&profile, &self.weights),
                });
            }
        });
        out
    }
}

/// Convenience entry point with default weights, mirroring the shape of the
/// underlying instrument configuration: preset + per-string offsets +
/// explicit string count.
pub fn get_chord_voicings(
    instrument: Instrument,
    tuning_offsets: &[i32],
    string_count: usize,
    root: PitchClass,
    quality: ChordQuality,
    max_fret: i8,
    limit: usize,
) -> Vec<Voicing> {
    let board = Fretboard::with_tuning(instrument, tuning_offsets, string_count);
    let engine = VoicingEngine {
        weights: ScoringWeights::default(),
        search: SearchParams { max_fret, limit },
    };
    engine.find(&board, root, quality)
}
