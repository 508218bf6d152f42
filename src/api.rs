use crate::config::{ScoringWeights, SearchParams};
use crate::fretboard::{Fretboard, Instrument};
use crate::theory::{self, ChordQuality, PitchClass};
use crate::voicing::{Voicing, VoicingEngine};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A voicing search request as an embedding host (service, UI bridge)
/// would pose it over JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoicingQuery {
    pub instrument: Instrument,
    #[serde(default)]
    pub tuning_offsets: Vec<i32>,
    pub root: PitchClass,
    pub quality: ChordQuality,
    #[serde(default = "default_max_fret")]
    pub max_fret: i8,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_max_fret() -> i8 {
    SearchParams::default().max_fret
}

fn default_limit() -> usize {
    SearchParams::default().limit
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoicingReport {
    /// Display symbol, e.g. "Cmaj7".
    pub chord: String,
    pub notes: Vec<PitchClass>,
    pub voicings: Vec<Voicing>,
}

/// Service: run one voicing search. Total over well-formed queries; an
/// unreachable chord reports zero voicings rather than failing.
pub fn find_voicings(query: &VoicingQuery, weights: ScoringWeights) -> VoicingReport {
    let board = Fretboard::with_tuning(
        query.instrument,
        &query.tuning_offsets,
        query.instrument.string_count(),
    );
    let engine = VoicingEngine {
        weights,
        search: SearchParams {
            max_fret: query.max_fret,
            limit: query.limit,
        },
    };

    let notes = theory::chord_tones(query.root, query.quality);
    let voicings = engine.find(&board, query.root, query.quality);
    info!(
        "{}{} on {}: {} voicings",
        query.root,
        query.quality.symbol(),
        query.instrument,
        voicings.len()
    );

    VoicingReport {
        chord: format!("{}{}", query.root, query.quality.symbol()),
        notes,
        voicings,
    }
}
