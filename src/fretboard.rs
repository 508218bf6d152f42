use crate::error::FfResult;
use crate::theory::PitchClass;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Sounding class reported for a string index outside the configuration.
/// Callers treat it as "no tone match" rather than an error.
pub const DEFAULT_PITCH_CLASS: PitchClass = PitchClass::C;

/// Built-in instrument presets. String order is high-to-low pitch:
/// index 0 is the thinnest string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Guitar,
    Bass,
}

impl Instrument {
    pub fn open_strings(self) -> &'static [PitchClass] {
        use PitchClass::{A, B, D, E, G};
        match self {
            // E B G D A E (standard tuning, high E first)
            Self::Guitar => &[E, B, G, D, A, E],
            // G D A E
            Self::Bass => &[G, D, A, E],
        }
    }

    pub fn string_count(self) -> usize {
        self.open_strings().len()
    }
}

/// Runtime description of a stringed instrument: open-string pitch classes
/// plus signed per-string semitone offsets (0 = standard for that slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub name: String,
    pub open_strings: Vec<PitchClass>,
    #[serde(default)]
    pub tuning_offsets: Vec<i32>,
}

impl Fretboard {
    pub fn standard(instrument: Instrument) -> Self {
        Self {
            name: instrument.to_string(),
            open_strings: instrument.open_strings().to_vec(),
            tuning_offsets: Vec::new(),
        }
    }

    /// Preset instrument with custom tuning and an explicit string count.
    /// A count beyond the preset pads with the default class; a shorter
    /// count drops the lowest-pitched strings.
    pub fn with_tuning(instrument: Instrument, tuning_offsets: &[i32], string_count: usize) -> Self {
        let mut open_strings = instrument.open_strings().to_vec();
        open_strings.resize(string_count, DEFAULT_PITCH_CLASS);
        Self {
            name: instrument.to_string(),
            open_strings,
            tuning_offsets: tuning_offsets.to_vec(),
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> FfResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn string_count(&self) -> usize {
        self.open_strings.len()
    }

    /// Sounding pitch class at a fretboard position. Pure and total: an
    /// out-of-range string index degrades to `DEFAULT_PITCH_CLASS`, and a
    /// missing offset entry counts as 0.
    pub fn note_at(&self, string: usize, fret: i8) -> PitchClass {
        let open = self
            .open_strings
            .get(string)
            .copied()
            .unwrap_or(DEFAULT_PITCH_CLASS);
        let offset = self.tuning_offsets.get(string).copied().unwrap_or(0);
        open.transpose(offset + fret as i32)
    }
}
