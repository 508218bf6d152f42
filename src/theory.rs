use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One of the 12 chromatic semitone identities, octave-independent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum PitchClass {
    C,
    #[strum(serialize = "C#")]
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[strum(serialize = "D#")]
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[strum(serialize = "F#")]
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[strum(serialize = "G#")]
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[strum(serialize = "A#")]
    #[serde(rename = "A#")]
    ASharp,
    B,
}

pub const CHROMATIC_SCALE: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Semitone index within the C-rooted chromatic scale (C = 0 .. B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        CHROMATIC_SCALE[index % 12]
    }

    /// Shift by a signed number of semitones, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        let index = (self.index() as i32 + semitones).rem_euclid(12);
        CHROMATIC_SCALE[index as usize]
    }
}

/// Chord quality tag. Intentionally a flat enum mapped through a static
/// interval table rather than a type hierarchy, so the set stays open to
/// extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Add2,
    Add4,
    Add6,
    Add9,
    Dom7,
    Maj7,
    Min7,
    Min7b5,
    Dim7,
    MinMaj7,
    Dom9,
    Maj9,
    Min9,
    Dom11,
    Maj11,
    Min11,
    Dom13,
    Maj13,
    Min13,
}

impl ChordQuality {
    /// Semitone offsets from the root, in defining order (root first,
    /// highest extension last). Extensions above the octave stay un-folded
    /// here; `chord_tones` wraps them back into pitch classes.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Sus2 => &[0, 2, 7],
            Self::Sus4 => &[0, 5, 7],
            Self::Add2 => &[0, 2, 4, 7],
            Self::Add4 => &[0, 4, 5, 7],
            Self::Add6 => &[0, 4, 7, 9],
            Self::Add9 => &[0, 4, 7, 14],
            Self::Dom7 => &[0, 4, 7, 10],
            Self::Maj7 => &[0, 4, 7, 11],
            Self::Min7 => &[0, 3, 7, 10],
            Self::Min7b5 => &[0, 3, 6, 10],
            Self::Dim7 => &[0, 3, 6, 9],
            Self::MinMaj7 => &[0, 3, 7, 11],
            Self::Dom9 => &[0, 4, 7, 10, 14],
            Self::Maj9 => &[0, 4, 7, 11, 14],
            Self::Min9 => &[0, 3, 7, 10, 14],
            Self::Dom11 => &[0, 4, 7, 10, 14, 17],
            Self::Maj11 => &[0, 4, 7, 11, 14, 17],
            Self::Min11 => &[0, 3, 7, 10, 14, 17],
            Self::Dom13 => &[0, 4, 7, 10, 14, 17, 21],
            Self::Maj13 => &[0, 4, 7, 11, 14, 17, 21],
            Self::Min13 => &[0, 3, 7, 10, 14, 17, 21],
        }
    }

    /// Conventional chord symbol suffix ("" for major, "m7" for minor
    /// seventh, etc.), used by report rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Diminished => "dim",
            Self::Augmented => "aug",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
            Self::Add2 => "add2",
            Self::Add4 => "add4",
            Self::Add6 => "add6",
            Self::Add9 => "add9",
            Self::Dom7 => "7",
            Self::Maj7 => "maj7",
            Self::Min7 => "m7",
            Self::Min7b5 => "m7b5",
            Self::Dim7 => "dim7",
            Self::MinMaj7 => "mM7",
            Self::Dom9 => "9",
            Self::Maj9 => "maj9",
            Self::Min9 => "m9",
            Self::Dom11 => "11",
            Self::Maj11 => "maj11",
            Self::Min11 => "m11",
            Self::Dom13 => "13",
            Self::Maj13 => "maj13",
            Self::Min13 => "m13",
        }
    }
}

/// The chord's constituent pitch classes, ordered by the quality's interval
/// list. For every supported quality the entries are distinct mod 12, so the
/// length doubles as the distinct-tone count.
pub fn chord_tones(root: PitchClass, quality: ChordQuality) -> Vec<PitchClass> {
    quality
        .intervals()
        .iter()
        .map(|&semitones| root.transpose(semitones))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScaleType {
    Major,
    Minor,
}

impl ScaleType {
    pub fn intervals(self) -> &'static [i32; 7] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::Minor => &[0, 2, 3, 5, 7, 8, 10],
        }
    }
}

pub fn scale(root: PitchClass, scale_type: ScaleType) -> Vec<PitchClass> {
    scale_type
        .intervals()
        .iter()
        .map(|&semitones| root.transpose(semitones))
        .collect()
}

/// One degree of a diatonic harmonization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicChord {
    pub root: PitchClass,
    pub quality: ChordQuality,
    pub roman_numeral: &'static str,
}

const MAJOR_DEGREES: [(ChordQuality, &str); 7] = [
    (ChordQuality::Major, "I"),
    (ChordQuality::Minor, "ii"),
    (ChordQuality::Minor, "iii"),
    (ChordQuality::Major, "IV"),
    (ChordQuality::Major, "V"),
    (ChordQuality::Minor, "vi"),
    (ChordQuality::Diminished, "vii°"),
];

const MINOR_DEGREES: [(ChordQuality, &str); 7] = [
    (ChordQuality::Minor, "i"),
    (ChordQuality::Diminished, "ii°"),
    (ChordQuality::Major, "III"),
    (ChordQuality::Minor, "iv"),
    (ChordQuality::Minor, "v"),
    (ChordQuality::Major, "VI"),
    (ChordQuality::Major, "VII"),
];

/// The seven triads native to a key, one per scale degree.
pub fn diatonic_chords(key: PitchClass, scale_type: ScaleType) -> Vec<DiatonicChord> {
    let degrees = match scale_type {
        ScaleType::Major => &MAJOR_DEGREES,
        ScaleType::Minor => &MINOR_DEGREES,
    };

    scale(key, scale_type)
        .into_iter()
        .zip(degrees.iter())
        .map(|(root, &(quality, roman_numeral))| DiatonicChord {
            root,
            quality,
            roman_numeral,
        })
        .collect()
}
