pub mod key;
pub mod tones;
pub mod voicings;
