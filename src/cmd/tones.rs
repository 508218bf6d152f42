use crate::reports;
use clap::Args;
use fretforge::theory::{ChordQuality, PitchClass};
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct TonesArgs {
    /// Root pitch class, e.g. C, F#, A#
    pub root: PitchClass,

    /// Restrict to a single quality (default: the full library)
    #[arg(short, long)]
    pub quality: Option<ChordQuality>,
}

pub fn run(args: TonesArgs) {
    let qualities: Vec<ChordQuality> = match args.quality {
        Some(q) => vec![q],
        None => ChordQuality::iter().collect(),
    };

    println!("\n🎼 Chord tones for root {}", args.root);
    reports::print_tone_table(args.root, &qualities);
}
