use crate::reports;
use clap::Args;
use fretforge::theory::{self, PitchClass, ScaleType};

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Key root, e.g. C, F#, A#
    pub root: PitchClass,

    #[arg(short, long, default_value = "major")]
    pub scale: ScaleType,
}

pub fn run(args: KeyArgs) {
    let notes = theory::scale(args.root, args.scale);
    let chords = theory::diatonic_chords(args.root, args.scale);

    println!("\n🎹 {} {}", args.root, args.scale);
    reports::print_scale(&notes);
    reports::print_diatonic_table(&chords);
}
