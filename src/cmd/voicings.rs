use crate::reports;
use clap::Args;
use fretforge::config::{parse_tuning, Config};
use fretforge::fretboard::{Fretboard, Instrument};
use fretforge::theory::{self, ChordQuality, PitchClass};
use fretforge::voicing::VoicingEngine;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct VoicingsArgs {
    /// Root pitch class, e.g. C, F#, A#
    pub root: PitchClass,

    /// Chord quality, e.g. major, min7, dom13
    #[arg(default_value = "major")]
    pub quality: ChordQuality,

    #[arg(short, long, default_value = "guitar")]
    pub instrument: Instrument,

    /// Per-string semitone offsets, highest string first, e.g. "0,0,0,0,0,-2"
    #[arg(short, long)]
    pub tuning: Option<String>,

    /// Load the instrument from a fretboard JSON file instead of a preset
    #[arg(short, long)]
    pub fretboard: Option<String>,

    #[command(flatten)]
    pub config: Config,

    /// Emit JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: VoicingsArgs) {
    let board = match &args.fretboard {
        Some(path) => Fretboard::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("❌ {}", e);
            process::exit(1);
        }),
        None => {
            let offsets = args
                .tuning
                .as_deref()
                .map(parse_tuning)
                .transpose()
                .unwrap_or_else(|e| {
                    eprintln!("❌ {}", e);
                    process::exit(1);
                })
                .unwrap_or_default();
            Fretboard::with_tuning(args.instrument, &offsets, args.instrument.string_count())
        }
    };

    let engine = VoicingEngine::new(args.config);
    let notes = theory::chord_tones(args.root, args.quality);
    let voicings = engine.find(&board, args.root, args.quality);

    if args.json {
        match serde_json::to_string_pretty(&voicings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "\n🎸 {}{} on {} ({} strings)",
        args.root,
        args.quality.symbol(),
        board.name,
        board.string_count()
    );
    reports::print_chord_tones(&notes);

    if voicings.is_empty() {
        println!("\nNo playable voicing found within the fret limit.");
        return;
    }

    reports::print_voicing_table(&voicings, &board);
    for (rank, voicing) in voicings.iter().take(3).enumerate() {
        reports::print_voicing_grid(rank + 1, voicing, &board);
    }
}
