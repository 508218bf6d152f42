use clap::{Parser, Subcommand};
use fretforge::config::ScoringWeights;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weights profile overriding the embedded scoring defaults.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search playable voicings for a chord
    Voicings(cmd::voicings::VoicingsArgs),
    /// List chord tones for a root across the quality library
    Tones(cmd::tones::TonesArgs),
    /// Show a key's scale and diatonic triads
    Key(cmd::key::KeyArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let file_weights = cli.weights.as_ref().map(|path| {
        println!("⚖️  Loading Weights from: {}", path);
        ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("❌ {}", e);
            process::exit(1);
        })
    });

    match cli.command {
        Commands::Voicings(mut args) => {
            if let Some(w) = file_weights {
                args.config.weights = w;
            }
            cmd::voicings::run(args);
        }
        Commands::Tones(args) => cmd::tones::run(args),
        Commands::Key(args) => cmd::key::run(args),
    }
}
