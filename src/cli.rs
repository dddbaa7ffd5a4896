//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "chordear")]
#[command(about = "Chord tables, transposition and levels for chord ear training", long_about = None)]
pub struct Args {
    /// YAML config with default key, sound settings and level catalog
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the chord table with every inversion
    Chords,

    /// Print the level catalog
    Levels,

    /// Transpose a key-of-C voicing, e.g. `transpose --key D C4 E4 G4`
    Transpose {
        /// Target key (C, C#, D, ... B)
        #[arg(long, short)]
        key: String,

        /// Three note names
        #[arg(required = true, value_name = "NOTE")]
        notes: Vec<String>,
    },

    /// Generate one question for a level
    Question {
        #[arg(long, short)]
        level: u32,

        /// Key to play in; defaults to the configured key
        #[arg(long, short)]
        key: Option<String>,

        /// Seed for a reproducible question
        #[arg(long)]
        seed: Option<u64>,

        /// Print the question and playback data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a number of correct and wrong guesses
    Score {
        correct: u32,
        wrong: u32,

        /// Also show the maximum score for this level
        #[arg(long, short)]
        level: Option<u32>,
    },
}
