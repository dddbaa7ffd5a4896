use std::error::Error;
use std::process;

use chordear::playback::PlaybackData;
use chordear::{
    chord_table, play_question, score_for, transpose_notes, ChordProgression, GameConfig,
    Inversion, Key,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

mod cli;

use cli::{Args, Command};

#[derive(Serialize)]
struct QuestionOutput<'a> {
    question: &'a ChordProgression,
    playback: &'a PlaybackData,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    match args.command {
        Command::Chords => {
            for chord in chord_table() {
                println!(
                    "{:<4} {:<13} root: {:<12} first: {:<12} second: {}",
                    chord.roman,
                    chord.name,
                    chord.voicing(Inversion::Root).to_string(),
                    chord.voicing(Inversion::First).to_string(),
                    chord.voicing(Inversion::Second),
                );
            }
        }
        Command::Levels => {
            for level in config.catalog.levels() {
                println!(
                    "Level {}: {} [{}], {} chords per question, {} questions, max score {}",
                    level.number,
                    level.description,
                    level.available_chords.join(" "),
                    level.chords_per_question,
                    level.questions_per_level,
                    level.max_score(),
                );
            }
        }
        Command::Transpose { key, notes } => {
            println!("{}", transpose_notes(&notes[..], &key)?.join(" "));
        }
        Command::Question {
            level,
            key,
            seed,
            json,
        } => {
            let key = key.map(|name| name.parse::<Key>()).transpose()?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let (question, playback) = play_question(&config, level, key, &mut rng)?;

            if json {
                let output = QuestionOutput {
                    question: &question,
                    playback: &playback,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Level {} in {}", question.level, question.key);
                for (i, chord) in question.chords.iter().enumerate() {
                    println!("  {}. {:<4} {:<14} {}", i + 1, chord.roman, chord.name, chord.voicing);
                }
            }
        }
        Command::Score {
            correct,
            wrong,
            level,
        } => {
            let score = score_for(correct, wrong);
            match level {
                Some(number) => println!("{} / {}", score, config.catalog.max_score(number)),
                None => println!("{}", score),
            }
        }
    }

    Ok(())
}
