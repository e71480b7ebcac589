mod chordseed {
    pub mod chord;
    pub mod noteparser;
    pub mod pitch;
    pub mod template;
    pub mod util;
}

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use crate::chordseed::chord::{chords_at_slot, detect_chords, NoteSet};
use crate::chordseed::template::SLOT_COUNT;

/// A command-line tool to generate chords based on seed notes.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Seed list of notes. First note is assumed to be the root. Flats are `b`.
    #[arg(short, long, default_value = "C, E, G")]
    root: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let notes = match NoteSet::from_str(&cli.root) {
        Ok(notes) => notes,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let intervals = notes.interval_set();
    for detection in detect_chords(&notes, &intervals) {
        println!("\nInput Detected: {}", detection);
    }

    let root = notes.root();
    for &note in notes.notes() {
        println!(
            "\n--------- Chords with {} ({} of root):",
            note,
            note.interval_from(root)
        );
        for slot in 0..SLOT_COUNT {
            println!("{} is note {} in chord:", note, slot + 1);
            for chord in chords_at_slot(note, slot) {
                println!("\t{}", chord);
            }
        }
    }
    ExitCode::SUCCESS
}
