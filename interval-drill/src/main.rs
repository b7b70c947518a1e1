//! # Interval Drill - Enharmonic Semitone / Whole-Tone Practice
//!
//! Terminal front end for the enharmonic interval drill. Each question shows a
//! pitch name and asks for every enharmonic spelling of the note a semitone
//! and a whole tone away, within a time limit set by the difficulty.
//!
//! ## Architecture
//! - **Main Thread**: session loop, prompts and results
//! - **Input Thread**: dedicated stdin reader
//! - **Communication**: crossbeam channel, waited on with the answer deadline

mod config;
mod input;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use enharmonic_core::{Catalog, Difficulty, PracticeSession, rng};
use env_logger::Env;
use input::{InputWorker, LineEvent};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Enharmonic interval drill: name every spelling of the note a semitone and a whole tone away.
#[derive(Parser, Debug)]
#[command(name = "interval-drill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Difficulty level: easy, medium, hard or extreme
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Number of questions (defaults to the difficulty's count)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for a reproducible drill
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with an alternative section table
    #[arg(long)]
    sections: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let loaded;
    let catalog: &Catalog = match &cli.sections {
        Some(path) => {
            loaded = config::load_catalog(path)?;
            &loaded
        }
        None => Catalog::standard(),
    };

    let mut preset = cli.difficulty.preset();
    if let Some(count) = cli.count {
        preset = preset.with_count(count);
    }

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("using seed {seed}");
            rng::seeded(seed)
        }
        None => rng::from_entropy(),
    };

    let mut session = PracticeSession::with_preset(cli.difficulty, preset);
    session.start(catalog, &mut rng)?;

    let input = InputWorker::spawn().context("Failed to start the stdin reader")?;
    run_drill(&mut session, &input)?;

    let report = session.report();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_results(&report));
    }
    Ok(())
}

/// Asks every question of a started session and records the answers.
///
/// Both answers of a question share one window. When it closes, whatever has
/// been entered so far is submitted, and lines typed after that are dropped
/// before the next prompt. Once stdin is closed every remaining answer is empty.
fn run_drill(session: &mut PracticeSession, input: &InputWorker) -> Result<()> {
    let window = session.preset().answer_window;
    let mut stdin_open = true;
    let mut timed_out = false;

    println!("{}", report::SPELLING_HELP);
    println!("You have {} seconds per question.\n", window.as_secs());

    while let Some(question) = session.current() {
        let (position, total) = session.position();
        println!("{}", report::render_prompt(question, position, total));

        let semitone_label = report::semitone_label(question.semitone.direction);
        let whole_tone_label = report::whole_tone_label(question.whole_tone.direction);
        if timed_out {
            input.discard_pending();
        }
        let deadline = Instant::now() + window;

        let semitone = read_answer(input, semitone_label, deadline, &mut stdin_open)?;
        let whole_tone = match &semitone {
            Some(_) => read_answer(input, whole_tone_label, deadline, &mut stdin_open)?,
            None => None,
        };
        timed_out = stdin_open && whole_tone.is_none();
        if timed_out {
            println!("Time is up.");
        }

        session.submit_current(
            semitone.as_deref().unwrap_or_default(),
            whole_tone.as_deref().unwrap_or_default(),
        )?;
        println!();
    }
    Ok(())
}

/// Prompts for one answer. `None` means the window closed or stdin is gone.
fn read_answer(
    input: &InputWorker,
    label: &str,
    deadline: Instant,
    stdin_open: &mut bool,
) -> Result<Option<String>> {
    if !*stdin_open {
        return Ok(None);
    }
    print!("{label}: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    match input.next_line(deadline) {
        LineEvent::Line(line) => Ok(Some(line)),
        LineEvent::TimedOut => {
            println!();
            Ok(None)
        }
        LineEvent::Closed => {
            println!();
            log::info!("stdin closed, remaining answers are empty");
            *stdin_open = false;
            Ok(None)
        }
    }
}
