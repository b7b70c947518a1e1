//! Text rendering of prompts and session results.

use enharmonic_core::question::{Direction, Question};
use enharmonic_core::session::{SessionReport, StepReport};
use std::fmt::Write;

pub const SPELLING_HELP: &str = "Spelling: big octaves use -N (C-1), small octaves use N (e1); \
# sharp, X double sharp, b flat, bb double flat. Separate spellings with spaces.";

pub fn semitone_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Semitone up",
        Direction::Down => "Semitone down",
    }
}

pub fn whole_tone_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Whole tone up",
        Direction::Down => "Whole tone down",
    }
}

/// Header printed before the answers of one question are read.
pub fn render_prompt(question: &Question, position: usize, total: usize) -> String {
    format!(
        "Question {} / {}: {}\n(semitone target has {} spellings, whole-tone target has {})",
        position + 1,
        total,
        question.prompt_display,
        question.semitone.expected.len(),
        question.whole_tone.expected.len()
    )
}

fn render_step(out: &mut String, label: &str, step: &StepReport) {
    let mark = if step.correct { '✓' } else { '✗' };
    let input = if step.input.is_empty() { "(empty)" } else { step.input.as_str() };
    let _ = writeln!(out, "  {mark} {label}: {input}");
    let _ = writeln!(out, "    expected: {}", step.expected.join(" "));
}

/// Overall accuracy followed by every question's answers.
pub fn render_results(report: &SessionReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Results ({}): {}% ({}/{})",
        report.difficulty, summary.accuracy_percent, summary.correct, summary.total_checks
    );
    for (i, item) in report.items.iter().enumerate() {
        let _ = writeln!(out, "\nQuestion {}: {}", i + 1, item.prompt_display);
        render_step(&mut out, semitone_label(item.semitone.direction), &item.semitone);
        render_step(&mut out, whole_tone_label(item.whole_tone.direction), &item.whole_tone);
    }
    out
}
