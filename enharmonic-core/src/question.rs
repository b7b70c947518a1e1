//! # Question Generator Module
//!
//! Produces one practice question: a prompt note drawn from the catalog's
//! prompt range and the two classes reached by a semitone and a whole-tone
//! step from it.
//!
//! ## Behaviour
//! - The prompt class is drawn uniformly from the prompt range
//! - The semitone and whole-tone directions are chosen independently
//! - A direction is admissible only if its step stays inside the prompt range
//! - Targets always stay inside the catalog

use crate::catalog::{BaseRange, Catalog};
use crate::notation::format_display;
use crate::picker::{pick_accidental_preference, pick_representative_token};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Step direction relative to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// `-1` for down, `+1` for up.
    pub fn sign(self) -> isize {
        match self {
            Direction::Down => -1,
            Direction::Up => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Down => "down",
            Direction::Up => "up",
        })
    }
}

/// One interval target of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub direction: Direction,
    /// Catalog index of the target class.
    pub index: usize,
    /// Every spelling of the target class, in catalog order.
    pub expected: Vec<String>,
}

impl Step {
    /// The step of `semitones` in `direction` from class `base`, or `None`
    /// when the target falls outside the catalog.
    pub fn from_base(
        catalog: &Catalog,
        base: usize,
        direction: Direction,
        semitones: usize,
    ) -> Option<Self> {
        let index = match direction {
            Direction::Up => base.checked_add(semitones)?,
            Direction::Down => base.checked_sub(semitones)?,
        };
        let expected = catalog.class(index)?.tokens.clone();
        Some(Self {
            direction,
            index,
            expected,
        })
    }
}

/// A single drill item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub base_index: usize,
    /// ASCII spelling of the prompt, e.g. `bbD-1`.
    pub prompt_token: String,
    /// Display form of the prompt, e.g. `bbD₁`.
    pub prompt_display: String,
    pub semitone: Step,
    pub whole_tone: Step,
}

/// Chooses the direction of a `step`-semitone move from `base`.
///
/// A direction is admissible when the target stays inside `range`. If both
/// are admissible one is chosen uniformly. If neither is, the move goes up
/// when `base + step` is still inside the catalog and down otherwise.
pub fn choose_direction<R: Rng + ?Sized>(
    base: usize,
    step: usize,
    range: BaseRange,
    catalog_len: usize,
    rng: &mut R,
) -> Direction {
    let down_ok = base.checked_sub(step).is_some_and(|target| target >= range.start);
    let up_ok = base + step <= range.end;

    match (down_ok, up_ok) {
        (true, true) => {
            if rng.gen_bool(0.5) {
                Direction::Down
            } else {
                Direction::Up
            }
        }
        (true, false) => Direction::Down,
        (false, true) => Direction::Up,
        (false, false) => {
            log::warn!(
                "no admissible direction for a {step}-semitone step from {base} in {}..={}",
                range.start,
                range.end
            );
            if base + step < catalog_len {
                Direction::Up
            } else {
                Direction::Down
            }
        }
    }
}

/// Generates one question from `catalog`.
///
/// Pure apart from the draws it takes from `rng`; a seeded generator makes
/// the result reproducible.
pub fn generate_question<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Question {
    let range = catalog.base_range();
    let base = rng.gen_range(range.as_range());

    let semi_dir = choose_direction(base, 1, range, catalog.len(), rng);
    let whole_dir = choose_direction(base, 2, range, catalog.len(), rng);

    let base_tokens = catalog.tokens(base);
    let preferred = pick_accidental_preference(base_tokens, rng);
    let prompt_token = pick_representative_token(base_tokens, preferred, rng)
        .unwrap_or_default()
        .to_string();

    // This is safe as a built catalog keeps every step from its prompt range in bounds.
    let semitone = Step::from_base(catalog, base, semi_dir, 1).unwrap();
    let whole_tone = Step::from_base(catalog, base, whole_dir, 2).unwrap();

    let question = Question {
        base_index: base,
        prompt_display: format_display(&prompt_token),
        prompt_token,
        semitone,
        whole_tone,
    };
    log::debug!(
        "question: {} (class {}), semitone {} -> {}, whole tone {} -> {}",
        question.prompt_token,
        question.base_index,
        question.semitone.direction,
        question.semitone.index,
        question.whole_tone.direction,
        question.whole_tone.index
    );
    question
}
