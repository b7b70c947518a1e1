//! # Representative Token Picker
//!
//! Chooses which spelling of a class is shown as the question prompt, with a
//! bias that decides whether the prompt carries an accidental.

use crate::notation::{Accidental, accidental_of};
use rand::Rng;
use rand::seq::SliceRandom;

/// Decides the accidental style for a prompt drawn from `tokens`.
///
/// Half of the time the natural spelling is preferred, if the class has one.
/// Otherwise one of the accidentals present in the class is chosen uniformly,
/// candidates listed in [`Accidental::PRIORITY`] order. `None` means natural.
pub fn pick_accidental_preference<R: Rng + ?Sized>(
    tokens: &[String],
    rng: &mut R,
) -> Option<Accidental> {
    let has_natural = tokens.iter().any(|t| accidental_of(t).is_none());
    if rng.gen_bool(0.5) && has_natural {
        return None;
    }

    let present: Vec<Accidental> = Accidental::PRIORITY
        .into_iter()
        .filter(|acc| tokens.iter().any(|t| accidental_of(t) == Some(*acc)))
        .collect();
    present.choose(rng).copied()
}

/// Picks one spelling from a class.
///
/// Fallback chain, each step uniform among its candidates:
/// 1. tokens carrying `preferred`
/// 2. natural tokens
/// 3. any token
///
/// Returns `None` only for an empty class.
pub fn pick_representative_token<'a, R: Rng + ?Sized>(
    tokens: &'a [String],
    preferred: Option<Accidental>,
    rng: &mut R,
) -> Option<&'a str> {
    if let Some(pref) = preferred {
        let candidates: Vec<&String> = tokens
            .iter()
            .filter(|t| accidental_of(t) == Some(pref))
            .collect();
        if let Some(&token) = candidates.choose(rng) {
            return Some(token.as_str());
        }
    }

    let naturals: Vec<&String> = tokens.iter().filter(|t| accidental_of(t).is_none()).collect();
    if let Some(&token) = naturals.choose(rng) {
        return Some(token.as_str());
    }

    tokens.choose(rng).map(String::as_str)
}
