//! # Notation Module
//!
//! Splits ASCII pitch tokens into accidental, letter and octave suffix,
//! renders them for display and parses free-text answers.
//!
//! ## Features
//! - Longest-match accidental detection (`bb`, `#`, `X`, `b`)
//! - Lossless token decomposition
//! - Helmholtz display form: big registers as subscripts (C₁), small registers as superscripts (e¹)
//! - Whitespace-delimited answer parsing

use serde::{Deserialize, Serialize};
use std::fmt;

/// A spelling modifier in front of the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Accidental {
    /// `#`, one semitone up.
    Sharp,
    /// `X`, two semitones up.
    DoubleSharp,
    /// `b`, one semitone down.
    Flat,
    /// `bb`, two semitones down.
    DoubleFlat,
}

impl Accidental {
    /// Candidate order used when picking an accidental for a prompt.
    pub const PRIORITY: [Accidental; 4] = [
        Accidental::Sharp,
        Accidental::DoubleSharp,
        Accidental::Flat,
        Accidental::DoubleFlat,
    ];

    // `bb` must be tried before `b`.
    const MATCH_ORDER: [Accidental; 4] = [
        Accidental::DoubleFlat,
        Accidental::Sharp,
        Accidental::DoubleSharp,
        Accidental::Flat,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "X",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The register suffix after the letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OctaveSuffix {
    /// `-N`: big registers below the great octave. Holds the digits only.
    Big(String),
    /// `N`: small registers above the small octave. Holds the digits.
    Small(String),
}

impl OctaveSuffix {
    /// The suffix exactly as written in the token.
    pub fn as_str(&self) -> String {
        match self {
            OctaveSuffix::Big(digits) => format!("-{digits}"),
            OctaveSuffix::Small(digits) => digits.clone(),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        let (big, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(if big {
            OctaveSuffix::Big(digits.to_string())
        } else {
            OctaveSuffix::Small(digits.to_string())
        })
    }
}

/// The three components of a pitch token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    pub accidental: Option<Accidental>,
    pub letter: char,
    pub suffix: Option<OctaveSuffix>,
}

impl TokenParts {
    /// Reassembles the original token.
    pub fn to_token(&self) -> String {
        let mut token = String::new();
        if let Some(acc) = self.accidental {
            token.push_str(acc.symbol());
        }
        token.push(self.letter);
        if let Some(suffix) = &self.suffix {
            token.push_str(&suffix.as_str());
        }
        token
    }
}

fn is_pitch_letter(c: char) -> bool {
    matches!(c, 'A'..='G' | 'a'..='g')
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(is_pitch_letter)
}

/// Splits off the accidental. An accidental only counts when a letter
/// follows it, so `bb` reads as flat + `b` rather than a bare double flat.
fn split_accidental(token: &str) -> (Option<Accidental>, &str) {
    for acc in Accidental::MATCH_ORDER {
        if let Some(rest) = token.strip_prefix(acc.symbol()) {
            if starts_with_letter(rest) {
                return (Some(acc), rest);
            }
        }
    }
    (None, token)
}

/// Extracts the leading accidental of a token, `None` for a natural.
pub fn accidental_of(token: &str) -> Option<Accidental> {
    split_accidental(token).0
}

/// Extracts the letter that follows the accidental.
pub fn letter_of(token: &str) -> Option<char> {
    let (_, rest) = split_accidental(token);
    rest.chars().next().filter(|c| is_pitch_letter(*c))
}

/// Extracts the octave suffix after the letter, if any.
pub fn octave_suffix_of(token: &str) -> Option<OctaveSuffix> {
    decompose(token).and_then(|parts| parts.suffix)
}

/// Decomposes a token into accidental, letter and suffix.
///
/// Returns `None` when the token has no letter or trailing text that is
/// not a valid octave suffix.
pub fn decompose(token: &str) -> Option<TokenParts> {
    let (accidental, rest) = split_accidental(token);
    let mut chars = rest.chars();
    let letter = chars.next().filter(|c| is_pitch_letter(*c))?;
    let tail = chars.as_str();
    let suffix = if tail.is_empty() {
        None
    } else {
        Some(OctaveSuffix::parse(tail)?)
    };
    Some(TokenParts { accidental, letter, suffix })
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

fn map_digits(digits: &str, table: &[char; 10]) -> String {
    digits
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| table[d as usize]))
        .collect()
}

/// Formats a token for display.
///
/// The accidental is kept as written. Big-register suffixes become subscript
/// digits (`C-1` → `C₁`) and small-register suffixes become superscript digits
/// (`#f2` → `#f²`). A token that does not decompose is returned unchanged.
pub fn format_display(token: &str) -> String {
    let Some(parts) = decompose(token) else {
        return token.to_string();
    };
    let mut out = String::new();
    if let Some(acc) = parts.accidental {
        out.push_str(acc.symbol());
    }
    out.push(parts.letter);
    match &parts.suffix {
        Some(OctaveSuffix::Big(digits)) => out.push_str(&map_digits(digits, &SUBSCRIPT_DIGITS)),
        Some(OctaveSuffix::Small(digits)) => out.push_str(&map_digits(digits, &SUPERSCRIPT_DIGITS)),
        None => {}
    }
    out
}

/// Parses a free-text answer into tokens split on runs of whitespace.
pub fn parse_user_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
