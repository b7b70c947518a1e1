//! # Catalog Module
//!
//! Builds the ordered table of enharmonic equivalence classes from section data.
//! Class `i + 1` always sits one semitone above class `i`, so every interval
//! calculation in the crate is plain index arithmetic.
//!
//! ## Features
//! - One class per section line, indexed contiguously from 0
//! - Token to class lookup
//! - Prompt range expressed as a span of sections
//! - Build-time validation of the static data and the range headroom

use crate::notation;
use crate::sections::{Section, standard_sections};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Smallest catalog for which every whole-tone step from the prompt range
/// stays inside the catalog.
pub const MIN_CATALOG_LEN: usize = 5;

/// Errors raised while building a catalog from section data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("token `{token}` appears in class {first} and again in class {second}")]
    DuplicateToken {
        token: String,
        first: usize,
        second: usize,
    },

    #[error("line {line} of section `{section}` has no tokens")]
    EmptyClass { section: String, line: usize },

    #[error("token `{token}` on line {line} of section `{section}` is not a pitch spelling")]
    MalformedToken {
        token: String,
        section: String,
        line: usize,
    },

    #[error("section {index} is out of range, the data has {available} sections")]
    MissingSection { index: usize, available: usize },

    #[error("prompt range {start}..={end} leaves no room for a whole-tone step")]
    InsufficientRange { start: usize, end: usize },

    #[error("catalog has {len} classes, at least {min} are required")]
    TooSmall { len: usize, min: usize },
}

/// A set of spellings that all denote the same pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    /// Spellings in the order the section data lists them.
    pub tokens: Vec<String>,
    pub section_index: usize,
    pub line_index: usize,
}

/// Which sections prompts are drawn from, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSections {
    pub first: usize,
    pub last: usize,
}

impl Default for BaseSections {
    /// "大字一组" through "小字二组" of the standard data.
    fn default() -> Self {
        Self { first: 1, last: 5 }
    }
}

/// Inclusive class-index range prompts are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseRange {
    pub start: usize,
    pub end: usize,
}

impl BaseRange {
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// The ordered enharmonic table plus its lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    classes: Vec<EquivalenceClass>,
    token_to_index: BTreeMap<String, usize>,
    section_labels: Vec<String>,
    base_range: BaseRange,
}

static STANDARD: Lazy<Catalog> = Lazy::new(|| {
    Catalog::build(&standard_sections()).expect("standard section data is well-formed")
});

impl Catalog {
    /// Builds a catalog whose prompt range is [`BaseSections::default`].
    pub fn build(sections: &[Section]) -> Result<Self, CatalogError> {
        Self::build_with_range(sections, BaseSections::default())
    }

    /// Builds a catalog from ordered section data.
    ///
    /// Sections and their lines must already be in ascending pitch order;
    /// this is not re-derived from the tokens.
    pub fn build_with_range(
        sections: &[Section],
        base: BaseSections,
    ) -> Result<Self, CatalogError> {
        let mut classes = Vec::new();
        let mut token_to_index = BTreeMap::new();
        // offsets[i] is the first class index of section i
        let mut offsets = Vec::with_capacity(sections.len() + 1);

        for (section_index, section) in sections.iter().enumerate() {
            offsets.push(classes.len());
            for (line_index, line) in section.lines.iter().enumerate() {
                let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                if tokens.is_empty() {
                    return Err(CatalogError::EmptyClass {
                        section: section.label.clone(),
                        line: line_index,
                    });
                }

                let index = classes.len();
                for token in &tokens {
                    if notation::decompose(token).is_none() {
                        return Err(CatalogError::MalformedToken {
                            token: token.clone(),
                            section: section.label.clone(),
                            line: line_index,
                        });
                    }
                    if let Some(&first) = token_to_index.get(token) {
                        return Err(CatalogError::DuplicateToken {
                            token: token.clone(),
                            first,
                            second: index,
                        });
                    }
                    token_to_index.insert(token.clone(), index);
                }

                classes.push(EquivalenceClass {
                    tokens,
                    section_index,
                    line_index,
                });
            }
        }
        offsets.push(classes.len());

        if classes.len() < MIN_CATALOG_LEN {
            return Err(CatalogError::TooSmall {
                len: classes.len(),
                min: MIN_CATALOG_LEN,
            });
        }

        let base_range = resolve_base_range(&offsets, base)?;
        log::debug!(
            "built catalog: {} classes in {} sections, prompt range {}..={}",
            classes.len(),
            sections.len(),
            base_range.start,
            base_range.end
        );

        Ok(Self {
            classes,
            token_to_index,
            section_labels: sections.iter().map(|s| s.label.clone()).collect(),
            base_range,
        })
    }

    /// The catalog built from [`standard_sections`], constructed once on first use.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    pub fn class(&self, index: usize) -> Option<&EquivalenceClass> {
        self.classes.get(index)
    }

    /// Tokens of the class at `index`, empty when out of range.
    pub fn tokens(&self, index: usize) -> &[String] {
        self.classes
            .get(index)
            .map(|class| class.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Index of the class listing `token`, if any class lists it.
    pub fn class_index_of(&self, token: &str) -> Option<usize> {
        self.token_to_index.get(token).copied()
    }

    pub fn base_range(&self) -> BaseRange {
        self.base_range
    }

    pub fn section_labels(&self) -> &[String] {
        &self.section_labels
    }

    /// Label of the section the class at `index` came from.
    pub fn section_label_of(&self, index: usize) -> Option<&str> {
        self.classes
            .get(index)
            .and_then(|class| self.section_labels.get(class.section_index))
            .map(String::as_str)
    }
}

fn resolve_base_range(offsets: &[usize], base: BaseSections) -> Result<BaseRange, CatalogError> {
    let available = offsets.len() - 1;
    for index in [base.first, base.last] {
        if index >= available {
            return Err(CatalogError::MissingSection { index, available });
        }
    }

    let start = offsets[base.first];
    let end = offsets[base.last + 1].saturating_sub(1);
    if end < start || end - start < 2 {
        return Err(CatalogError::InsufficientRange { start, end });
    }
    Ok(BaseRange { start, end })
}
