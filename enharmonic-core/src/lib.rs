// enharmonic-core/src/lib.rs

//! The core logic for the enharmonic interval drill.
//! This crate owns the catalog of enharmonic equivalence classes,
//! the question generator and the answer checker. It is completely
//! headless and performs no I/O.

pub mod answer;
pub mod catalog;
pub mod notation;
pub mod picker;
pub mod question;
pub mod rng;
pub mod sections;
pub mod session;

pub use answer::check_answer;
pub use catalog::{BaseRange, BaseSections, Catalog, CatalogError, EquivalenceClass};
pub use notation::{Accidental, format_display, parse_user_input};
pub use question::{Direction, Question, Step, generate_question};
pub use sections::{Section, standard_sections};
pub use session::{Difficulty, DifficultyPreset, PracticeSession, SessionError, Stage};
