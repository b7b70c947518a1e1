//! # Practice Session Module
//!
//! Holds the state of one interval drill: the chosen difficulty, the generated
//! questions, the graded answers and the stage the drill is in. Timing of the
//! answer window belongs to the caller; the session only stores its length.

use crate::answer::check_answer;
use crate::catalog::Catalog;
use crate::question::{Direction, Question, generate_question};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by session operations used out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("`{operation}` is not allowed in the {stage} stage")]
    WrongStage { operation: &'static str, stage: Stage },

    #[error("unknown difficulty `{0}`, expected easy, medium, hard or extreme")]
    UnknownDifficulty(String),
}

/// Preset difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// Answer window and question count for this level.
    pub fn preset(self) -> DifficultyPreset {
        let (window_ms, count) = match self {
            Difficulty::Easy => (48_000, 4),
            Difficulty::Medium => (36_000, 6),
            Difficulty::Hard => (26_000, 8),
            Difficulty::Extreme => (20_000, 10),
        };
        DifficultyPreset {
            answer_window: Duration::from_millis(window_ms),
            count,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SessionError::UnknownDifficulty(s.to_string()))
    }
}

/// Settings derived from a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    /// Time allowed for both answers of one question.
    pub answer_window: Duration,
    /// Number of questions in a session.
    pub count: usize,
}

impl DifficultyPreset {
    pub fn with_count(self, count: usize) -> Self {
        Self { count, ..self }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Select,
    Practice,
    Results,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Select => "select",
            Stage::Practice => "practice",
            Stage::Results => "results",
        })
    }
}

/// The graded inputs for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub semitone_input: String,
    pub semitone_correct: bool,
    pub whole_tone_input: String,
    pub whole_tone_correct: bool,
}

/// Overall score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub correct: usize,
    pub total_checks: usize,
    /// Rounded to the nearest whole percent, 0 when nothing was answered.
    pub accuracy_percent: u32,
}

/// Outcome of one step for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub direction: Direction,
    pub input: String,
    pub correct: bool,
    pub expected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub prompt: String,
    pub prompt_display: String,
    pub semitone: StepReport,
    pub whole_tone: StepReport,
}

/// Everything needed to show the results of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub difficulty: Difficulty,
    pub summary: Summary,
    pub items: Vec<ItemReport>,
}

/// One interval drill, from difficulty selection to results.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    stage: Stage,
    difficulty: Difficulty,
    preset: DifficultyPreset,
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
}

impl PracticeSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_preset(difficulty, difficulty.preset())
    }

    /// A session whose preset differs from the level's defaults.
    pub fn with_preset(difficulty: Difficulty, preset: DifficultyPreset) -> Self {
        Self {
            stage: Stage::Select,
            difficulty,
            preset,
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn preset(&self) -> DifficultyPreset {
        self.preset
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Changes the level and resets the preset to its defaults.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.expect_stage(Stage::Select, "set_difficulty")?;
        self.difficulty = difficulty;
        self.preset = difficulty.preset();
        Ok(())
    }

    /// Generates the questions and enters the practice stage.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        self.expect_stage(Stage::Select, "start")?;
        self.questions = (0..self.preset.count)
            .map(|_| generate_question(catalog, &mut *rng))
            .collect();
        self.answers.clear();
        self.stage = if self.questions.is_empty() {
            Stage::Results
        } else {
            Stage::Practice
        };
        log::info!(
            "session started: {} with {} questions, {:?} per question",
            self.difficulty,
            self.questions.len(),
            self.preset.answer_window
        );
        Ok(())
    }

    /// The question awaiting an answer, if the session is in practice.
    pub fn current(&self) -> Option<&Question> {
        if self.stage != Stage::Practice {
            return None;
        }
        self.questions.get(self.answers.len())
    }

    /// Zero-based index of the current question and the question count.
    pub fn position(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    /// Grades both inputs for the current question and moves on.
    ///
    /// Inputs are trimmed before they are stored. The last submission moves
    /// the session to the results stage.
    pub fn submit_current(
        &mut self,
        semitone_input: &str,
        whole_tone_input: &str,
    ) -> Result<&AnswerRecord, SessionError> {
        self.expect_stage(Stage::Practice, "submit_current")?;
        let question = &self.questions[self.answers.len()];

        let semitone_input = semitone_input.trim().to_string();
        let whole_tone_input = whole_tone_input.trim().to_string();
        let record = AnswerRecord {
            semitone_correct: check_answer(&semitone_input, &question.semitone.expected),
            whole_tone_correct: check_answer(&whole_tone_input, &question.whole_tone.expected),
            semitone_input,
            whole_tone_input,
        };
        log::debug!(
            "answer {}: semitone {}, whole tone {}",
            self.answers.len() + 1,
            record.semitone_correct,
            record.whole_tone_correct
        );

        self.answers.push(record);
        if self.answers.len() >= self.questions.len() {
            self.stage = Stage::Results;
            log::info!("session finished: {:?}", self.summary());
        }
        Ok(&self.answers[self.answers.len() - 1])
    }

    /// Back to difficulty selection with nothing generated.
    pub fn reset(&mut self) {
        self.stage = Stage::Select;
        self.questions.clear();
        self.answers.clear();
    }

    pub fn summary(&self) -> Summary {
        let correct = self
            .answers
            .iter()
            .map(|a| usize::from(a.semitone_correct) + usize::from(a.whole_tone_correct))
            .sum();
        let total_checks = self.answers.len() * 2;
        let accuracy_percent = if total_checks == 0 {
            0
        } else {
            (correct as f64 / total_checks as f64 * 100.0).round() as u32
        };
        Summary {
            correct,
            total_checks,
            accuracy_percent,
        }
    }

    /// Per-question results for every answered question.
    pub fn report(&self) -> SessionReport {
        let items = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| ItemReport {
                prompt: q.prompt_token.clone(),
                prompt_display: q.prompt_display.clone(),
                semitone: StepReport {
                    direction: q.semitone.direction,
                    input: a.semitone_input.clone(),
                    correct: a.semitone_correct,
                    expected: q.semitone.expected.clone(),
                },
                whole_tone: StepReport {
                    direction: q.whole_tone.direction,
                    input: a.whole_tone_input.clone(),
                    correct: a.whole_tone_correct,
                    expected: q.whole_tone.expected.clone(),
                },
            })
            .collect();
        SessionReport {
            difficulty: self.difficulty,
            summary: self.summary(),
            items,
        }
    }

    fn expect_stage(&self, stage: Stage, operation: &'static str) -> Result<(), SessionError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(SessionError::WrongStage {
                operation,
                stage: self.stage,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn started(difficulty: Difficulty) -> PracticeSession {
        let mut session = PracticeSession::new(difficulty);
        session.start(Catalog::standard(), &mut seeded(11)).unwrap();
        session
    }

    #[test]
    fn presets_match_levels() {
        assert_eq!(Difficulty::Easy.preset().count, 4);
        assert_eq!(Difficulty::Medium.preset().answer_window, Duration::from_secs(36));
        assert_eq!(Difficulty::Hard.preset().count, 8);
        assert_eq!(Difficulty::Extreme.preset().answer_window, Duration::from_secs(20));
    }

    #[test]
    fn difficulty_parses_by_name() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "brutal".parse::<Difficulty>(),
            Err(SessionError::UnknownDifficulty("brutal".into()))
        );
    }

    #[test]
    fn start_generates_preset_count() {
        let session = started(Difficulty::Medium);
        assert_eq!(session.stage(), Stage::Practice);
        assert_eq!(session.questions().len(), 6);
        assert_eq!(session.position(), (0, 6));
    }

    #[test]
    fn correct_answers_score_full_marks() {
        let mut session = started(Difficulty::Easy);
        while let Some(q) = session.current() {
            let semi = q.semitone.expected.join(" ");
            let whole = q.whole_tone.expected.join(" ");
            let record = session.submit_current(&semi, &whole).unwrap();
            assert!(record.semitone_correct && record.whole_tone_correct);
        }
        assert_eq!(session.stage(), Stage::Results);
        assert_eq!(
            session.summary(),
            Summary {
                correct: 8,
                total_checks: 8,
                accuracy_percent: 100
            }
        );
    }

    #[test]
    fn mixed_answers_round_accuracy() {
        let preset = Difficulty::Easy.preset().with_count(3);
        let mut session = PracticeSession::with_preset(Difficulty::Easy, preset);
        session.start(Catalog::standard(), &mut seeded(5)).unwrap();
        let q = session.current().unwrap().clone();
        session.submit_current(&q.semitone.expected.join(" "), "").unwrap();
        session.submit_current("", "").unwrap();
        session.submit_current("", "").unwrap();
        // 1 of 6 checks, 16.67% rounds to 17.
        assert_eq!(session.summary().accuracy_percent, 17);
        assert_eq!(session.report().items.len(), 3);
    }

    #[test]
    fn inputs_are_trimmed() {
        let mut session = started(Difficulty::Easy);
        let record = session.submit_current("  #C bD ", "\tD\n").unwrap();
        assert_eq!(record.semitone_input, "#C bD");
        assert_eq!(record.whole_tone_input, "D");
    }

    #[test]
    fn submit_outside_practice_is_rejected() {
        let mut session = PracticeSession::new(Difficulty::Easy);
        assert_eq!(
            session.submit_current("", "").unwrap_err(),
            SessionError::WrongStage {
                operation: "submit_current",
                stage: Stage::Select
            }
        );
    }

    #[test]
    fn difficulty_is_locked_during_practice() {
        let mut session = started(Difficulty::Easy);
        assert!(session.set_difficulty(Difficulty::Hard).is_err());
        session.reset();
        assert_eq!(session.stage(), Stage::Select);
        assert!(session.questions().is_empty());
        session.set_difficulty(Difficulty::Hard).unwrap();
        assert_eq!(session.preset().count, 8);
    }

    #[test]
    fn empty_summary_is_zero() {
        let session = PracticeSession::new(Difficulty::Easy);
        assert_eq!(session.summary().accuracy_percent, 0);
    }

    #[test]
    fn report_serializes_directions_in_lowercase() {
        let mut session = started(Difficulty::Easy);
        session.submit_current("", "").unwrap();
        let json = serde_json::to_value(session.report()).unwrap();
        let dir = json["items"][0]["semitone"]["direction"].as_str().unwrap();
        assert!(dir == "up" || dir == "down");
        assert_eq!(json["difficulty"], "easy");
    }
}
