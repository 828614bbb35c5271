//! Quiz state machine: per-question selections, reveal flags and score.
//!
//! The session never owns the questions; every transition that needs the
//! answer key takes the loaded question slice. Persisting the session is the
//! runner's job, see [`crate::runner::QuizRunner`].

use std::collections::BTreeSet;

use rand::Rng;

use crate::model::Question;
use crate::shuffle::{ShuffleMapping, shuffle_options};

// Submodules
pub mod actions;
pub mod queries;
pub mod resets;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    InProgress,
    Completed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuestionPhase {
    Unanswered,
    Revealed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    Ignored, // already revealed, empty selection or out of range
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) current_question_index: usize,
    pub(crate) selections: Vec<BTreeSet<usize>>, // shuffled positions
    pub(crate) revealed: Vec<bool>,
    pub(crate) score: usize,
    pub(crate) shuffle_mappings: Vec<ShuffleMapping>,
}

impl QuizSession {
    /// Fresh session: nothing selected, nothing revealed, one new shuffle per question.
    pub fn new<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> Self {
        Self {
            current_question_index: 0,
            selections: vec![BTreeSet::new(); questions.len()],
            revealed: vec![false; questions.len()],
            score: 0,
            shuffle_mappings: questions
                .iter()
                .map(|q| shuffle_options(&q.options, rng))
                .collect(),
        }
    }

    /// Assembles a session from already validated parts. The score is
    /// recomputed so it always agrees with the reveal flags.
    pub(crate) fn from_parts(
        questions: &[Question],
        current_question_index: usize,
        selections: Vec<BTreeSet<usize>>,
        revealed: Vec<bool>,
        shuffle_mappings: Vec<ShuffleMapping>,
    ) -> Self {
        let mut session = Self {
            current_question_index,
            selections,
            revealed,
            score: 0,
            shuffle_mappings,
        };
        session.score = session.recompute_score(questions);
        session
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn question(options: &[&str], answer: &[usize]) -> Question {
        Question {
            question: format!("pick {answer:?}"),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_vec(),
        }
    }

    /// Session whose mappings are given explicitly instead of shuffled.
    pub fn session_with_maps(questions: &[Question], maps: Vec<Vec<usize>>) -> QuizSession {
        let mappings = questions
            .iter()
            .zip(maps)
            .map(|(q, m)| ShuffleMapping::from_index_map(&q.options, m).expect("valid map"))
            .collect();
        QuizSession::from_parts(
            questions,
            0,
            vec![BTreeSet::new(); questions.len()],
            vec![false; questions.len()],
            mappings,
        )
    }
}
