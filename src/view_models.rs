// src/view_models.rs

use crate::model::{Certification, Question};
use crate::quiz::QuizSession;

/// "A", "B", … for a shuffled position.
pub fn option_letter(position: usize) -> char {
    char::from(b'A' + (position % 26) as u8)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CertificationCard {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub full_name: String,
    pub available: bool,
    pub proctored: bool,
    pub external: Option<String>,
}

impl CertificationCard {
    pub fn new(cert: &Certification, proctored: bool) -> Self {
        Self {
            id: cert.id.clone(),
            icon: cert.icon.clone(),
            name: cert.name.clone(),
            full_name: cert.full_name.clone(),
            available: cert.available,
            proctored,
            external: cert.external.clone(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name).trim().to_string()
    }

    pub fn action_label(&self) -> &'static str {
        if self.available {
            "Start Practice →"
        } else {
            "Coming Soon ⏳"
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionStatus {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub status: OptionStatus,
}

impl OptionRow {
    pub fn label(&self) -> String {
        let mark = match self.status {
            OptionStatus::Correct => "  ✓",
            OptionStatus::Incorrect => "  ✗",
            OptionStatus::Neutral => "",
        };
        format!("{}. {}{}", self.letter, self.text, mark)
    }
}

/// Options of one question in display order. Marks only appear once the
/// question is revealed: every correct option, and any wrong pick.
pub fn option_rows(
    session: &QuizSession,
    question_index: usize,
    question: &Question,
) -> Vec<OptionRow> {
    let Some(mapping) = session.mapping(question_index) else {
        return Vec::new();
    };
    let revealed = session.is_revealed(question_index);
    let answers = question.answer_indices();
    let selection = session.selection(question_index);

    mapping
        .shuffled_options
        .iter()
        .enumerate()
        .map(|(position, text)| {
            let selected = selection.is_some_and(|s| s.contains(&position));
            let correct = mapping
                .original_index(position)
                .is_some_and(|original| answers.contains(&original));
            let status = match (revealed, correct, selected) {
                (false, _, _) => OptionStatus::Neutral,
                (true, true, _) => OptionStatus::Correct,
                (true, false, true) => OptionStatus::Incorrect,
                (true, false, false) => OptionStatus::Neutral,
            };
            OptionRow {
                letter: option_letter(position),
                text: text.clone(),
                selected,
                status,
            }
        })
        .collect()
}

/// Header line above the question.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressInfo {
    pub index: usize,
    pub total: usize,
    pub score: usize,
}

impl ProgressInfo {
    pub fn of(session: &QuizSession) -> Self {
        Self {
            index: session.current_question_index(),
            total: session.len(),
            score: session.score(),
        }
    }

    pub fn counter_label(&self) -> String {
        format!("Question {} of {}", (self.index + 1).min(self.total), self.total)
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        ((self.index + 1) as f32 / self.total as f32).min(1.0)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.score, self.index)
    }
}

/// Banner and answer key shown after submitting.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultInfo {
    pub correct: bool,
    pub answer_letters: Vec<char>,
}

impl ResultInfo {
    pub fn of(session: &QuizSession, question_index: usize, question: &Question) -> Option<Self> {
        if !session.is_revealed(question_index) {
            return None;
        }
        Some(Self {
            correct: session.is_correct(question_index, question),
            answer_letters: session
                .correct_positions(question_index, question)
                .into_iter()
                .map(option_letter)
                .collect(),
        })
    }

    pub fn banner(&self) -> &'static str {
        if self.correct { "✅ Correct!" } else { "❌ Incorrect!" }
    }

    pub fn answers_label(&self) -> String {
        let heading = if self.answer_letters.len() > 1 {
            "Correct Answers"
        } else {
            "Correct Answer"
        };
        let letters: Vec<String> = self.answer_letters.iter().map(char::to_string).collect();
        format!("{heading}: {}", letters.join(", "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
}

impl ScoreSummary {
    pub fn of(session: &QuizSession) -> Self {
        Self {
            score: session.score(),
            total: session.len(),
        }
    }

    /// Rounded half away from zero.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.score as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::test_support::{question, session_with_maps};

    #[test]
    fn letters_follow_display_order() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
    }

    #[test]
    fn rows_are_unmarked_until_revealed() {
        let qs = vec![question(&["a", "b", "c"], &[2])];
        let mut s = session_with_maps(&qs, vec![vec![2, 0, 1]]);
        s.select(0, 1);

        let rows = option_rows(&s, 0, &qs[0]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text, "c");
        assert!(rows[1].selected);
        assert!(rows.iter().all(|r| r.status == OptionStatus::Neutral));
    }

    #[test]
    fn revealed_rows_mark_answer_and_wrong_pick() {
        let qs = vec![question(&["a", "b", "c"], &[2])];
        let mut s = session_with_maps(&qs, vec![vec![2, 0, 1]]);
        s.select(0, 1);
        s.submit(&qs, 0);

        let rows = option_rows(&s, 0, &qs[0]);
        assert_eq!(rows[1].status, OptionStatus::Incorrect);
        assert_eq!(rows[2].status, OptionStatus::Correct);
        assert_eq!(rows[0].status, OptionStatus::Neutral);
        assert_eq!(rows[2].label(), "C. b  ✓");

        let result = ResultInfo::of(&s, 0, &qs[0]).unwrap();
        assert!(!result.correct);
        assert_eq!(result.banner(), "❌ Incorrect!");
        assert_eq!(result.answers_label(), "Correct Answer: C");
    }

    #[test]
    fn multi_answer_key_is_pluralised() {
        let qs = vec![question(&["a", "b", "c"], &[1, 3])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1, 2]]);
        s.select(0, 0);
        s.select(0, 2);
        s.submit(&qs, 0);
        let result = ResultInfo::of(&s, 0, &qs[0]).unwrap();
        assert!(result.correct);
        assert_eq!(result.answers_label(), "Correct Answers: A, C");
    }

    #[test]
    fn progress_and_score_labels() {
        let qs = vec![question(&["a", "b"], &[1]), question(&["a", "b"], &[1])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1], vec![0, 1]]);
        let info = ProgressInfo::of(&s);
        assert_eq!(info.counter_label(), "Question 1 of 2");
        assert_eq!(info.score_label(), "Score: 0/0");
        assert!((info.fraction() - 0.5).abs() < f32::EPSILON);

        s.select(0, 0);
        s.submit(&qs, 0);
        s.advance();
        assert_eq!(ProgressInfo::of(&s).score_label(), "Score: 1/1");
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(ScoreSummary { score: 2, total: 3 }.percentage(), 67);
        assert_eq!(ScoreSummary { score: 1, total: 8 }.percentage(), 13);
        assert_eq!(ScoreSummary { score: 0, total: 0 }.percentage(), 0);
        assert_eq!(ScoreSummary { score: 5, total: 6 }.label(), "5 / 6");
    }

    #[test]
    fn card_labels() {
        let cert = Certification {
            id: "x".into(),
            name: "AWS X".into(),
            full_name: "Full".into(),
            icon: "🚀".into(),
            color: None,
            available: false,
            external: None,
            resource: None,
        };
        let card = CertificationCard::new(&cert, true);
        assert_eq!(card.label(), "🚀 AWS X");
        assert_eq!(card.action_label(), "Coming Soon ⏳");
        assert!(card.proctored);
    }
}
