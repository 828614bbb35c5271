use super::*;

impl QuizSession {
    /// Toggles a shuffled option. Returns whether anything changed.
    pub fn select(&mut self, question_index: usize, shuffled_index: usize) -> bool {
        if self.phase() == SessionPhase::Completed
            || self.question_phase(question_index) != Some(QuestionPhase::Unanswered)
        {
            return false;
        }
        let in_range = self
            .shuffle_mappings
            .get(question_index)
            .is_some_and(|m| shuffled_index < m.len());
        if !in_range {
            return false;
        }
        let selection = &mut self.selections[question_index];
        if !selection.remove(&shuffled_index) {
            selection.insert(shuffled_index);
        }
        true
    }

    /// Reveals a question and scores it. No partial credit.
    pub fn submit(&mut self, questions: &[Question], question_index: usize) -> SubmitOutcome {
        if self.phase() == SessionPhase::Completed
            || self.question_phase(question_index) != Some(QuestionPhase::Unanswered)
        {
            return SubmitOutcome::Ignored;
        }
        let Some(question) = questions.get(question_index) else {
            return SubmitOutcome::Ignored;
        };
        if self.selections[question_index].is_empty() {
            return SubmitOutcome::Ignored;
        }

        let correct = self.is_correct(question_index, question);
        self.revealed[question_index] = true;
        if correct {
            self.score += 1;
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect
        }
    }

    /// Moves to the next question; reaching the end completes the session.
    pub fn advance(&mut self) -> SessionPhase {
        let total = self.len();
        if self.current_question_index < total {
            self.current_question_index += 1;
        }
        self.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::test_support::{question, session_with_maps};

    #[test]
    fn select_toggles_membership() {
        let qs = vec![question(&["a", "b", "c"], &[1])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1, 2]]);
        assert!(s.select(0, 1));
        assert!(s.select(0, 2));
        assert_eq!(s.selection(0).unwrap().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(s.select(0, 1));
        assert_eq!(s.selection(0).unwrap().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn select_ignores_out_of_range_and_revealed() {
        let qs = vec![question(&["a", "b"], &[1])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1]]);
        assert!(!s.select(0, 2));
        assert!(!s.select(1, 0));
        s.select(0, 0);
        assert_eq!(s.submit(&qs, 0), SubmitOutcome::Correct);
        assert!(!s.select(0, 1));
        assert_eq!(s.selection(0).unwrap().len(), 1);
    }

    #[test]
    fn submit_maps_through_original_index() {
        // options a,b,c; answer is "b" (original 1); displayed as c,a,b
        let qs = vec![question(&["a", "b", "c"], &[2])];

        let mut wrong = session_with_maps(&qs, vec![vec![2, 0, 1]]);
        wrong.select(0, 1); // original 0
        assert_eq!(wrong.submit(&qs, 0), SubmitOutcome::Incorrect);
        assert_eq!(wrong.score(), 0);
        assert!(wrong.is_revealed(0));

        let mut right = session_with_maps(&qs, vec![vec![2, 0, 1]]);
        right.select(0, 2); // original 1
        assert_eq!(right.submit(&qs, 0), SubmitOutcome::Correct);
        assert_eq!(right.score(), 1);
    }

    #[test]
    fn submit_requires_exact_set() {
        let qs = vec![question(&["a", "b", "c", "d"], &[1, 3])];
        let mut partial = session_with_maps(&qs, vec![vec![0, 1, 2, 3]]);
        partial.select(0, 0);
        assert_eq!(partial.submit(&qs, 0), SubmitOutcome::Incorrect);

        let mut extra = session_with_maps(&qs, vec![vec![0, 1, 2, 3]]);
        extra.select(0, 0);
        extra.select(0, 2);
        extra.select(0, 3);
        assert_eq!(extra.submit(&qs, 0), SubmitOutcome::Incorrect);

        let mut exact = session_with_maps(&qs, vec![vec![3, 2, 1, 0]]);
        exact.select(0, 3);
        exact.select(0, 1);
        assert_eq!(exact.submit(&qs, 0), SubmitOutcome::Correct);
    }

    #[test]
    fn submit_is_idempotent_once_revealed() {
        let qs = vec![question(&["a", "b"], &[2])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1]]);
        s.select(0, 1);
        assert_eq!(s.submit(&qs, 0), SubmitOutcome::Correct);
        let before = s.clone();
        assert_eq!(s.submit(&qs, 0), SubmitOutcome::Ignored);
        assert_eq!(s, before);
    }

    #[test]
    fn submit_with_empty_selection_is_ignored() {
        let qs = vec![question(&["a", "b"], &[2])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1]]);
        assert_eq!(s.submit(&qs, 0), SubmitOutcome::Ignored);
        assert!(!s.is_revealed(0));
    }

    #[test]
    fn advance_completes_after_last_question() {
        let qs = vec![question(&["a"], &[1]), question(&["a"], &[1])];
        let mut s = session_with_maps(&qs, vec![vec![0], vec![0]]);
        assert_eq!(s.advance(), SessionPhase::InProgress);
        assert_eq!(s.advance(), SessionPhase::Completed);
        assert_eq!(s.current_question_index(), 2);
        assert_eq!(s.advance(), SessionPhase::Completed);
        assert_eq!(s.current_question_index(), 2);
        assert!(!s.select(1, 0));
    }
}
