use super::*;

impl QuizSession {
    pub fn len(&self) -> usize {
        self.shuffle_mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shuffle_mappings.is_empty()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        if self.current_question_index >= self.len() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        }
    }

    pub fn question_phase(&self, question_index: usize) -> Option<QuestionPhase> {
        self.revealed.get(question_index).map(|&r| {
            if r {
                QuestionPhase::Revealed
            } else {
                QuestionPhase::Unanswered
            }
        })
    }

    pub fn is_revealed(&self, question_index: usize) -> bool {
        self.revealed.get(question_index).copied().unwrap_or(false)
    }

    pub fn selection(&self, question_index: usize) -> Option<&BTreeSet<usize>> {
        self.selections.get(question_index)
    }

    pub fn mapping(&self, question_index: usize) -> Option<&ShuffleMapping> {
        self.shuffle_mappings.get(question_index)
    }

    /// Selected options translated back to 0-based original indices.
    pub fn selected_original(&self, question_index: usize) -> BTreeSet<usize> {
        match (self.selection(question_index), self.mapping(question_index)) {
            (Some(selection), Some(mapping)) => selection
                .iter()
                .filter_map(|&s| mapping.original_index(s))
                .collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Whether the current selection exactly matches the answer key.
    pub fn is_correct(&self, question_index: usize, question: &Question) -> bool {
        let selected = self.selected_original(question_index);
        !selected.is_empty() && selected == question.answer_indices()
    }

    pub fn recompute_score(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.is_revealed(*i) && self.is_correct(*i, q))
            .count()
    }

    /// Shuffled positions of the correct answers, in answer-key order.
    pub fn correct_positions(&self, question_index: usize, question: &Question) -> Vec<usize> {
        let Some(mapping) = self.mapping(question_index) else {
            return Vec::new();
        };
        question
            .answer
            .iter()
            .filter_map(|a| a.checked_sub(1).and_then(|i| mapping.shuffled_position(i)))
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::test_support::{question, session_with_maps};

    #[test]
    fn score_invariant_holds_through_a_run() {
        let qs = vec![
            question(&["a", "b", "c"], &[1]),
            question(&["a", "b", "c"], &[2, 3]),
            question(&["a", "b"], &[2]),
        ];
        let mut s = session_with_maps(&qs, vec![vec![1, 2, 0], vec![0, 1, 2], vec![1, 0]]);

        s.select(0, 2);
        s.submit(&qs, 0);
        s.advance();
        s.select(1, 1);
        s.submit(&qs, 1);
        s.advance();
        s.select(2, 0);
        s.submit(&qs, 2);

        assert_eq!(s.score(), 2);
        assert_eq!(s.recompute_score(&qs), s.score());
        assert_eq!(s.answered_count(), 3);
    }

    #[test]
    fn correct_positions_follow_shuffle() {
        let qs = vec![question(&["a", "b", "c"], &[2, 3])];
        let s = session_with_maps(&qs, vec![vec![2, 0, 1]]);
        assert_eq!(s.correct_positions(0, &qs[0]), vec![2, 0]);
    }

    #[test]
    fn phase_tracks_reveal_flags() {
        let qs = vec![question(&["a", "b"], &[1])];
        let mut s = session_with_maps(&qs, vec![vec![0, 1]]);
        assert_eq!(s.question_phase(0), Some(QuestionPhase::Unanswered));
        assert_eq!(s.question_phase(4), None);
        s.select(0, 1);
        s.submit(&qs, 0);
        assert_eq!(s.question_phase(0), Some(QuestionPhase::Revealed));
        assert_eq!(s.phase(), SessionPhase::InProgress);
    }
}
