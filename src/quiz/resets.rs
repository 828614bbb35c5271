use super::*;

impl QuizSession {
    /// Back to question one with fresh shuffles for every question.
    pub fn reset<R: Rng + ?Sized>(&mut self, questions: &[Question], rng: &mut R) {
        *self = QuizSession::new(questions, rng);
    }
}
