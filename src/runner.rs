//! A quiz in progress for one certification: questions, session and the
//! store writes that go with each transition.

use rand::Rng;

use crate::model::Question;
use crate::persistence::{clear_session, open_session, save_session};
use crate::quiz::{QuizSession, SessionPhase, SubmitOutcome};
use crate::storage::{KeyValueStore, quiz_state_key};

/// Returned by [`QuizRunner::abandon`]; the caller must leave the quiz view.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct LeaveQuiz;

pub struct QuizRunner {
    cert_id: String,
    storage_key: String,
    questions: Vec<Question>,
    session: QuizSession,
}

impl QuizRunner {
    /// Restores the saved session for `cert_id` when it fits `questions`.
    pub fn open<R: Rng + ?Sized>(
        cert_id: &str,
        questions: Vec<Question>,
        store: &dyn KeyValueStore,
        rng: &mut R,
    ) -> Self {
        let storage_key = quiz_state_key(cert_id);
        let session = open_session(store, &storage_key, &questions, rng);
        Self {
            cert_id: cert_id.to_string(),
            storage_key,
            questions,
            session,
        }
    }

    pub fn cert_id(&self) -> &str {
        &self.cert_id
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_index(&self) -> usize {
        self.session.current_question_index()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index())
    }

    pub fn is_completed(&self) -> bool {
        self.session.phase() == SessionPhase::Completed
    }

    pub fn select(&mut self, shuffled_index: usize) -> bool {
        self.session.select(self.current_index(), shuffled_index)
    }

    /// Scores the current question and persists the session.
    pub fn submit(&mut self, store: &mut dyn KeyValueStore) -> SubmitOutcome {
        let outcome = self.session.submit(&self.questions, self.current_index());
        if outcome != SubmitOutcome::Ignored {
            save_session(store, &self.storage_key, &self.session);
        }
        outcome
    }

    /// Advances and saves the new position; finishing the last question
    /// deletes the saved record instead.
    pub fn next(&mut self, store: &mut dyn KeyValueStore) -> SessionPhase {
        let was_completed = self.is_completed();
        let phase = self.session.advance();
        if phase == SessionPhase::InProgress {
            save_session(store, &self.storage_key, &self.session);
        } else if !was_completed {
            clear_session(store, &self.storage_key);
            log::info!(
                "{} completed with {}/{}",
                self.storage_key,
                self.session.score(),
                self.questions.len()
            );
        }
        phase
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, store: &mut dyn KeyValueStore, rng: &mut R) {
        self.session.reset(&self.questions, rng);
        clear_session(store, &self.storage_key);
        save_session(store, &self.storage_key, &self.session);
        log::info!("{} reset", self.storage_key);
    }

    pub fn abandon(self, store: &mut dyn KeyValueStore) -> LeaveQuiz {
        clear_session(store, &self.storage_key);
        log::info!("{} abandoned", self.storage_key);
        LeaveQuiz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::test_support::question;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn runner(store: &MemoryStore, rng: &mut StdRng) -> QuizRunner {
        let qs = vec![question(&["a", "b"], &[1]), question(&["a", "b"], &[2])];
        QuizRunner::open("cert", qs, store, rng)
    }

    #[test]
    fn submit_persists_and_reload_resumes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = MemoryStore::new();
        let mut r = runner(&store, &mut rng);
        assert!(store.get("quizState_cert").is_none());

        assert_eq!(r.submit(&mut store), SubmitOutcome::Ignored);
        assert!(store.get("quizState_cert").is_none());

        r.select(0);
        r.submit(&mut store);
        assert!(store.get("quizState_cert").is_some());

        let reopened = runner(&store, &mut rng);
        assert_eq!(reopened.session(), r.session());
    }

    #[test]
    fn reload_after_next_resumes_at_the_new_question() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = MemoryStore::new();
        let mut r = runner(&store, &mut rng);
        r.select(0);
        r.submit(&mut store);
        assert_eq!(r.next(&mut store), SessionPhase::InProgress);
        assert_eq!(r.current_index(), 1);

        let reopened = runner(&store, &mut rng);
        assert_eq!(reopened.current_index(), 1);
        assert_eq!(reopened.session(), r.session());
    }

    #[test]
    fn unvalidated_zero_answer_never_scores() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut store = MemoryStore::new();
        let qs = vec![question(&["a", "b"], &[0])];
        let mut r = QuizRunner::open("zero", qs, &store, &mut rng);
        r.select(0);
        assert_eq!(r.submit(&mut store), SubmitOutcome::Incorrect);
        assert_eq!(r.session().score(), 0);
        assert!(r.session().correct_positions(0, &r.questions()[0]).is_empty());
    }

    #[test]
    fn finishing_clears_the_record() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = MemoryStore::new();
        let mut r = runner(&store, &mut rng);
        r.select(0);
        r.submit(&mut store);
        assert_eq!(r.next(&mut store), SessionPhase::InProgress);
        r.select(1);
        r.submit(&mut store);
        assert!(store.get("quizState_cert").is_some());
        assert_eq!(r.next(&mut store), SessionPhase::Completed);
        assert!(store.get("quizState_cert").is_none());
        assert_eq!(r.current_index(), 2);
        assert!(r.current_question().is_none());
    }

    #[test]
    fn reset_rewrites_a_fresh_record() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = MemoryStore::new();
        let mut r = runner(&store, &mut rng);
        r.select(0);
        r.submit(&mut store);
        r.reset(&mut store, &mut rng);

        let reopened = runner(&store, &mut rng);
        assert_eq!(reopened.session().score(), 0);
        assert_eq!(reopened.session().answered_count(), 0);
        assert_eq!(reopened.session(), r.session());
    }

    #[test]
    fn abandon_clears_the_record() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut store = MemoryStore::new();
        let mut r = runner(&store, &mut rng);
        r.select(1);
        r.submit(&mut store);
        assert_eq!(r.abandon(&mut store), LeaveQuiz);
        assert!(store.is_empty());
    }
}
