use super::*;
use crate::quiz::{SessionPhase, SubmitOutcome};

impl MockTestApp {
    pub fn select_option(&mut self, shuffled_index: usize) {
        if let Some(runner) = self.runner.as_mut() {
            runner.select(shuffled_index);
        }
    }

    pub fn submit_answer(&mut self) -> Option<SubmitOutcome> {
        let runner = self.runner.as_mut()?;
        let outcome = runner.submit(self.store.as_mut());
        log::debug!("{} question {}: {outcome:?}", runner.cert_id(), runner.current_index());
        Some(outcome)
    }

    /// Moves on; the explanation dialog belongs to the question it was
    /// opened for and closes with it.
    pub fn next_question(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        self.explain = None;
        if runner.next(self.store.as_mut()) == SessionPhase::Completed {
            self.end_proctoring();
        }
    }

    /// "Take Quiz Again". A proctored retake starts with a clean count.
    pub fn retake_quiz(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        runner.reset(self.store.as_mut(), &mut rand::thread_rng());
        let cert_id = runner.cert_id().to_string();
        self.explain = None;
        self.end_proctoring();
        self.start_proctoring(&cert_id);
    }

    pub fn set_proctored(&mut self, cert_id: &str, enabled: bool) {
        proctor::set_proctored(self.store.as_mut(), cert_id, enabled);
        log::info!("{cert_id}: proctored mode {}", if enabled { "on" } else { "off" });
    }

    pub fn is_proctored(&self, cert_id: &str) -> bool {
        proctor::is_proctored(self.store.as_ref(), cert_id)
    }
}
