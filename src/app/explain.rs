use super::*;
use crate::explain::{build_prompt, start_explanation};
use crate::storage::EXPLAIN_API_KEY_KEY;

/// State of the "explain this question" dialog. Closing it drops the task
/// and with it any answer still on its way.
#[derive(Default)]
pub struct ExplainDialog {
    pub question_index: usize,
    pub awaiting_key: bool,
    pub key_input: String,
    pub task: Option<Task<ExplainResult>>,
    pub response: Option<String>,
    pub error: Option<String>,
}

impl ExplainDialog {
    pub fn is_loading(&self) -> bool {
        self.task.is_some()
    }

    fn clear_result(&mut self) {
        self.task = None;
        self.response = None;
        self.error = None;
    }
}

impl MockTestApp {
    fn stored_api_key(&self) -> Option<String> {
        self.store
            .get(EXPLAIN_API_KEY_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Opens the dialog for the current question. Without a saved key the
    /// dialog asks for one first.
    pub fn open_explain(&mut self) {
        let Some(runner) = self.runner.as_ref() else {
            return;
        };
        if runner.is_completed() {
            return;
        }
        let awaiting_key = self.stored_api_key().is_none();
        self.explain = Some(ExplainDialog {
            question_index: runner.current_index(),
            awaiting_key,
            ..ExplainDialog::default()
        });
        if !awaiting_key {
            self.request_explanation();
        }
    }

    /// "Save & Continue". Blank input is ignored.
    pub fn save_api_key(&mut self) {
        let Some(dialog) = self.explain.as_mut() else {
            return;
        };
        let key = dialog.key_input.trim().to_string();
        if key.is_empty() {
            return;
        }
        self.store.set(EXPLAIN_API_KEY_KEY, &key);
        dialog.key_input.clear();
        dialog.awaiting_key = false;
        self.request_explanation();
    }

    /// Starts (or restarts, for "Re-Explain") the request for the dialog's
    /// question. A request still in flight is discarded.
    pub fn request_explanation(&mut self) {
        let Some(key) = self.stored_api_key() else {
            if let Some(dialog) = self.explain.as_mut() {
                dialog.awaiting_key = true;
            }
            return;
        };
        let with_options = self.config.explain_with_options;
        let endpoint = self.config.explain_endpoint.clone();
        let (Some(dialog), Some(runner)) = (self.explain.as_mut(), self.runner.as_ref()) else {
            return;
        };
        let Some(question) = runner.questions().get(dialog.question_index) else {
            return;
        };

        let options = runner
            .session()
            .mapping(dialog.question_index)
            .map(|m| m.shuffled_options.as_slice())
            .filter(|_| with_options);
        let prompt = build_prompt(&question.question, options);

        dialog.clear_result();
        dialog.task = Some(start_explanation(endpoint, key, prompt));
    }

    pub fn poll_explanation(&mut self) -> bool {
        let Some(dialog) = self.explain.as_mut() else {
            return false;
        };
        let Some(result) = task::poll(&mut dialog.task) else {
            return false;
        };
        match result {
            Ok(text) => dialog.response = Some(text),
            Err(err) => {
                if err == crate::error::ExplainError::MissingCredential {
                    dialog.awaiting_key = true;
                }
                dialog.error = Some(err.user_message());
            }
        }
        true
    }

    pub fn close_explain(&mut self) {
        self.explain = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::error::ExplainError;
    use crate::quiz::test_support::question;

    fn app_with_quiz() -> MockTestApp {
        let mut app = test_app();
        app.config.explain_endpoint = "http://127.0.0.1:9/unreachable".into();
        app.start_quiz("dva-c02", None);
        app.finish_loading("dva-c02", "u", Ok(vec![question(&["a", "b"], &[1])]));
        app
    }

    #[test]
    fn missing_key_asks_for_one() {
        let mut app = app_with_quiz();
        app.open_explain();
        let dialog = app.explain.as_ref().unwrap();
        assert!(dialog.awaiting_key);
        assert!(!dialog.is_loading());
    }

    #[test]
    fn blank_key_is_not_saved() {
        let mut app = app_with_quiz();
        app.open_explain();
        app.explain.as_mut().unwrap().key_input = "   ".into();
        app.save_api_key();
        assert!(app.store.get(EXPLAIN_API_KEY_KEY).is_none());
        assert!(app.explain.as_ref().unwrap().awaiting_key);
    }

    #[test]
    fn saved_key_starts_a_request() {
        let mut app = app_with_quiz();
        app.open_explain();
        app.explain.as_mut().unwrap().key_input = " k-123 ".into();
        app.save_api_key();

        assert_eq!(app.store.get(EXPLAIN_API_KEY_KEY).as_deref(), Some("k-123"));
        let dialog = app.explain.as_ref().unwrap();
        assert!(!dialog.awaiting_key);
        assert!(dialog.is_loading());
    }

    #[test]
    fn results_land_in_the_open_dialog() {
        let mut app = app_with_quiz();
        let (tx, task) = Task::pending();
        app.explain = Some(ExplainDialog {
            task: Some(task),
            ..ExplainDialog::default()
        });
        tx.send(Err(ExplainError::Service("quota exceeded".into()))).unwrap();
        assert!(app.poll_explanation());

        let dialog = app.explain.as_ref().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("quota exceeded"));
        assert!(!dialog.is_loading());
    }

    #[test]
    fn closing_discards_late_result() {
        let mut app = app_with_quiz();
        let (tx, task) = Task::pending();
        app.explain = Some(ExplainDialog {
            task: Some(task),
            ..ExplainDialog::default()
        });
        app.close_explain();
        assert!(tx.send(Ok("late".into())).is_err());
        assert!(!app.poll_explanation());
        assert!(app.explain.is_none());
    }

    #[test]
    fn explaining_never_touches_the_session() {
        let mut app = app_with_quiz();
        app.store.set(EXPLAIN_API_KEY_KEY, "k");
        let before = app.runner.as_ref().unwrap().session().clone();
        app.open_explain();
        app.close_explain();
        assert_eq!(app.runner.as_ref().unwrap().session(), &before);
    }
}
