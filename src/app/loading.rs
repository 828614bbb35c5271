use super::*;

impl MockTestApp {
    /// Applies a finished question load. A failed load leaves the loading
    /// view up with the reason; there is no automatic retry.
    pub fn poll_loading(&mut self) -> bool {
        let Some(pending) = self.loading.as_mut() else {
            return false;
        };
        let Some(result) = task::poll(&mut pending.task) else {
            return false;
        };
        let cert_id = pending.cert_id.clone();
        let url = pending.url.clone();
        self.finish_loading(&cert_id, &url, result);
        true
    }

    pub(crate) fn finish_loading(&mut self, cert_id: &str, url: &str, result: LoadResult) {
        match result {
            Ok(questions) if questions.is_empty() => {
                log::error!("{url} has no questions");
                self.load_error = Some(format!("{url} has no questions"));
            }
            Ok(questions) => {
                self.loading = None;
                self.load_error = None;
                let runner = QuizRunner::open(
                    cert_id,
                    questions,
                    self.store.as_ref(),
                    &mut rand::thread_rng(),
                );
                self.runner = Some(runner);
                self.start_proctoring(cert_id);
            }
            Err(err) => {
                log::error!("loading {cert_id} failed: {err}");
                self.load_error = Some(err.to_string());
            }
        }
    }
}
