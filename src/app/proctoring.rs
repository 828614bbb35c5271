use super::*;

impl MockTestApp {
    pub(crate) fn start_proctoring(&mut self, cert_id: &str) {
        self.proctor_warning = None;
        self.monitor = proctor::is_proctored(self.store.as_ref(), cert_id)
            .then(|| ProctorMonitor::new(cert_id, self.config.distraction_threshold));
    }

    /// The session ended normally; its distraction count goes with it.
    pub(crate) fn end_proctoring(&mut self) {
        if let Some(monitor) = self.monitor.take() {
            monitor.reset_count(self.store.as_mut());
        }
        self.proctor_warning = None;
    }

    /// Window focus as seen this frame. Only changes become page events.
    pub fn observe_focus(&mut self, focused: bool) -> Option<Verdict> {
        let previous = self.last_focused.replace(focused);
        if previous.is_none() || previous == Some(focused) {
            return None;
        }
        let event = if focused {
            PageEvent::FocusGained
        } else {
            PageEvent::FocusLost
        };
        self.handle_page_event(event)
    }

    pub fn handle_page_event(&mut self, event: PageEvent) -> Option<Verdict> {
        if self.runner.as_ref().is_none_or(QuizRunner::is_completed) {
            return None;
        }
        let monitor = self.monitor.as_mut()?;
        let verdict = monitor.observe(self.store.as_mut(), event);
        match verdict {
            Verdict::Ignored => {}
            Verdict::Warned { count, threshold } => {
                self.proctor_warning = Some(format!(
                    "⚠ You left the test window ({count} of {threshold} allowed)."
                ));
            }
            Verdict::Terminated => {
                // the monitor already removed the saved record
                self.runner = None;
                self.monitor = None;
                self.show_landing();
            }
        }
        Some(verdict)
    }
}
