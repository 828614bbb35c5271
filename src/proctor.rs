//! Optional proctored mode: counts times the user left the page and ends
//! the session once the allowance is used up.
//!
//! The counter and the arrival notice live under their own keys so they
//! outlive the quiz-state record that termination deletes.

use crate::storage::{
    KeyValueStore, SHOW_DISTRACTION_NOTICE_KEY, distraction_count_key, get_flag, proctored_key,
    quiz_state_key, set_flag,
};

pub const DEFAULT_DISTRACTION_THRESHOLD: u32 = 3;

/// Something the UI observed, stripped of any UI-toolkit detail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageEvent {
    FocusLost,
    FocusGained,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Ignored,
    Warned { count: u32, threshold: u32 },
    Terminated,
}

pub fn is_proctored(store: &dyn KeyValueStore, cert_id: &str) -> bool {
    get_flag(store, &proctored_key(cert_id))
}

pub fn set_proctored(store: &mut dyn KeyValueStore, cert_id: &str, enabled: bool) {
    set_flag(store, &proctored_key(cert_id), enabled);
}

/// Reads and clears the "session was terminated" notice.
pub fn take_notice(store: &mut dyn KeyValueStore) -> bool {
    let shown = get_flag(store, SHOW_DISTRACTION_NOTICE_KEY);
    if shown {
        set_flag(store, SHOW_DISTRACTION_NOTICE_KEY, false);
    }
    shown
}

pub struct ProctorMonitor {
    cert_id: String,
    threshold: u32,
    focused: bool,
}

impl ProctorMonitor {
    pub fn new(cert_id: &str, threshold: u32) -> Self {
        Self {
            cert_id: cert_id.to_string(),
            threshold,
            focused: true,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn count(&self, store: &dyn KeyValueStore) -> u32 {
        store
            .get(&distraction_count_key(&self.cert_id))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn reset_count(&self, store: &mut dyn KeyValueStore) {
        store.remove(&distraction_count_key(&self.cert_id));
    }

    /// Feeds one page event. Only a transition from focused to unfocused counts.
    pub fn observe(&mut self, store: &mut dyn KeyValueStore, event: PageEvent) -> Verdict {
        match event {
            PageEvent::FocusGained => {
                self.focused = true;
                Verdict::Ignored
            }
            PageEvent::FocusLost if !self.focused => Verdict::Ignored,
            PageEvent::FocusLost => {
                self.focused = false;
                self.record_distraction(store)
            }
        }
    }

    /// Counts one distraction; past the threshold the session is torn down.
    pub fn record_distraction(&self, store: &mut dyn KeyValueStore) -> Verdict {
        let count = self.count(store) + 1;
        log::debug!("{}: distraction {count}/{}", self.cert_id, self.threshold);

        if count > self.threshold {
            store.remove(&quiz_state_key(&self.cert_id));
            self.reset_count(store);
            set_flag(store, SHOW_DISTRACTION_NOTICE_KEY, true);
            log::info!("{}: proctored session terminated", self.cert_id);
            return Verdict::Terminated;
        }

        store.set(&distraction_count_key(&self.cert_id), &count.to_string());
        Verdict::Warned {
            count,
            threshold: self.threshold,
        }
    }
}
