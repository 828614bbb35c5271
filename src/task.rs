//! One-shot background work whose result is picked up by the UI loop.
//!
//! Dropping a [`Task`] is how a result gets discarded: the worker's send
//! simply fails once nobody holds the receiver.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

pub struct Task<T> {
    rx: Receiver<T>,
}

impl<T> Task<T> {
    /// A task completed by whoever holds the returned sender.
    pub fn pending() -> (Sender<T>, Self) {
        let (tx, rx) = channel();
        (tx, Self { rx })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + 'static> Task<T> {
    pub fn spawn(work: impl FnOnce() -> T + Send + 'static) -> Self {
        let (tx, task) = Self::pending();
        std::thread::spawn(move || {
            let _ = tx.send(work());
        });
        task
    }
}

#[cfg(target_arch = "wasm32")]
impl<T: 'static> Task<T> {
    pub fn spawn_local(work: impl std::future::Future<Output = T> + 'static) -> Self {
        let (tx, task) = Self::pending();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(work.await);
        });
        task
    }
}

/// Takes the result out of `slot` once it is ready. A worker that vanished
/// without answering empties the slot too.
pub fn poll<T>(slot: &mut Option<Task<T>>) -> Option<T> {
    let result = match slot.as_ref()?.rx.try_recv() {
        Ok(value) => Some(value),
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => {
            log::warn!("background task ended without a result");
            None
        }
    };
    *slot = None;
    result
}
