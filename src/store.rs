// File: ./src/store.rs
// Shared UI flags read by every view.
use std::sync::{Mutex, MutexGuard, OnceLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub title: String,
    pub is_modal_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            is_modal_open: false,
        }
    }
}

type Listener = Box<dyn FnMut(&UiState) + Send>;

/// Observable wrapper around [`UiState`]. Listeners run after a field
/// actually changes; writing the current value again is a no-op.
#[derive(Default)]
pub struct UiStore {
    state: UiState,
    listeners: Vec<Listener>,
    revision: u64,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &UiState {
        &self.state
    }

    /// Number of effective changes so far. Same-value writes leave it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.state.title != title {
            self.state.title = title;
            self.notify();
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.is_modal_open
    }

    pub fn set_modal_open(&mut self, open: bool) {
        if self.state.is_modal_open != open {
            self.state.is_modal_open = open;
            self.notify();
        }
    }

    /// Registers a listener called with the new state after each change.
    ///
    /// Listeners run while the caller still holds the store, so one must not
    /// call [`shared`] itself: the mutex is not reentrant. Everything a
    /// listener needs is in the `&UiState` it receives.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&UiState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        self.revision += 1;
        log::trace!("ui store r{}: {:?}", self.revision, self.state);
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

static SHARED: OnceLock<Mutex<UiStore>> = OnceLock::new();

/// The process-wide store, created on first access.
pub fn shared() -> MutexGuard<'static, UiStore> {
    SHARED
        .get_or_init(|| Mutex::new(UiStore::new()))
        .lock()
        // Listeners never leave the state half-written, so a poisoned lock is still usable.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fixture_values() {
        let store = UiStore::new();
        assert_eq!(store.title(), "title");
        assert!(!store.is_modal_open());
    }

    #[test]
    fn opening_twice_is_idempotent() {
        let mut store = UiStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.set_modal_open(true);
        store.set_modal_open(true);
        assert!(store.is_modal_open());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.set_modal_open(false);
        store.set_modal_open(false);
        assert!(!store.is_modal_open());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn listeners_receive_the_new_state() {
        let mut store = UiStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |ui| {
            if let Ok(mut log) = sink.lock() {
                log.push(ui.clone());
            }
        });

        store.set_title("Shift board");
        store.set_modal_open(true);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "Shift board");
        assert!(!seen[0].is_modal_open);
        assert_eq!(seen[1], *store.snapshot());
    }

    #[test]
    fn title_is_last_writer_wins() {
        let mut store = UiStore::new();
        store.set_title("Shift board");
        store.set_title("Week 42");
        assert_eq!(store.title(), "Week 42");
        assert_eq!(store.snapshot().title, "Week 42");
    }
}
