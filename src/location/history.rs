//! Navigation history service
//!
//! The location is process-wide state shared by every screen. It is passed
//! around as an `Arc<dyn History>` so each writer is explicit and tests can
//! inspect exactly which navigations happened.

use parking_lot::Mutex;
use tokio::sync::watch;

/// How a location change was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// State sync within the current page
    Push,
    /// Navigation to another page
    Goto,
}

/// A single recorded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub kind: NavigationKind,
}

/// Location/history collaborator
pub trait History: Send + Sync {
    /// The current location string
    fn current(&self) -> String;

    /// Record a state change of the current page
    fn push(&self, path: &str);

    /// Navigate to another page
    fn goto(&self, path: &str);

    /// Receive every subsequent location change
    fn subscribe(&self) -> watch::Receiver<String>;
}

/// In-process history backing the terminal UI
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
    current: watch::Sender<String>,
}

impl MemoryHistory {
    /// Create a history positioned at `initial`; the initial location is not an entry
    pub fn new(initial: impl Into<String>) -> Self {
        let (current, _) = watch::channel(initial.into());
        Self {
            entries: Mutex::new(Vec::new()),
            current,
        }
    }

    /// All navigations recorded so far, oldest first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().clone()
    }

    /// Navigations of one kind, oldest first
    pub fn paths(&self, kind: NavigationKind) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.path.clone())
            .collect()
    }

    fn record(&self, path: &str, kind: NavigationKind) {
        tracing::debug!(path, ?kind, "location change");
        self.entries.lock().push(HistoryEntry {
            path: path.to_string(),
            kind,
        });
        self.current.send_replace(path.to_string());
    }
}

impl History for MemoryHistory {
    fn current(&self) -> String {
        self.current.borrow().clone()
    }

    fn push(&self, path: &str) {
        self.record(path, NavigationKind::Push);
    }

    fn goto(&self, path: &str) {
        self.record(path, NavigationKind::Goto);
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }
}
