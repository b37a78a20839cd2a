//! Transient notification queue (toasts).
//!
//! Toasts are shown in insertion order and carry a deadline. The UI tick calls
//! [`Toasts::prune_expired`]; removing a toast by hand first turns that later
//! expiry into a no-op.

use std::time::{Duration, Instant};

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id, unique per queue.
    pub id: u64,
    /// Text shown to the user.
    pub message: String,
    /// Flavor.
    pub kind: ToastKind,
    /// Instant after which the toast is dropped.
    pub expires_at: Instant,
}

/// Ordered, self-expiring list of toasts.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    last_id: u64,
    default_duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    /// Empty queue whose wrappers use `default_duration`.
    #[must_use]
    pub const fn new(default_duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
            default_duration,
        }
    }

    /// What: Queue a toast.
    ///
    /// Inputs:
    /// - `message`: Text to show
    /// - `kind`: Flavor
    /// - `duration`: Visibility window; `None` uses the queue default
    ///
    /// Output:
    /// - The new toast's id.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
    ) -> u64 {
        self.show_at(message, kind, duration, Instant::now())
    }

    /// [`Self::show`] with an explicit clock reading.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
        now: Instant,
    ) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now + duration.unwrap_or(self.default_duration),
        });
        id
    }

    /// Queue a success toast.
    pub fn success(&mut self, message: impl Into<String>, duration: Option<Duration>) -> u64 {
        self.show(message, ToastKind::Success, duration)
    }

    /// Queue an error toast.
    pub fn error(&mut self, message: impl Into<String>, duration: Option<Duration>) -> u64 {
        self.show(message, ToastKind::Error, duration)
    }

    /// Queue an info toast.
    pub fn info(&mut self, message: impl Into<String>, duration: Option<Duration>) -> u64 {
        self.show(message, ToastKind::Info, duration)
    }

    /// Queue a warning toast.
    pub fn warning(&mut self, message: impl Into<String>, duration: Option<Duration>) -> u64 {
        self.show(message, ToastKind::Warning, duration)
    }

    /// Remove a toast by id; `false` when it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.items.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// What: Drop every toast whose deadline is at or before `now`.
    ///
    /// Output:
    /// - How many toasts were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        before - self.items.len()
    }

    /// Visible toasts in insertion order.
    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.items
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
