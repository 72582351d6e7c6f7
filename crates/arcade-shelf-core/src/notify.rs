//! Transient toast notifications.
//!
//! At most one toast is visible. A new request replaces the current one.
//! Each toast is identified by a [`ToastId`]; the timers that retire a
//! toast carry its id, and [`Notifier::begin_exit`] / [`Notifier::dismiss`]
//! ignore ids that are no longer current. A slow timer from an old toast
//! therefore never removes a newer one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a toast stays fully shown (ms)
pub const TOAST_DISPLAY_MS: u64 = 3000;

/// Length of the exit animation (ms)
pub const TOAST_EXIT_MS: u64 = 500;

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Lifecycle stage of the visible toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in / resting
    Shown,
    /// Exit animation running
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

/// The currently visible toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// Display and exit timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            display_ms: TOAST_DISPLAY_MS,
            exit_ms: TOAST_EXIT_MS,
        }
    }
}

impl ToastTimings {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Total time from show to removal
    pub fn lifetime(&self) -> Duration {
        self.display() + self.exit()
    }
}

/// Holds the single visible toast
#[derive(Debug, Default, Clone)]
pub struct Notifier {
    current: Option<Toast>,
    next_seq: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing whatever is visible.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_seq);
        self.next_seq += 1;

        let message = message.into();
        tracing::debug!(?id, kind = kind.as_str(), %message, "showing toast");

        self.current = Some(Toast {
            id,
            message,
            kind,
            phase: ToastPhase::Shown,
        });
        id
    }

    /// Start the exit animation, if `id` is still the visible toast.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove the toast, if `id` is still the visible toast.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            tracing::debug!(?id, "toast dismissed");
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_shows_toast() {
        let mut notifier = Notifier::new();
        let id = notifier.notify("Game added!", ToastKind::Success);
        let toast = notifier.current().unwrap();
        assert_eq!(toast.id, id);
        assert_eq!(toast.message, "Game added!");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.phase, ToastPhase::Shown);
    }

    #[test]
    fn test_last_request_wins() {
        let mut notifier = Notifier::new();
        notifier.notify("first", ToastKind::Success);
        let second = notifier.notify("second", ToastKind::Error);

        let toast = notifier.current().unwrap();
        assert_eq!(toast.id, second);
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_exit_then_dismiss() {
        let mut notifier = Notifier::new();
        let id = notifier.notify("bye", ToastKind::Success);

        assert!(notifier.begin_exit(id));
        assert_eq!(notifier.current().unwrap().phase, ToastPhase::Leaving);

        assert!(notifier.dismiss(id));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_stale_timers_ignored() {
        let mut notifier = Notifier::new();
        let old = notifier.notify("old", ToastKind::Success);
        let new = notifier.notify("new", ToastKind::Success);

        assert!(!notifier.begin_exit(old));
        assert!(!notifier.dismiss(old));

        let toast = notifier.current().unwrap();
        assert_eq!(toast.id, new);
        assert_eq!(toast.phase, ToastPhase::Shown);
    }

    #[test]
    fn test_dismiss_twice() {
        let mut notifier = Notifier::new();
        let id = notifier.notify("x", ToastKind::Error);
        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
    }

    #[test]
    fn test_default_timings() {
        let timings = ToastTimings::default();
        assert_eq!(timings.display(), Duration::from_millis(3000));
        assert_eq!(timings.exit(), Duration::from_millis(500));
        assert_eq!(timings.lifetime(), Duration::from_millis(3500));
    }

    #[test]
    fn test_toast_id_display() {
        let mut notifier = Notifier::new();
        let first = notifier.notify("a", ToastKind::Success);
        let second = notifier.notify("b", ToastKind::Success);
        assert_eq!(first.to_string(), "toast_0");
        assert_eq!(second.to_string(), "toast_1");
    }

    #[test]
    fn test_kind_str() {
        assert_eq!(ToastKind::Success.as_str(), "success");
        assert_eq!(ToastKind::Error.as_str(), "error");
    }
}
