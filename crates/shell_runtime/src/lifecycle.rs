//! Window lifecycle and shutdown state for the single-window shell.
//!
//! [`ShellState`] is the process-scoped lifecycle context: the one window
//! slot, the set-once quit flag, and the reload-guard bookkeeping bound to
//! the live window. Transition helpers return dispositions describing what
//! the host glue must do; they never touch the windowing runtime themselves.
//!
//! Exclusive-write discipline: only the window lifecycle glue and the
//! shutdown guard mutate this state, and both re-check the destroyed flag
//! before acting because either may race to clear the window slot.

use serde::Serialize;

use crate::shim::ShimTracker;

/// Identity and liveness of the one presentation surface the shell owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    id: u64,
    destroyed: bool,
    /// Reload-guard bookkeeping for this window's content context.
    pub shim: ShimTracker,
}

impl WindowHandle {
    fn new(id: u64) -> Self {
        Self {
            id,
            destroyed: false,
            shim: ShimTracker::new(),
        }
    }

    /// Stable identity of this handle within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the surface behind this handle has been torn down.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Marks the surface as torn down. Returns `true` when the flag changed.
    pub fn mark_destroyed(&mut self) -> bool {
        if self.destroyed {
            false
        } else {
            self.destroyed = true;
            true
        }
    }
}

/// Decision for one window-creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDisposition {
    /// Build the surface for `window_id`; when `replaces` is set, the host
    /// must tear that surface down first.
    Create {
        /// Identity allocated for the new window.
        window_id: u64,
        /// Previously live window the host must destroy before building.
        replaces: Option<u64>,
    },
    /// Shutdown is in progress; no window may be created.
    RefusedQuitting,
}

/// Decision for one reload-request message from the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadDisposition {
    /// Perform a single forced reload of the live surface.
    Reload {
        /// The live window the reload targets.
        window_id: u64,
    },
    /// Shutdown is in progress; the message is dropped.
    IgnoredQuitting,
    /// No live window exists; the message arrived against a torn-down or
    /// never-created surface.
    IgnoredNoWindow,
}

impl ReloadDisposition {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reload { .. } => "reload",
            Self::IgnoredQuitting => "ignored-quitting",
            Self::IgnoredNoWindow => "ignored-no-window",
        }
    }
}

/// Decision for one quit-intent notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitTransition {
    /// First quit intent: tear down `window_to_destroy` (when present) and
    /// arm the fallback exit.
    Begin {
        /// Live window the host must force-destroy.
        window_to_destroy: Option<u64>,
    },
    /// Quit was already in progress; nothing to do.
    AlreadyQuitting,
}

/// Content-layer failure class observed by the lifecycle manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The requested document failed to load.
    LoadFailed,
    /// The content execution process terminated.
    ContentProcessGone,
}

impl FailureKind {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadFailed => "load-failed",
            Self::ContentProcessGone => "content-process-gone",
        }
    }
}

/// Diagnostic record for one observed content-layer failure.
///
/// Policy is observe-and-report: emitting a report never alters window state
/// and never schedules recovery. That is deliberate, not a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Failure class.
    pub kind: FailureKind,
    /// Window the failure was observed on, when one was live.
    pub window_id: Option<u64>,
    /// HTTP-equivalent status code, for load failures.
    pub status_code: Option<u16>,
    /// Human-readable failure description.
    pub description: String,
    /// Offending logical path, when known.
    pub path: Option<String>,
}

/// Process-scoped lifecycle context for the shell.
///
/// Holds at most one non-destroyed [`WindowHandle`] at any time. Once the
/// quit flag is set it never resets, and it gates both reloads and window
/// creation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShellState {
    window: Option<WindowHandle>,
    quit_requested: bool,
    next_window_id: u64,
}

impl ShellState {
    /// Creates the lifecycle context with no window and no quit intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a shutdown sequence is in progress.
    pub fn is_quitting(&self) -> bool {
        self.quit_requested
    }

    /// The currently owned window handle, live or already destroyed.
    pub fn window(&self) -> Option<&WindowHandle> {
        self.window.as_ref()
    }

    /// Mutable access to the currently owned window handle.
    pub fn window_mut(&mut self) -> Option<&mut WindowHandle> {
        self.window.as_mut()
    }

    /// Identity of the live (non-destroyed) window, if any.
    pub fn live_window_id(&self) -> Option<u64> {
        match &self.window {
            Some(window) if !window.is_destroyed() => Some(window.id()),
            _ => None,
        }
    }

    /// Allocates the handle for a new window, replacing any live one.
    ///
    /// The previous window, when present, is reported in the disposition so
    /// the host tears it down before building the new surface. Refused once
    /// shutdown has begun.
    pub fn begin_create_window(&mut self) -> CreateDisposition {
        if self.quit_requested {
            return CreateDisposition::RefusedQuitting;
        }
        let replaces = self.live_window_id();
        self.next_window_id += 1;
        let window_id = self.next_window_id;
        self.window = Some(WindowHandle::new(window_id));
        CreateDisposition::Create {
            window_id,
            replaces,
        }
    }

    /// Clears the owned handle after the surface's own close notification.
    ///
    /// This is the closed→reset transition, not a destroy request the
    /// lifecycle manager initiates. Returns the cleared handle's id, or
    /// `None` when no handle was held.
    pub fn note_window_closed(&mut self) -> Option<u64> {
        self.window.take().map(|window| window.id())
    }

    /// Records that the live window's content context may have been replaced.
    ///
    /// Returns the new guard epoch, or `None` when no live window exists (a
    /// navigation event racing teardown is ignored).
    pub fn note_navigation(&mut self) -> Option<u64> {
        match self.window.as_mut() {
            Some(window) if !window.is_destroyed() => {
                Some(window.shim.note_context_replaced())
            }
            _ => None,
        }
    }

    /// Disposition for one reload-request message.
    ///
    /// At most one reload is performed per message, and none once shutdown
    /// has begun or when no live window exists.
    pub fn reload_disposition(&self) -> ReloadDisposition {
        if self.quit_requested {
            return ReloadDisposition::IgnoredQuitting;
        }
        match self.live_window_id() {
            Some(window_id) => ReloadDisposition::Reload { window_id },
            None => ReloadDisposition::IgnoredNoWindow,
        }
    }

    /// Sets the quit flag and yields the window the host must force-destroy.
    ///
    /// The flag is set exactly once; later intents report
    /// [`QuitTransition::AlreadyQuitting`] and change nothing.
    pub fn begin_quit(&mut self) -> QuitTransition {
        if self.quit_requested {
            return QuitTransition::AlreadyQuitting;
        }
        self.quit_requested = true;
        let window_to_destroy = match self.window.as_mut() {
            Some(window) => {
                if window.mark_destroyed() {
                    Some(window.id())
                } else {
                    None
                }
            }
            None => None,
        };
        QuitTransition::Begin { window_to_destroy }
    }

    /// Builds the diagnostic record for a failed document load.
    pub fn note_load_failure(
        &self,
        status_code: u16,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> FailureReport {
        FailureReport {
            kind: FailureKind::LoadFailed,
            window_id: self.live_window_id(),
            status_code: Some(status_code),
            description: description.into(),
            path: Some(path.into()),
        }
    }

    /// Builds the diagnostic record for a terminated content process.
    pub fn note_content_process_gone(&self, description: impl Into<String>) -> FailureReport {
        FailureReport {
            kind: FailureKind::ContentProcessGone,
            window_id: self.live_window_id(),
            status_code: None,
            description: description.into(),
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CreateDisposition, FailureKind, QuitTransition, ReloadDisposition, ShellState,
    };

    fn created_id(state: &mut ShellState) -> u64 {
        match state.begin_create_window() {
            CreateDisposition::Create { window_id, .. } => window_id,
            CreateDisposition::RefusedQuitting => panic!("creation refused"),
        }
    }

    #[test]
    fn creation_allocates_fresh_ids_and_reports_the_replaced_window() {
        let mut state = ShellState::new();
        let first = created_id(&mut state);

        match state.begin_create_window() {
            CreateDisposition::Create {
                window_id,
                replaces,
            } => {
                assert_ne!(window_id, first);
                assert_eq!(replaces, Some(first));
            }
            CreateDisposition::RefusedQuitting => panic!("creation refused"),
        }
        assert_eq!(state.live_window_id(), Some(2));
    }

    #[test]
    fn closed_reset_clears_the_slot_and_tolerates_repeats() {
        let mut state = ShellState::new();
        let id = created_id(&mut state);

        assert_eq!(state.note_window_closed(), Some(id));
        assert_eq!(state.note_window_closed(), None);
        assert_eq!(state.live_window_id(), None);
    }

    #[test]
    fn reload_disposition_requires_a_live_window() {
        let mut state = ShellState::new();
        assert_eq!(
            state.reload_disposition(),
            ReloadDisposition::IgnoredNoWindow
        );

        let id = created_id(&mut state);
        assert_eq!(
            state.reload_disposition(),
            ReloadDisposition::Reload { window_id: id }
        );

        state
            .window_mut()
            .expect("window handle")
            .mark_destroyed();
        assert_eq!(
            state.reload_disposition(),
            ReloadDisposition::IgnoredNoWindow
        );
    }

    #[test]
    fn quit_gates_reloads_and_creation() {
        let mut state = ShellState::new();
        let id = created_id(&mut state);

        assert_eq!(
            state.begin_quit(),
            QuitTransition::Begin {
                window_to_destroy: Some(id)
            }
        );
        assert!(state.is_quitting());
        assert_eq!(
            state.reload_disposition(),
            ReloadDisposition::IgnoredQuitting
        );
        assert_eq!(
            state.begin_create_window(),
            CreateDisposition::RefusedQuitting
        );
    }

    #[test]
    fn second_quit_intent_is_a_no_op() {
        let mut state = ShellState::new();
        created_id(&mut state);

        assert!(matches!(state.begin_quit(), QuitTransition::Begin { .. }));
        assert_eq!(state.begin_quit(), QuitTransition::AlreadyQuitting);
    }

    #[test]
    fn quit_without_a_window_still_sets_the_flag() {
        let mut state = ShellState::new();
        assert_eq!(
            state.begin_quit(),
            QuitTransition::Begin {
                window_to_destroy: None
            }
        );
        assert!(state.is_quitting());
    }

    #[test]
    fn navigation_is_ignored_against_a_destroyed_window() {
        let mut state = ShellState::new();
        assert_eq!(state.note_navigation(), None);

        created_id(&mut state);
        assert_eq!(state.note_navigation(), Some(1));
        assert_eq!(state.note_navigation(), Some(2));

        state.begin_quit();
        assert_eq!(state.note_navigation(), None);
    }

    #[test]
    fn failure_reports_carry_detail_and_stable_tokens() {
        let mut state = ShellState::new();
        let id = created_id(&mut state);

        let report = state.note_load_failure(404, "no content file", "missing.html");
        assert_eq!(report.kind, FailureKind::LoadFailed);
        assert_eq!(report.kind.as_str(), "load-failed");
        assert_eq!(report.window_id, Some(id));
        assert_eq!(report.status_code, Some(404));
        assert_eq!(report.path.as_deref(), Some("missing.html"));

        let report = state.note_content_process_gone("content process exited");
        assert_eq!(report.kind.as_str(), "content-process-gone");
        assert_eq!(report.status_code, None);
        assert_eq!(report.path, None);
    }

    #[test]
    fn disposition_tokens_are_stable() {
        assert_eq!(ReloadDisposition::Reload { window_id: 1 }.as_str(), "reload");
        assert_eq!(
            ReloadDisposition::IgnoredQuitting.as_str(),
            "ignored-quitting"
        );
        assert_eq!(
            ReloadDisposition::IgnoredNoWindow.as_str(),
            "ignored-no-window"
        );
    }
}
