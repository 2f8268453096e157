//! Shared host-side state managed by the Tauri runtime.

use std::sync::Mutex;

use shell_runtime::{ContentResolver, ShellConfig, ShellState};

/// Process-scoped shell context shared by the protocol handler, the command
/// channel, and the run-loop callbacks.
pub(crate) struct HostState {
    /// Resolved startup configuration, immutable for the process lifetime.
    pub config: ShellConfig,
    /// Stateless per-request scheme resolver.
    pub resolver: ContentResolver,
    lifecycle: Mutex<ShellState>,
}

impl HostState {
    pub fn new(config: ShellConfig) -> Self {
        let resolver = ContentResolver::new(
            config.scheme.clone(),
            config.content_root.clone(),
            config.entry_document.clone(),
        );
        Self {
            config,
            resolver,
            lifecycle: Mutex::new(ShellState::new()),
        }
    }

    /// Runs `op` with the lifecycle state locked.
    ///
    /// A poisoned lock is recovered rather than propagated: a panicking
    /// handler elsewhere must not wedge every later lifecycle decision.
    pub fn with_lifecycle<T>(&self, op: impl FnOnce(&mut ShellState) -> T) -> T {
        let mut guard = match self.lifecycle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        op(&mut guard)
    }
}
