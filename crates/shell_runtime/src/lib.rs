//! Typed core for the single-window desktop host shell.
//!
//! This crate is the API-first boundary for the shell: it owns custom-scheme
//! resource resolution, the content-layer reload-guard shim and its
//! installation bookkeeping, the window lifecycle and shutdown state machine,
//! and the forwarded-console models. The concrete windowing transport lives
//! in `desktop_shell` and stays out of this crate so every contract here can
//! be exercised without a webview.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod console;
pub mod error;
pub mod lifecycle;
pub mod paths;
pub mod resolver;
pub mod shim;

pub use config::{
    ShellConfig, CONTENT_DIR_ENV, CONTENT_SCHEME, DEFAULT_ENTRY_DOCUMENT, MAIN_WINDOW_LABEL,
};
pub use console::{ConsoleLevel, ConsoleRecord, HOST_ORIGIN};
pub use error::ShellError;
pub use lifecycle::{
    CreateDisposition, FailureKind, FailureReport, QuitTransition, ReloadDisposition, ShellState,
    WindowHandle,
};
pub use paths::normalize_logical_path;
pub use resolver::{ContentResolver, ResolvedResource, ResourceOutcome};
pub use shim::{
    InstallOutcome, ShimTracker, CONSOLE_COMMAND, RELOAD_COMMAND, RELOAD_GUARD_SCRIPT,
    RELOAD_GUARD_SENTINEL,
};
