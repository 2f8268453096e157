//! Error taxonomy for the shell core and its host glue.

use thiserror::Error;

/// Typed errors surfaced while bringing the shell up.
///
/// Resolution failures are deliberately absent: per-request outcomes are data
/// ([`crate::resolver::ResourceOutcome`]), not errors, and never propagate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The served content directory could not be located.
    #[error("cannot locate content root: {reason}")]
    ContentRoot {
        /// Why resolution failed.
        reason: String,
    },
    /// The configured entry document does not form a loadable URL.
    #[error("invalid entry document `{entry}`: {reason}")]
    EntryDocument {
        /// The rejected logical document name.
        entry: String,
        /// Parser detail.
        reason: String,
    },
    /// The shell window could not be constructed.
    #[error("failed to build shell window: {reason}")]
    WindowBuild {
        /// Builder detail.
        reason: String,
    },
}
