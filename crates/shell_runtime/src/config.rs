//! Process-lifetime shell configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::error::ShellError;

/// Custom scheme the shell serves bundled content under.
pub const CONTENT_SCHEME: &str = "app";
/// Logical document served for empty and root requests.
pub const DEFAULT_ENTRY_DOCUMENT: &str = "index.html";
/// Label of the one webview window the shell owns.
pub const MAIN_WINDOW_LABEL: &str = "main";
/// Environment override for the served content directory.
pub const CONTENT_DIR_ENV: &str = "APPSHELL_CONTENT_DIR";

const WINDOW_TITLE: &str = "App Shell";
const WINDOW_WIDTH: f64 = 1100.0;
const WINDOW_HEIGHT: f64 = 800.0;
const QUIT_FALLBACK_DELAY: Duration = Duration::from_secs(3);

/// Runtime configuration for the shell process.
///
/// Built once at startup and never mutated afterwards; serde derives keep the
/// resolved configuration printable as a structured diagnostic record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellConfig {
    /// Custom scheme name content is served under.
    pub scheme: String,
    /// Logical document loaded on start and served for root requests.
    pub entry_document: String,
    /// Shell window title.
    pub window_title: String,
    /// Fixed logical window width.
    pub window_width: f64,
    /// Fixed logical window height.
    pub window_height: f64,
    /// Local directory served under the custom scheme.
    pub content_root: PathBuf,
    /// Delay before the shutdown guard forces a process exit.
    pub quit_fallback: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scheme: CONTENT_SCHEME.to_string(),
            entry_document: DEFAULT_ENTRY_DOCUMENT.to_string(),
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            content_root: PathBuf::from("content"),
            quit_fallback: QUIT_FALLBACK_DELAY,
        }
    }
}

impl ShellConfig {
    /// Builds the runtime configuration for this process.
    ///
    /// `entry_override` is the optional process argument naming the initial
    /// logical entry document. The content root comes from
    /// [`CONTENT_DIR_ENV`] when set, otherwise from the `content` directory
    /// next to the running executable.
    pub fn resolve(entry_override: Option<String>) -> Result<Self, ShellError> {
        let content_root = match env::var_os(CONTENT_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_content_root()?,
        };
        Ok(Self {
            entry_document: entry_document_from_arg(entry_override),
            content_root,
            ..Self::default()
        })
    }

    /// Initial URL of the shell window under the custom scheme.
    pub fn entry_url(&self) -> Result<Url, ShellError> {
        let raw = format!("{}://{}", self.scheme, self.entry_document);
        Url::parse(&raw).map_err(|err| ShellError::EntryDocument {
            entry: self.entry_document.clone(),
            reason: err.to_string(),
        })
    }
}

/// Selects the entry document from the optional process argument.
///
/// Blank arguments fall back to [`DEFAULT_ENTRY_DOCUMENT`].
pub fn entry_document_from_arg(arg: Option<String>) -> String {
    match arg {
        Some(entry) if !entry.trim().is_empty() => entry,
        _ => DEFAULT_ENTRY_DOCUMENT.to_string(),
    }
}

fn default_content_root() -> Result<PathBuf, ShellError> {
    let exe = env::current_exe().map_err(|err| ShellError::ContentRoot {
        reason: format!("cannot locate running executable: {err}"),
    })?;
    let dir = exe.parent().ok_or_else(|| ShellError::ContentRoot {
        reason: format!("executable {} has no parent directory", exe.display()),
    })?;
    Ok(dir.join("content"))
}
