//! Host-bound command channel invoked by the content reload guard.

use tauri::AppHandle;
use tracing::{debug, error, info, warn};

use shell_runtime::{ConsoleLevel, ConsoleRecord, ReloadDisposition, HOST_ORIGIN};

use crate::host_state::HostState;
use crate::window;

/// Consumes one fire-and-forget reload request from the content layer.
///
/// Honored at most once per message with a single forced reload of the
/// existing surface; dropped entirely during shutdown or when no live
/// window exists.
#[tauri::command]
pub fn host_reload_requested(app: AppHandle, host: tauri::State<'_, HostState>) {
    match host.with_lifecycle(|state| state.reload_disposition()) {
        ReloadDisposition::Reload { window_id } => {
            info!(
                origin = HOST_ORIGIN,
                window = window_id,
                "safe reload requested"
            );
            window::force_reload(&app);
        }
        disposition => {
            debug!(
                origin = HOST_ORIGIN,
                reason = disposition.as_str(),
                "reload request dropped"
            );
        }
    }
}

/// Forwards one content console record into the host diagnostic log.
#[tauri::command]
pub fn host_console_message(record: ConsoleRecord) {
    let origin = record.origin();
    match record.level {
        ConsoleLevel::Log | ConsoleLevel::Info => {
            info!(origin = %origin, "{}", record.message);
        }
        ConsoleLevel::Warn => warn!(origin = %origin, "{}", record.message),
        ConsoleLevel::Error => error!(origin = %origin, "{}", record.message),
    }
}
