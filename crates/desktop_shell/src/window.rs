//! Shell window construction, reload-guard reinstallation, and forced reload.

use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{AppHandle, Manager, Webview, WebviewUrl, WebviewWindowBuilder};
use tracing::{debug, info, warn};

use shell_runtime::{
    CreateDisposition, InstallOutcome, ShellError, HOST_ORIGIN, MAIN_WINDOW_LABEL,
    RELOAD_GUARD_SCRIPT,
};

use crate::host_state::HostState;

/// Builds the single shell window and points it at the entry document.
///
/// Any previously live window is torn down first; the lifecycle state keeps
/// at most one non-destroyed handle.
pub(crate) fn create_window(app: &AppHandle) -> Result<(), ShellError> {
    let host = app.state::<HostState>();

    let window_id = match host.with_lifecycle(|state| state.begin_create_window()) {
        CreateDisposition::Create {
            window_id,
            replaces,
        } => {
            if replaces.is_some() {
                teardown_window(app);
            }
            window_id
        }
        CreateDisposition::RefusedQuitting => {
            warn!(
                origin = HOST_ORIGIN,
                "window creation refused: shutdown in progress"
            );
            return Ok(());
        }
    };

    let entry_url = host.config.entry_url()?;
    let window = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW_LABEL,
        WebviewUrl::CustomProtocol(entry_url.clone()),
    )
    .title(&host.config.window_title)
    .inner_size(host.config.window_width, host.config.window_height)
    .initialization_script(RELOAD_GUARD_SCRIPT)
    .build()
    .map_err(|err| ShellError::WindowBuild {
        reason: err.to_string(),
    })?;

    info!(
        origin = HOST_ORIGIN,
        window = window_id,
        url = %entry_url,
        label = window.label(),
        "shell window created"
    );
    Ok(())
}

/// Force-destroys the current surface, bypassing content unload interception.
///
/// Unlike a graceful close, `destroy` does not give the content layer a
/// chance to veto teardown.
pub(crate) fn teardown_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };
    if let Err(err) = window.destroy() {
        warn!(origin = HOST_ORIGIN, "window teardown failed: {err}");
    }
}

/// Re-evaluates the reload guard after every page-load completion.
///
/// The initialization script already runs at document creation; this hook
/// covers contexts re-evaluated across navigations. The guard's sentinel
/// makes repeat evaluations in a surviving context no-ops, so each attempt
/// is independent and a failure is only logged, never escalated.
pub(crate) fn reinstall_reload_guard(webview: Webview, payload: PageLoadPayload<'_>) {
    if !matches!(payload.event(), PageLoadEvent::Finished) {
        return;
    }

    let app = webview.app_handle();
    let host = app.state::<HostState>();
    let Some(epoch) = host.with_lifecycle(|state| state.note_navigation()) else {
        // Navigation raced window teardown; nothing left to wrap.
        return;
    };

    match webview.eval(RELOAD_GUARD_SCRIPT) {
        Ok(()) => {
            let outcome = host.with_lifecycle(|state| {
                state
                    .window_mut()
                    .map(|window| window.shim.confirm_installed())
            });
            debug!(
                origin = HOST_ORIGIN,
                epoch,
                url = %payload.url(),
                reinstalled = matches!(outcome, Some(InstallOutcome::Installed)),
                "reload guard evaluated"
            );
        }
        Err(err) => {
            warn!(
                origin = HOST_ORIGIN,
                epoch,
                "reload guard injection failed: {err}"
            );
        }
    }
}

/// Performs the single host-mediated reload of the live surface.
///
/// The webview is re-navigated to its current URL; scheme responses are
/// uncacheable, so this re-fetches content without recreating the window.
pub(crate) fn force_reload(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        warn!(
            origin = HOST_ORIGIN,
            "reload requested but the shell window is gone"
        );
        return;
    };

    match window.url() {
        Ok(url) => {
            if let Err(err) = window.navigate(url) {
                warn!(origin = HOST_ORIGIN, "reload navigation failed: {err}");
            }
        }
        Err(err) => {
            warn!(
                origin = HOST_ORIGIN,
                "reload skipped, current url unavailable: {err}"
            );
        }
    }
}
