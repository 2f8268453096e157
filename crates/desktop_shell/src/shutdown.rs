//! Shutdown guard: quit-intent handling and the hard-exit fallback timer.

use std::process;
use std::thread;
use std::time::Duration;

use tauri::{AppHandle, Manager, RunEvent, WindowEvent};
use tracing::{info, warn};

use shell_runtime::{QuitTransition, HOST_ORIGIN, MAIN_WINDOW_LABEL};

use crate::host_state::HostState;
use crate::window;

/// Run-loop callback: lifecycle notifications and the quit guard.
///
/// All-windows-closed surfaces as an exit request here, so closing the last
/// window and an explicit quit intent take the same guarded path.
pub(crate) fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        RunEvent::WindowEvent {
            label,
            event: WindowEvent::Destroyed,
            ..
        } if label == MAIN_WINDOW_LABEL => {
            let host = app.state::<HostState>();
            if let Some(window_id) = host.with_lifecycle(|state| state.note_window_closed()) {
                info!(
                    origin = HOST_ORIGIN,
                    window = window_id,
                    "shell window closed"
                );
            }
        }
        RunEvent::ExitRequested { .. } => begin_quit(app),
        RunEvent::Exit => {
            info!(origin = HOST_ORIGIN, "shell exited");
        }
        _ => {}
    }
}

/// First quit intent: force-destroy the window and arm the fallback exit.
///
/// Idempotent; a second intent finds the quit flag already set and does
/// nothing. Once the flag is set every other handler ignores late events,
/// which stands in for detaching listeners (the runtime offers no
/// unsubscribe for run-loop events).
fn begin_quit(app: &AppHandle) {
    let host = app.state::<HostState>();
    match host.with_lifecycle(|state| state.begin_quit()) {
        QuitTransition::Begin { window_to_destroy } => {
            info!(origin = HOST_ORIGIN, "quit intent received");
            if window_to_destroy.is_some() {
                window::teardown_window(app);
            }
            arm_fallback_exit(host.config.quit_fallback);
        }
        QuitTransition::AlreadyQuitting => {}
    }
}

/// Detached safety net: forces a clean exit if graceful shutdown stalls.
///
/// A detached thread cannot keep the process alive once the run loop
/// returns, so completing shutdown first makes this a no-op.
fn arm_fallback_exit(delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        warn!(
            origin = HOST_ORIGIN,
            "graceful shutdown stalled, forcing exit"
        );
        process::exit(0);
    });
}
