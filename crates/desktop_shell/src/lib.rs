//! Tauri host shell for the single-window desktop application.
//!
//! This crate keeps protocol registration, command wiring, and run-loop
//! handling localized so the lifecycle rules in `shell_runtime` stay
//! independent of Tauri internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;
mod host_state;
#[doc(hidden)]
pub mod protocol;
mod shutdown;
mod window;

use tracing::{error, info};

use shell_runtime::{ShellConfig, HOST_ORIGIN};

use crate::host_state::HostState;

/// Starts the Tauri desktop host process.
pub fn run() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Host-level faults degrade to logging; the shell never shows a crash
    // dialog and never attempts recovery.
    std::panic::set_hook(Box::new(|panic_info| {
        error!(origin = HOST_ORIGIN, "unhandled host fault: {panic_info}");
    }));

    let entry_override = std::env::args().nth(1);
    let config = match ShellConfig::resolve(entry_override) {
        Ok(config) => config,
        Err(err) => {
            error!(origin = HOST_ORIGIN, "cannot start shell: {err}");
            return;
        }
    };
    info!(
        origin = HOST_ORIGIN,
        root = %config.content_root.display(),
        entry = %config.entry_document,
        "serving content under the custom scheme"
    );

    let scheme = config.scheme.clone();
    let app = tauri::Builder::default()
        .manage(HostState::new(config))
        .register_uri_scheme_protocol(scheme, protocol::handle_content_request)
        .on_page_load(window::reinstall_reload_guard)
        .invoke_handler(tauri::generate_handler![
            commands::host_reload_requested,
            commands::host_console_message
        ])
        .setup(|app| {
            window::create_window(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("desktop_shell failed to build Tauri application");

    app.run(shutdown::handle_run_event);
}
