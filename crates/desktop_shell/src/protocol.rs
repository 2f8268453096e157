//! Custom-scheme protocol handler serving bundled content.

use tauri::http::{header, Request, Response, StatusCode};
use tauri::{Manager, UriSchemeContext};
use tracing::warn;

use shell_runtime::{ResolvedResource, ResourceOutcome, HOST_ORIGIN};

use crate::host_state::HostState;

/// Resolves one custom-scheme request to file bytes or a structured failure.
///
/// Every outcome is a terminal response; nothing here retries, escalates, or
/// panics. Failures are additionally reported through the lifecycle state so
/// the log line carries the live window and offending path.
pub(crate) fn handle_content_request(
    ctx: UriSchemeContext<'_, tauri::Wry>,
    request: Request<Vec<u8>>,
) -> Response<Vec<u8>> {
    let host = ctx.app_handle().state::<HostState>();
    let resolved = host.resolver.resolve_uri(&request.uri().to_string());

    if resolved.outcome != ResourceOutcome::Served {
        let report = host.with_lifecycle(|state| {
            state.note_load_failure(
                resolved.outcome.status_code(),
                resolved.detail.clone().unwrap_or_default(),
                resolved.logical_path.clone(),
            )
        });
        warn!(
            origin = HOST_ORIGIN,
            report = %serde_json::to_string(&report).unwrap_or_default(),
            "content load failure"
        );
    }

    content_response(&resolved)
}

/// Builds the scheme response for one resolution outcome.
///
/// Responses are never cacheable, so a host-forced reload always re-fetches
/// bytes instead of replaying the webview cache.
pub fn content_response(resolved: &ResolvedResource) -> Response<Vec<u8>> {
    Response::builder()
        .status(resolved.outcome.status_code())
        .header(header::CONTENT_TYPE, resolved.content_type.as_str())
        .header(header::CACHE_CONTROL, "no-cache")
        .body(resolved.body.clone())
        .unwrap_or_else(|err| {
            warn!(origin = HOST_ORIGIN, "failed to assemble scheme response: {err}");
            let mut fallback = Response::new(b"resolver error".to_vec());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
