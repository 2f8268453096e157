use desktop_shell::protocol::content_response;
use shell_runtime::{ContentResolver, ResourceOutcome};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tauri::http::header;

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), nanos));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

#[test]
fn scheme_responses_serve_file_bytes_with_media_type_and_no_cache() {
    let root = temp_dir("shell_protocol_serve");
    fs::write(root.join("index.html"), "<html><body>shell</body></html>")
        .expect("write entry document");
    let resolver = ContentResolver::new("app", &root, "index.html");

    let response = content_response(&resolver.resolve_uri("app://index.html"));
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );
    assert_eq!(response.body(), b"<html><body>shell</body></html>");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn missing_content_yields_a_plain_404_response() {
    let root = temp_dir("shell_protocol_not_found");
    let resolver = ContentResolver::new("app", &root, "index.html");

    let resolved = resolver.resolve_uri("app://missing.html");
    assert_eq!(resolved.outcome, ResourceOutcome::NotFound);

    let response = content_response(&resolved);
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn root_requests_answer_with_the_entry_document_bytes() {
    let root = temp_dir("shell_protocol_entry");
    fs::write(root.join("index.html"), "entry bytes").expect("write entry document");
    let resolver = ContentResolver::new("app", &root, "index.html");

    let explicit = content_response(&resolver.resolve_uri("app://index.html"));
    let bare = content_response(&resolver.resolve_uri("app://"));
    assert_eq!(bare.status(), explicit.status());
    assert_eq!(bare.body(), explicit.body());

    let _ = fs::remove_dir_all(root);
}
