//! Custom-scheme resource resolution over a scoped content root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::paths::normalize_logical_path;

/// Terminal outcome of one scheme-resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceOutcome {
    /// The logical path resolved to a readable file.
    Served,
    /// The logical path does not name a file under the content root.
    NotFound,
    /// Resolution itself failed unexpectedly.
    ResolverError,
}

impl ResourceOutcome {
    /// HTTP-equivalent status code for this outcome.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Served => 200,
            Self::NotFound => 404,
            Self::ResolverError => 500,
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Served => "served",
            Self::NotFound => "not-found",
            Self::ResolverError => "resolver-error",
        }
    }
}

/// Response material for one resolution attempt.
///
/// A request is terminal immediately: the resolver retains no state between
/// requests and never retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// How the attempt ended.
    pub outcome: ResourceOutcome,
    /// The normalized logical path the request asked for.
    pub logical_path: String,
    /// Media type of the response body.
    pub content_type: String,
    /// Response body: file bytes on success, a short plain-text notice on
    /// failure.
    pub body: Vec<u8>,
    /// Human-readable failure description, absent on success.
    pub detail: Option<String>,
}

impl ResolvedResource {
    fn served(logical_path: String, content_type: String, body: Vec<u8>) -> Self {
        Self {
            outcome: ResourceOutcome::Served,
            logical_path,
            content_type,
            body,
            detail: None,
        }
    }

    fn not_found(logical_path: String) -> Self {
        let detail = format!("no content file at `{logical_path}`");
        Self {
            outcome: ResourceOutcome::NotFound,
            body: format!("not found: {logical_path}").into_bytes(),
            logical_path,
            content_type: "text/plain; charset=utf-8".to_string(),
            detail: Some(detail),
        }
    }

    fn resolver_error(logical_path: String, detail: String) -> Self {
        Self {
            outcome: ResourceOutcome::ResolverError,
            body: format!("resolver error: {detail}").into_bytes(),
            logical_path,
            content_type: "text/plain; charset=utf-8".to_string(),
            detail: Some(detail),
        }
    }
}

/// Scheme resolver scoped to a local content root.
///
/// `app://<logical-path>` and `app:///<logical-path>` resolve identically:
/// when a request URI carries the custom scheme, its authority component is
/// the first segment of the logical path. Requests rewritten by the Windows
/// webview to `http(s)://<scheme>.localhost/<logical-path>` carry the whole
/// logical path in the URI path instead.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    scheme: String,
    root: PathBuf,
    entry_document: String,
}

impl ContentResolver {
    /// Creates a resolver serving `root` under `scheme`, with empty and root
    /// requests falling back to `entry_document`.
    pub fn new(scheme: impl Into<String>, root: impl Into<PathBuf>, entry_document: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            root: root.into(),
            entry_document: entry_document.into(),
        }
    }

    /// The local directory served under the custom scheme.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a full request URI to response material.
    ///
    /// Never panics and never returns an error: malformed URIs degrade to a
    /// resolver-error response.
    pub fn resolve_uri(&self, uri: &str) -> ResolvedResource {
        match self.logical_path_from_uri(uri) {
            Ok(raw) => self.resolve_logical(&raw),
            Err(detail) => ResolvedResource::resolver_error(String::new(), detail),
        }
    }

    /// Resolves an already-extracted logical path to response material.
    pub fn resolve_logical(&self, raw_path: &str) -> ResolvedResource {
        let mut logical = normalize_logical_path(raw_path);
        if logical.is_empty() {
            logical = self.entry_document.clone();
        }

        let native = self.native_path(&logical);
        if !native.is_file() {
            return ResolvedResource::not_found(logical);
        }

        match fs::read(&native) {
            Ok(body) => {
                let content_type = mime_guess::from_path(&native)
                    .first_or_octet_stream()
                    .to_string();
                ResolvedResource::served(logical, content_type, body)
            }
            Err(err) => ResolvedResource::resolver_error(
                logical,
                format!("failed to read {}: {err}", native.display()),
            ),
        }
    }

    fn logical_path_from_uri(&self, uri: &str) -> Result<String, String> {
        let parsed =
            Url::parse(uri).map_err(|err| format!("invalid request uri `{uri}`: {err}"))?;
        if parsed.scheme() == self.scheme {
            let authority = parsed.host_str().unwrap_or("");
            Ok(format!("{authority}/{}", parsed.path()))
        } else {
            Ok(parsed.path().to_string())
        }
    }

    fn native_path(&self, logical: &str) -> PathBuf {
        let mut native = self.root.clone();
        for segment in logical.split('/') {
            if !segment.is_empty() {
                native.push(segment);
            }
        }
        native
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentResolver, ResourceOutcome};

    fn resolver() -> ContentResolver {
        ContentResolver::new("app", "/nonexistent-content-root", "index.html")
    }

    #[test]
    fn authority_and_path_forms_extract_the_same_logical_path() {
        let resolver = resolver();
        let cases = [
            ("app://index.html", "index.html"),
            ("app:///index.html", "index.html"),
            ("app://assets/app.css", "assets/app.css"),
            ("app:///assets/app.css", "assets/app.css"),
            ("http://app.localhost/assets/app.css", "assets/app.css"),
        ];

        for (uri, expected) in cases {
            let resolved = resolver.resolve_uri(uri);
            assert_eq!(resolved.logical_path, expected, "uri={uri}");
        }
    }

    #[test]
    fn outcome_status_codes_follow_http_semantics() {
        assert_eq!(ResourceOutcome::Served.status_code(), 200);
        assert_eq!(ResourceOutcome::NotFound.status_code(), 404);
        assert_eq!(ResourceOutcome::ResolverError.status_code(), 500);
    }

    #[test]
    fn malformed_uri_degrades_to_resolver_error() {
        let resolved = resolver().resolve_uri("not a uri");
        assert_eq!(resolved.outcome, ResourceOutcome::ResolverError);
        assert!(resolved.detail.is_some());
    }
}
