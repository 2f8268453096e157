//! Forwarded content-console records and their diagnostic origin tags.

use serde::{Deserialize, Serialize};

/// Origin tag for host-side diagnostic lines.
pub const HOST_ORIGIN: &str = "host";

/// Severity reported by the content console hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    /// `console.log`.
    Log,
    /// `console.info`.
    Info,
    /// `console.warn`.
    Warn,
    /// `console.error` or an uncaught content error.
    Error,
}

impl ConsoleLevel {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// One console record forwarded from the content context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleRecord {
    /// Reported severity.
    pub level: ConsoleLevel,
    /// Rendered message text.
    pub message: String,
    /// Document or script that produced the message, when known.
    #[serde(default)]
    pub source: Option<String>,
    /// Source line, when known.
    #[serde(default)]
    pub line: Option<u32>,
}

impl ConsoleRecord {
    /// Diagnostic origin tag of the form `content:<source>:<line>`.
    pub fn origin(&self) -> String {
        format!(
            "content:{}:{}",
            self.source.as_deref().unwrap_or("<anonymous>"),
            self.line.unwrap_or(0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsoleLevel, ConsoleRecord};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn origin_tags_include_source_and_line() {
        let record = ConsoleRecord {
            level: ConsoleLevel::Warn,
            message: "boot slow".to_string(),
            source: Some("/index.html".to_string()),
            line: Some(42),
        };
        assert_eq!(record.origin(), "content:/index.html:42");
    }

    #[test]
    fn origin_tags_degrade_for_anonymous_sources() {
        let record = ConsoleRecord {
            level: ConsoleLevel::Log,
            message: "hello".to_string(),
            source: None,
            line: None,
        };
        assert_eq!(record.origin(), "content:<anonymous>:0");
    }

    #[test]
    fn records_deserialize_from_guard_payloads() {
        let payload = json!({
            "level": "error",
            "message": "uncaught error",
            "source": "/app.js",
            "line": 7
        });
        let record: ConsoleRecord = serde_json::from_value(payload).expect("valid guard payload");
        assert_eq!(record.level, ConsoleLevel::Error);
        assert_eq!(record.level.as_str(), "error");
        assert_eq!(record.line, Some(7));
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let record: ConsoleRecord =
            serde_json::from_value(json!({ "level": "log", "message": "m" }))
                .expect("minimal payload");
        assert_eq!(record.source, None);
        assert_eq!(record.line, None);
    }
}
