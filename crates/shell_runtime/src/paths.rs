//! Logical-path normalization for custom-scheme content requests.

use percent_encoding::percent_decode_str;

/// Percent-decodes and lexically normalizes a logical content path.
///
/// This helper trims whitespace, converts backslashes to `/`, drops empty and
/// `.` segments, resolves `..` against earlier segments only, and returns the
/// collapsed root-relative path. An empty or fully-collapsed input yields
/// `""`, which callers treat as a request for the default entry document.
///
/// Because `..` can never pop past the first segment, a normalized path can
/// never climb above the content root.
pub fn normalize_logical_path(path: &str) -> String {
    let decoded = percent_decode_str(path.trim()).decode_utf8_lossy();
    let unified = decoded.replace('\\', "/");

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::normalize_logical_path;

    #[test]
    fn normalize_logical_path_matches_expected_cases() {
        let cases = [
            ("", ""),
            ("   ", ""),
            ("/", ""),
            ("index.html", "index.html"),
            ("/index.html", "index.html"),
            ("//assets//app.css", "assets/app.css"),
            ("./docs/../notes/readme.txt", "notes/readme.txt"),
            ("\\assets\\app.css", "assets/app.css"),
            ("../../etc/passwd", "etc/passwd"),
            ("/../..", ""),
            ("hello%20world.txt", "hello world.txt"),
            ("a%2Fb.txt", "a/b.txt"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_logical_path(input), expected, "input={input:?}");
        }
    }
}
