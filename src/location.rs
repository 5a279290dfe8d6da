/// Address of the built-in help screen. It never reaches the rendering
/// engine; the window routes it to the static help view and it is stored in
/// history like any other location.
pub const HELP_URI: &str = "browser://help";

pub fn is_help(input: &str) -> bool {
    input == HELP_URI
}

/// Rewrites a user-typed address into something the engine can load, by
/// prepending the usual scheme and host-prefix conventions. First matching
/// rule wins. This is a best-effort heuristic, not a validator; input it
/// can't fix is handed to the engine as-is and fails there.
pub fn normalize(input: &str) -> String {
    let has_http = input.contains("http://");
    let has_https = input.contains("https://");
    let has_www = input.contains("www.");

    if !has_http && !has_https && !has_www {
        return format!("http://www.{}", input);
    }
    if has_http && !has_www {
        return format!("http://www.{}", strip_scheme(input, "http://"));
    }
    if has_https && !has_www {
        // Downgraded on purpose, matching the original shell's behavior.
        return format!("http://www.{}", strip_scheme(input, "https://"));
    }
    if !has_http {
        return format!("http://{}", input);
    }
    input.to_string()
}

// The scheme is normally a prefix; when it shows up mid-string the input is
// already malformed, so keep it whole and let the load fail downstream.
fn strip_scheme<'a>(input: &'a str, scheme: &str) -> &'a str {
    input.strip_prefix(scheme).unwrap_or(input)
}
