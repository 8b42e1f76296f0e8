//! Cache key normalization

/// Coerce a user-supplied URL into the form used as cache key and upstream target.
///
/// Anything not already starting with `http://` or `https://` (ASCII
/// case-insensitive) gets `https://` prepended. No other validation happens.
pub fn normalize_url(raw: &str) -> String {
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

fn has_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
