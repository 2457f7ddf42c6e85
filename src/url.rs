//! URL joining helpers for author avatars and author page routes

/// Join URL parts with `/` and collapse repeated slashes.
///
/// The `//` following a scheme (`https://`) is kept, and nothing after the
/// first `?` or `#` is touched. Empty parts are skipped.
pub fn normalize_url(parts: &[&str]) -> String {
    let mut joined = String::new();
    for part in parts.iter().filter(|part| !part.is_empty()) {
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(part);
    }
    collapse_slashes(&joined)
}

/// Prefix a root-relative image URL (`/img/me.png`) with the site base URL.
///
/// Absolute URLs, protocol-relative URLs (`//cdn.example.com/me.png`) and
/// relative paths are returned unchanged.
pub fn normalize_image_url(image_url: &str, base_url: &str) -> String {
    if is_root_relative(image_url) {
        normalize_url(&[base_url, image_url])
    } else {
        image_url.to_string()
    }
}

fn is_root_relative(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

fn collapse_slashes(url: &str) -> String {
    let (prefix, rest) = split_scheme(url);
    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let (path, suffix) = rest.split_at(path_end);

    let mut out = String::with_capacity(url.len());
    out.push_str(prefix);
    let mut previous_slash = false;
    for c in path.chars() {
        let is_slash = c == '/';
        if !(is_slash && previous_slash) {
            out.push(c);
        }
        previous_slash = is_slash;
    }
    out.push_str(suffix);
    out
}

/// Split `scheme://` off the front of a URL, if there is one
fn split_scheme(url: &str) -> (&str, &str) {
    match url.find("://") {
        Some(idx)
            if idx > 0
                && url[..idx]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            url.split_at(idx + 3)
        }
        _ => ("", url),
    }
}
