//! Active-route resolution for header links.
//!
//! Matching is segment-wise: `/dash` does not match `/dashboard`.

pub const ROOT: &str = "/";

/// Path segments with query string, fragment and empty segments removed.
fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// True when `href` should be highlighted while `current` is shown.
///
/// The root link only matches the root path exactly. Any other link matches
/// when its segments are a prefix of the current path's segments.
pub fn is_active(current: &str, href: &str) -> bool {
    let target = segments(href);
    let here = segments(current);

    if target.is_empty() {
        return here.is_empty();
    }
    here.len() >= target.len() && here.iter().zip(&target).all(|(a, b)| a == b)
}
