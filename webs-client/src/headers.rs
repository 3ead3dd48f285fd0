//! Header merging.

use http::HeaderMap;

/// Merge two header sets into a new map.
///
/// Values are additive: for a key present in both maps the result holds
/// every value of `base` followed by every value of `overrides`. Neither
/// input is modified.
pub fn merge_headers(base: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = HeaderMap::with_capacity(base.len() + overrides.len());
    add_headers(&mut merged, base);
    add_headers(&mut merged, overrides);
    merged
}

/// Append every value of `extra` to `target`.
pub fn add_headers(target: &mut HeaderMap, extra: &HeaderMap) {
    for (name, value) in extra {
        target.append(name.clone(), value.clone());
    }
}
