//! Name canonicalization shared by the resolver and the administrative layer.
//!
//! Stored names never carry a trailing dot; it is added back only when a
//! name is presented externally.

/// Strips a single trailing dot, if present.
pub fn normalize(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Presentation form of a name, always ending in exactly one dot.
pub fn fqdn(name: &str) -> String {
    format!("{}.", normalize(name))
}

/// The last two dot-separated labels of `domain`.
///
/// Names with fewer than two labels are returned unchanged.
pub fn second_level(domain: &str) -> &str {
    let domain = normalize(domain);
    match domain.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &domain[idx + 1..],
        None => domain,
    }
}

/// `name` with its first label stripped, or `None` for a single label.
pub fn parent(name: &str) -> Option<&str> {
    normalize(name)
        .split_once('.')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
}

/// `name` followed by each of its ancestors, most specific first.
pub fn lineage(name: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(normalize(name)).filter(|n| !n.is_empty()), |n| parent(*n))
}

/// The single-level wildcard owner covering `name` (`*.` + parent).
pub fn wildcard_for(name: &str) -> Option<String> {
    parent(name).map(|p| format!("*.{}", p))
}

/// True when `name` is `zone` itself or a descendant of it.
pub fn is_within(name: &str, zone: &str) -> bool {
    let name = normalize(name);
    let zone = normalize(zone);
    name == zone
        || (name.len() > zone.len()
            && name.ends_with(zone)
            && name.as_bytes()[name.len() - zone.len() - 1] == b'.')
}

/// Builds the stored name for a record entered relative to `zone`.
///
/// `@` and the empty string denote the apex, a trailing dot marks an
/// absolute name, names already under the zone are kept, and anything else
/// is treated as relative and suffixed with the zone domain.
pub fn qualify(name: &str, zone: &str) -> String {
    let zone = normalize(zone);
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed == "@" {
        return zone.to_string();
    }
    if trimmed.ends_with('.') {
        return normalize(trimmed).to_string();
    }
    if is_within(trimmed, zone) {
        return trimmed.to_string();
    }
    format!("{}.{}", trimmed, zone)
}
