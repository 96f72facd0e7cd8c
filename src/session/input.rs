/// Canonical form of a typed answer: surrounding whitespace dropped, lower-cased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Exact comparison after normalization. No partial credit, no accent folding.
pub fn is_match(raw: &str, target: &str) -> bool {
    normalize(raw) == target.to_lowercase()
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
