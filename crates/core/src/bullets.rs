//! Bullet-level classification for body lines.

use crate::types::BulletLevel;

/// Marker for a nested bullet: exactly two spaces, hyphen, space.
const NESTED_MARKER: &str = "  - ";

/// Marker for a top-level bullet.
const TOP_MARKER: &str = "- ";

/// Classify a body line, returning its level and text without the marker.
///
/// The nested marker is checked first; a line starting with `- ` can never
/// match it, so `"- item"` is always top level. Lines without a marker are
/// plain text at level 0.
pub fn classify(line: &str) -> (BulletLevel, &str) {
    if let Some(rest) = line.strip_prefix(NESTED_MARKER) {
        (BulletLevel::Nested, rest.trim())
    } else if let Some(rest) = line.strip_prefix(TOP_MARKER) {
        (BulletLevel::Top, rest.trim())
    } else {
        (BulletLevel::Top, line.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_bullet() {
        assert_eq!(classify("  - sub"), (BulletLevel::Nested, "sub"));
        assert_eq!(classify("  -   padded  "), (BulletLevel::Nested, "padded"));
    }

    #[test]
    fn test_top_bullet() {
        assert_eq!(classify("- top"), (BulletLevel::Top, "top"));
        assert_eq!(classify("- item"), (BulletLevel::Top, "item"));
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(classify("plain text"), (BulletLevel::Top, "plain text"));
        assert_eq!(classify("-no space"), (BulletLevel::Top, "-no space"));
    }

    #[test]
    fn test_other_indentation_is_plain() {
        // Only exactly two leading spaces mark a nested bullet.
        assert_eq!(classify("    - deep"), (BulletLevel::Top, "- deep"));
        assert_eq!(classify(" - odd"), (BulletLevel::Top, "- odd"));
    }
}
