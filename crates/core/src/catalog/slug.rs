//! Category key derivation.

/// Derives a category key from a display name.
///
/// Alphanumerics are lowercased, every other run of characters becomes a
/// single `-`, and leading/trailing dashes are dropped. Returns an empty
/// string when the name has no alphanumerics.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Venue", "venue")]
    #[case("Mehendi Artist", "mehendi-artist")]
    #[case("  DJ & Sound  ", "dj-sound")]
    #[case("Photo/Video", "photo-video")]
    #[case("Café", "café")]
    #[case("!!!", "")]
    #[case("", "")]
    fn test_slugify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }
}
