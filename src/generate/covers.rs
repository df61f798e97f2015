use std::collections::HashSet;

/// Image extensions tried when pairing a cover with a PDF, in order.
pub const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Look up a cover for a PDF stem among the scanned cover file names.
///
/// `names` holds paths relative to the covers directory; `subdir` narrows
/// the lookup to the matching category subdirectory when the PDF sits in
/// one. The first extension candidate that exists wins. The returned path
/// is prefixed with `covers_prefix` so it resolves from the hosting root.
pub fn find_cover(
    stem: &str,
    subdir: Option<&str>,
    names: &HashSet<String>,
    covers_prefix: &str,
) -> Option<String> {
    for ext in COVER_EXTENSIONS {
        let candidate = match subdir {
            Some(dir) => format!("{}/{}.{}", dir, stem, ext),
            None => format!("{}.{}", stem, ext),
        };
        if names.contains(&candidate) {
            return Some(format!("{}/{}", covers_prefix, candidate));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_extension_candidate_wins() {
        let covers = names(&["kitap.png", "kitap.jpg"]);
        assert_eq!(
            find_cover("kitap", None, &covers, "covers"),
            Some("covers/kitap.jpg".to_string())
        );
    }

    #[test]
    fn test_subdir_lookup() {
        let covers = names(&["01_anarsizm/devlet.png"]);
        assert_eq!(
            find_cover("devlet", Some("01_anarsizm"), &covers, "covers"),
            Some("covers/01_anarsizm/devlet.png".to_string())
        );
        assert_eq!(find_cover("devlet", None, &covers, "covers"), None);
    }

    #[test]
    fn test_no_candidate_matches() {
        let covers = names(&["baska.jpg"]);
        assert_eq!(find_cover("kitap", None, &covers, "covers"), None);
    }
}
