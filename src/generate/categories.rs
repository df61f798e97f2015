/// Category produced when no keyword rule matches.
pub const FALLBACK_CATEGORY: &str = "Diğer";

/// Keyword rules checked against the lower-cased file name, in order.
/// The first matching rule wins; the fixed order makes the guess
/// reproducible across runs.
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("Yapay Zeka", &["ai", "yapay"]),
    ("Yazılım", &["code", "yazilim"]),
    ("Kitaplar", &["kitap", "roman"]),
];

/// Guess a category for a PDF from its file name.
pub fn guess_category(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    for (label, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return label;
        }
    }
    FALLBACK_CATEGORY
}
