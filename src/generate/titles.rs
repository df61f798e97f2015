/// Derive a display title from a PDF file name: drop the extension, turn
/// runs of underscores and hyphens into spaces, collapse whitespace, and
/// capitalize the first letter of each word.
pub fn title_from_filename(filename: &str) -> String {
    let base = filename
        .rsplit_once('.')
        .map(|(base, _ext)| base)
        .unwrap_or(filename);
    humanize(base)
}

/// Normalize a category folder name into a display label. Leading ordering
/// prefixes like `01_` are stripped so `01_anarsizm` becomes `Anarsizm`.
pub fn category_from_folder(folder: &str) -> String {
    let stripped = folder.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c == '_' || c == '-' || c.is_whitespace()
    });
    humanize(stripped)
}

fn humanize(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    spaced
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("yapay_zeka-giris.pdf"), "Yapay Zeka Giris");
        assert_eq!(title_from_filename("rust__programlama.pdf"), "Rust Programlama");
        assert_eq!(title_from_filename("simyaci.pdf"), "Simyaci");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        assert_eq!(title_from_filename("sürüm.1.2.pdf"), "Sürüm.1.2");
    }

    #[test]
    fn test_turkish_initial_is_uppercased() {
        assert_eq!(title_from_filename("çile.pdf"), "Çile");
    }

    #[test]
    fn test_category_from_folder_strips_ordering_prefix() {
        assert_eq!(category_from_folder("01_anarsizm"), "Anarsizm");
        assert_eq!(category_from_folder("02-bilim_kurgu"), "Bilim Kurgu");
        assert_eq!(category_from_folder("tarih"), "Tarih");
    }
}
