//! Offline manifest generation: scan a directory of PDFs and a directory of
//! cover images, derive display metadata from file names, and assemble the
//! book records the renderer consumes.

mod categories;
mod covers;
mod scanner;
mod titles;

pub use categories::{guess_category, CATEGORY_RULES, FALLBACK_CATEGORY};
pub use covers::{find_cover, COVER_EXTENSIONS};
pub use scanner::{scan_covers, scan_pdfs, PdfEntry};
pub use titles::{category_from_folder, title_from_filename};

use anyhow::Result;
use chrono::{Datelike, Local};
use std::path::Path;

use crate::manifest::Book;

/// Build one book record per PDF under `pdf_dir`.
///
/// A PDF in a first-level subdirectory takes its category from the folder
/// name and looks its cover up under the matching covers subdirectory;
/// flat PDFs fall back to keyword guessing. A missing covers directory
/// degrades to cover-less records.
pub fn build_manifest(pdf_dir: &Path, covers_dir: &Path) -> Result<Vec<Book>> {
    let pdfs = scan_pdfs(pdf_dir)?;
    let covers = scan_covers(covers_dir);
    let year = Local::now().year();
    let pdf_prefix = dir_prefix(pdf_dir);
    let covers_prefix = dir_prefix(covers_dir);

    let books = pdfs
        .into_iter()
        .map(|entry| {
            let category = match entry.subdir.as_deref() {
                Some(folder) => category_from_folder(folder),
                None => guess_category(&entry.file_name).to_string(),
            };
            let cover = find_cover(&entry.stem, entry.subdir.as_deref(), &covers, &covers_prefix);
            Book {
                title: title_from_filename(&entry.file_name),
                file: format!("{}/{}", pdf_prefix, entry.relative),
                cover,
                category: Some(category),
                year: Some(year),
                tags: Vec::new(),
            }
        })
        .collect();

    Ok(books)
}

/// Directory path as it should appear in manifest-relative asset paths.
fn dir_prefix(dir: &Path) -> String {
    dir.to_string_lossy()
        .replace('\\', "/")
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_manifest_pairs_titles_categories_and_covers() {
        let temp = TempDir::new().unwrap();
        let pdf_dir = temp.path().join("pdfs");
        let covers_dir = temp.path().join("covers");
        std::fs::create_dir(&pdf_dir).unwrap();
        std::fs::create_dir(&covers_dir).unwrap();
        std::fs::write(pdf_dir.join("yapay_zeka-giris.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(covers_dir.join("yapay_zeka-giris.jpg"), b"jpg").unwrap();

        let books = build_manifest(&pdf_dir, &covers_dir).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Yapay Zeka Giris");
        assert_eq!(books[0].category.as_deref(), Some("Yapay Zeka"));
        assert!(books[0].file.ends_with("pdfs/yapay_zeka-giris.pdf"));
        assert!(books[0]
            .cover
            .as_deref()
            .unwrap()
            .ends_with("covers/yapay_zeka-giris.jpg"));
        assert!(books[0].tags.is_empty());
        assert!(books[0].year.is_some());
    }

    #[test]
    fn test_missing_covers_directory_degrades_to_no_covers() {
        let temp = TempDir::new().unwrap();
        let pdf_dir = temp.path().join("pdfs");
        std::fs::create_dir(&pdf_dir).unwrap();
        std::fs::write(pdf_dir.join("roman.pdf"), b"%PDF-1.4").unwrap();

        let books = build_manifest(&pdf_dir, &temp.path().join("covers")).unwrap();
        assert_eq!(books.len(), 1);
        assert!(books[0].cover.is_none());
        assert_eq!(books[0].category.as_deref(), Some("Kitaplar"));
    }

    #[test]
    fn test_subdirectory_supplies_category_and_cover_location() {
        let temp = TempDir::new().unwrap();
        let pdf_dir = temp.path().join("pdfs");
        let covers_dir = temp.path().join("covers");
        std::fs::create_dir_all(pdf_dir.join("01_anarsizm")).unwrap();
        std::fs::create_dir_all(covers_dir.join("01_anarsizm")).unwrap();
        std::fs::write(pdf_dir.join("01_anarsizm/devlet.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(covers_dir.join("01_anarsizm/devlet.png"), b"png").unwrap();

        let books = build_manifest(&pdf_dir, &covers_dir).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].category.as_deref(), Some("Anarsizm"));
        assert!(books[0].file.ends_with("pdfs/01_anarsizm/devlet.pdf"));
        assert!(books[0]
            .cover
            .as_deref()
            .unwrap()
            .ends_with("covers/01_anarsizm/devlet.png"));
    }

    #[test]
    fn test_missing_pdf_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        assert!(build_manifest(&temp.path().join("pdfs"), &temp.path().join("covers")).is_err());
    }
}
