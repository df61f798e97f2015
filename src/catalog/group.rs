use std::collections::HashMap;

use crate::manifest::Book;

/// Group records by category label.
///
/// Records without a category (or with an empty one) land under the default
/// label. Relative order within each bucket follows the input; every input
/// record appears in exactly one bucket. Display order of the categories is
/// decided by the caller.
pub fn group_by_category<'a>(books: &[&'a Book]) -> HashMap<&'a str, Vec<&'a Book>> {
    let mut groups: HashMap<&str, Vec<&Book>> = HashMap::new();
    for book in books {
        groups.entry(book.category_label()).or_default().push(book);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::DEFAULT_CATEGORY;

    fn book(title: &str, category: Option<&str>) -> Book {
        Book {
            title: title.to_string(),
            file: format!("pdfs/{}.pdf", title),
            cover: None,
            category: category.map(String::from),
            year: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_grouping_covers_every_record_once() {
        let books = vec![
            book("a", Some("Yazılım")),
            book("b", Some("Kitaplar")),
            book("c", Some("Yazılım")),
            book("d", None),
        ];
        let refs: Vec<&Book> = books.iter().collect();
        let groups = group_by_category(&refs);

        let total: usize = groups.values().map(|bucket| bucket.len()).sum();
        assert_eq!(total, books.len());
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_order_preserved_within_category() {
        let books = vec![
            book("ilk", Some("Yazılım")),
            book("ara", Some("Kitaplar")),
            book("son", Some("Yazılım")),
        ];
        let refs: Vec<&Book> = books.iter().collect();
        let groups = group_by_category(&refs);

        let titles: Vec<&str> = groups["Yazılım"].iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["ilk", "son"]);
    }

    #[test]
    fn test_absent_and_empty_categories_use_default_label() {
        let books = vec![book("a", None), book("b", Some(""))];
        let refs: Vec<&Book> = books.iter().collect();
        let groups = group_by_category(&refs);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[DEFAULT_CATEGORY].len(), 2);
    }
}
