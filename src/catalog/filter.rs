use crate::collate;
use crate::manifest::Book;

/// Filter records by a raw search query.
///
/// The query is trimmed and case-folded; an empty folded query passes every
/// record. Otherwise a record matches when the folded query is a substring
/// of its folded title or folded category. Plain substring containment, no
/// tokenization or ranking; output preserves input order.
pub fn filter_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = collate::fold(query.trim());
    if needle.is_empty() {
        return books.iter().collect();
    }

    books
        .iter()
        .filter(|book| {
            collate::fold(&book.title).contains(&needle)
                || book
                    .category
                    .as_deref()
                    .map(|category| collate::fold(category).contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}
