//! HTML rendering of the catalog grid.
//!
//! The display area is rebuilt from scratch on every render: filtered
//! records are grouped by category, categories are ordered with Turkish
//! collation, and each category becomes a row of linked cards. The fragment
//! is wrapped into a complete standalone document by [`render_page`].

mod html;
mod page;

pub use html::{encode_href, escape};
pub use page::{render_error_page, render_page};

use crate::catalog;
use crate::collate;
use crate::manifest::Book;

/// Badge shown on every card; the catalog only lists PDF assets.
const FORMAT_BADGE: &str = "PDF";

/// Render the display-area fragment for an already-filtered record set.
pub fn render_app(filtered: &[&Book], query: &str) -> String {
    if filtered.is_empty() {
        return render_empty_state(query);
    }

    let groups = catalog::group_by_category(filtered);
    let mut categories: Vec<&str> = groups.keys().copied().collect();
    categories.sort_by(|a, b| collate::compare(a, b));

    let mut out = String::new();
    for category in categories {
        render_row(&mut out, category, &groups[category]);
    }
    out
}

fn render_empty_state(query: &str) -> String {
    format!(
        "<div class=\"empty-state\">Eşleşen kitap bulunamadı.<br/><br/>\
         <strong>{}</strong> için sonuç yok.</div>\n",
        escape(&collate::fold(query.trim()))
    )
}

fn render_row(out: &mut String, category: &str, books: &[&Book]) {
    out.push_str("<section class=\"row\">\n");
    out.push_str("  <div class=\"row-header\">\n");
    out.push_str(&format!(
        "    <h2 class=\"row-title\">{}</h2>\n",
        escape(category)
    ));
    out.push_str(&format!(
        "    <span class=\"row-count\">{} kitap</span>\n",
        books.len()
    ));
    out.push_str("  </div>\n");
    out.push_str("  <div class=\"row-scroller\">\n");
    for book in books {
        render_card(out, book);
    }
    out.push_str("  </div>\n");
    out.push_str("</section>\n");
}

fn render_card(out: &mut String, book: &Book) {
    let cover_style = book
        .cover
        .as_deref()
        .map(|cover| format!(" style=\"background-image: url('{}')\"", encode_href(cover)))
        .unwrap_or_default();

    out.push_str(&format!(
        "    <a class=\"card-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\n",
        encode_href(&book.file)
    ));
    out.push_str(&format!("      <article class=\"card\"{}>\n", cover_style));
    out.push_str(&format!(
        "        <div class=\"card-badge\">{}</div>\n",
        FORMAT_BADGE
    ));
    out.push_str("        <div class=\"card-overlay\">\n");
    out.push_str(&format!(
        "          <h3 class=\"card-title\">{}</h3>\n",
        escape(&book.title)
    ));
    out.push_str(&format!(
        "          <p class=\"card-category\">{}</p>\n",
        escape(book.category_label())
    ));
    out.push_str("        </div>\n");
    out.push_str("      </article>\n");
    out.push_str("    </a>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, category: &str, cover: Option<&str>) -> Book {
        Book {
            title: title.to_string(),
            file: format!("pdfs/{}.pdf", title),
            cover: cover.map(String::from),
            category: Some(category.to_string()),
            year: Some(2026),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_set_renders_no_results_block() {
        let html = render_app(&[], "  Olmayan  ");
        assert!(html.contains("empty-state"));
        assert!(html.contains("<strong>olmayan</strong>"));
    }

    #[test]
    fn test_rows_follow_turkish_category_order() {
        let a = book("armut kitabı", "Armut", None);
        let b = book("çiçek kitabı", "Çiçek", None);
        let c = book("elma kitabı", "elma", None);
        let html = render_app(&[&c, &a, &b], "");

        let armut = html.find(">Armut<").unwrap();
        let cicek = html.find(">Çiçek<").unwrap();
        let elma = html.find(">elma<").unwrap();
        assert!(armut < cicek && cicek < elma);
    }

    #[test]
    fn test_row_header_counts_books() {
        let a = book("bir", "Kitaplar", None);
        let b = book("iki", "Kitaplar", None);
        let html = render_app(&[&a, &b], "");
        assert!(html.contains("2 kitap"));
    }

    #[test]
    fn test_card_links_and_badge() {
        let with_cover = book("simyacı", "Kitaplar", Some("covers/simyacı.jpg"));
        let html = render_app(&[&with_cover], "");

        assert!(html.contains("href=\"pdfs/simyac%C4%B1.pdf\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("card-badge\">PDF<"));
        assert!(html.contains("background-image"));
    }

    #[test]
    fn test_coverless_card_has_no_background() {
        let plain = book("notlar", "Genel", None);
        let html = render_app(&[&plain], "");
        assert!(!html.contains("background-image"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let tricky = book("a < b & \"c\"", "Genel", None);
        let html = render_app(&[&tricky], "");
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
    }
}
