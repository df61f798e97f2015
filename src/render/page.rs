use super::escape;

/// Fixed message shown in place of the grid when the manifest cannot be
/// loaded.
const LOAD_ERROR_HTML: &str = "<div class=\"error-message\">Veriler yüklenirken bir hata oluştu.\
<br/>Manifest dosyasının erişilebilir olduğundan emin olun.</div>";

const STYLESHEET: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body {
  margin: 0;
  padding: 24px;
  background: #111;
  color: #eee;
  font-family: system-ui, -apple-system, sans-serif;
}
.search-banner {
  margin: 0 0 24px;
  color: #999;
  font-size: 14px;
}
.search-banner strong { color: #eee; }
.row { margin-bottom: 32px; }
.row-header {
  display: flex;
  align-items: baseline;
  gap: 12px;
  margin-bottom: 12px;
}
.row-title { margin: 0; font-size: 20px; }
.row-count { color: #999; font-size: 13px; }
.row-scroller {
  display: flex;
  gap: 16px;
  overflow-x: auto;
  padding-bottom: 8px;
}
.card-link { text-decoration: none; color: inherit; flex: 0 0 auto; }
.card {
  position: relative;
  width: 160px;
  height: 230px;
  border-radius: 8px;
  background-color: #222;
  background-size: cover;
  background-position: center;
  overflow: hidden;
}
.card-badge {
  position: absolute;
  top: 8px;
  right: 8px;
  padding: 2px 6px;
  border-radius: 4px;
  background: #c0392b;
  font-size: 11px;
  font-weight: 700;
}
.card-overlay {
  position: absolute;
  inset: auto 0 0 0;
  padding: 10px;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.85));
}
.card-title { margin: 0; font-size: 14px; }
.card-category { margin: 4px 0 0; color: #bbb; font-size: 12px; }
.empty-state, .error-message {
  padding: 48px 16px;
  text-align: center;
  color: #999;
}
"#;

/// Wrap a display-area fragment into a complete standalone document.
pub fn render_page(app: &str, query: &str) -> String {
    let banner = if query.trim().is_empty() {
        String::new()
    } else {
        format!(
            "  <p class=\"search-banner\">Arama: <strong>{}</strong></p>\n",
            escape(query.trim())
        )
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"tr\">\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>Kitaplık</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         {}<div id=\"app\">\n{}</div>\n\
         </body>\n\
         </html>\n",
        STYLESHEET, banner, app
    )
}

/// The full document written when the manifest load fails.
pub fn render_error_page() -> String {
    render_page(LOAD_ERROR_HTML, "")
}
