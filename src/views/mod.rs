//! Server-rendered HTML pages

pub mod catalog;
pub mod loans;

use axum::http::StatusCode;

pub(crate) const DATE_FORMAT: &str = "%d/%m/%Y";
pub(crate) const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M UTC";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout
pub(crate) fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4em; text-align: left; }}
.atrasado {{ color: #b00020; font-weight: bold; }}
.devolvido {{ color: #2e7d32; }}
</style>
</head>
<body>
<nav><a href="/">Livros</a> | <a href="/emprestimos">Empréstimos</a></nav>
<h1>{title}</h1>
{content}
</body>
</html>
"#,
        title = escape(title),
        content = content,
    )
}

/// Error page shown by the HTML handlers
pub fn render_error(status: StatusCode, message: &str) -> String {
    let content = format!(
        "<p>{}</p>\n<p><a href=\"/\">Voltar</a></p>",
        escape(message)
    );
    layout(&format!("Erro {}", status.as_u16()), &content)
}
