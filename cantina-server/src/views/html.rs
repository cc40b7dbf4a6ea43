//! Minimal HTML building helpers

use std::fmt::Write;

/// Escape text for element content and quoted attribute values
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

/// Wrap a body in the shared page chrome
pub fn page(title: &str, body: &str, script: Option<&str>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header><h1>{title}</h1><nav><a href="/">Cardápio</a> · <a href="/cozinha">Cozinha</a> · <a href="/admin/relatorio">Relatório</a></nav></header>
<main>
{body}
</main>
"#,
        title = escape(title),
    );
    if let Some(script) = script {
        let _ = write!(html, "<script>\n{script}\n</script>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#faf7f2;color:#222}\
header{background:#8b2e16;color:#fff;padding:.75rem 1rem}header a{color:#fde6c8}\
main{padding:1rem;max-width:960px;margin:auto}\
.categoria{margin-bottom:1.25rem}.item{display:flex;justify-content:space-between;align-items:center;padding:.35rem 0;border-bottom:1px solid #eee}\
.ticket{background:#fff;border-left:6px solid #d98c1f;margin:.75rem 0;padding:.75rem;border-radius:4px}\
.ticket.em-preparo{border-color:#2f7fc1}\
table{width:100%;border-collapse:collapse;background:#fff}td,th{padding:.4rem;border-bottom:1px solid #eee;text-align:left}\
.cancelado{color:#999;text-decoration:line-through}.total{font-size:1.25rem;font-weight:bold;margin-top:1rem}\
button{cursor:pointer}";
