//! Minimal markdown-to-HTML preview renderer.
//!
//! A fixed rule table applied in order, each rule a single substitution
//! pass over the previously transformed text. Input is HTML-escaped
//! before any rule runs, so source angle brackets and quotes can never
//! reach the output unneutralized. This is deliberately not a
//! spec-compliant markdown implementation.

use once_cell::sync::Lazy;
use regex::Regex;

const EMPTY_PLACEHOLDER: &str = "<em>Nothing to preview</em>";

static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
// Consumes the leading newline so adjacent items end up touching, which
// lets the wrap rule collect them into one list.
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\n)- ([^\n]*)").unwrap());
static LIST_WRAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<li>.*</li>").unwrap());

/// Renders `raw` to preview HTML. Empty input yields a fixed placeholder.
pub fn render_preview(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let out = escape_html(raw);
    let out = H2_RE.replace_all(&out, "<h2>$1</h2>");
    let out = H3_RE.replace_all(&out, "<h3>$1</h3>");
    let out = BOLD_RE.replace_all(&out, "<strong>$1</strong>");
    let out = ITALIC_RE.replace_all(&out, "<em>$1</em>");
    let out = LIST_ITEM_RE.replace_all(&out, "<li>$1</li>");
    let out = LIST_WRAP_RE.replace(&out, "<ul>$0</ul>");
    out.replace('\n', "<br>")
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
