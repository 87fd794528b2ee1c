//! Escaping and link helpers shared by the markup formatters.

use crate::report::domain::{Note, NoteLevel};

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Encodes `s` as a JavaScript string literal that is safe inside `<script>`
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Link to the analysis page of `uri` in the user interface, or `uri`
/// itself when no UI is configured
pub fn subject_link(ui_uri: &str, uri: &str) -> String {
    if ui_uri.is_empty() {
        return uri.to_string();
    }
    let separator = if ui_uri.contains('?') { '&' } else { '?' };
    format!("{}{}uri={}", ui_uri, separator, urlencoding::encode(uri))
}

/// `2 good, 1 warning` style breakdown of a note list, most severe last
pub fn note_breakdown(notes: &[Note]) -> String {
    let levels = [
        NoteLevel::Good,
        NoteLevel::Info,
        NoteLevel::Warning,
        NoteLevel::Bad,
    ];
    let parts: Vec<String> = levels
        .iter()
        .filter_map(|level| {
            let count = notes.iter().filter(|note| note.level == *level).count();
            (count > 0).then(|| format!("{} {}", count, level))
        })
        .collect();

    if parts.is_empty() {
        "no notes".to_string()
    } else {
        parts.join(", ")
    }
}
