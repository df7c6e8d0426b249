//! Experimental CSV renderer.
//!
//! Deliberately partial: only the title (text and link), room, and the
//! two timestamps are emitted. The remaining fields have no agreed
//! plain-text shape yet.

use crate::types::Event;

use super::markdown::fragment_to_text;

/// Render the partial CSV export.
pub fn render(events: &[Event]) -> String {
    let mut out = String::from("title,link,room,start,end\n");
    for event in events {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape(&event.title_text),
            escape(&event.title_link),
            escape(&fragment_to_text(&event.room_html)),
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%Y-%m-%d %H:%M"),
        ));
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
