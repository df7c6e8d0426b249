//! Experimental Markdown renderer.
//!
//! Cell fragments are HTML; for Markdown output the anchors become
//! `[text](href)` and everything else is flattened to plain text.

use regex_lite::Regex;

use crate::types::Event;

/// Convert a link-bearing HTML fragment to Markdown.
pub fn fragment_to_markdown(fragment: &str) -> String {
    let anchors = Regex::new(r#"<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap();
    let linked = anchors.replace_all(fragment, "[$2]($1)");
    fragment_to_text(&linked)
}

/// Flatten an HTML fragment to plain text: tags stripped, the entities
/// the schedule page uses decoded.
pub fn fragment_to_text(fragment: &str) -> String {
    let tags = Regex::new(r"<[^>]+>").unwrap();
    let stripped = tags.replace_all(fragment, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Render the schedule as a Markdown pipe table.
pub fn render_table(events: &[Event]) -> String {
    let mut out = String::from(
        "| Time | Room | Title | Speakers | Attachments | Video |\n\
         | --- | --- | --- | --- | --- | --- |\n",
    );
    for event in events {
        let time = format!(
            "{} {} - {}",
            event.start.format("%Y-%m-%d"),
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        );
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            time,
            cell(&event.room_html),
            cell(&event.title_html),
            cell(&event.speakers_html),
            cell(&event.attachments_html),
            cell(&event.video_html),
        ));
    }
    out
}

// Pipes inside a cell would break the table layout.
fn cell(fragment: &str) -> String {
    fragment_to_markdown(fragment).replace('|', "\\|")
}
