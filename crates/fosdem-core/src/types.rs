//! Data types for the FOSDEM schedule scraper.
//!
//! `Event` keeps the table cells as link-normalized HTML fragments; the
//! renderers embed them without further escaping.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One scheduled talk or session, extracted from a single table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Title cell as HTML, usually wrapping the talk link
    pub title_html: String,
    /// Plain text of the first title link, empty if the title carries none
    pub title_text: String,
    /// Absolutized URL of the first title link, empty if none
    pub title_link: String,
    /// Raw href of the first title anchor; keys the watched checkbox
    pub id: String,
    /// Speakers cell as HTML, zero or more links
    pub speakers_html: String,
    /// Room cell as HTML
    pub room_html: String,
    /// Attachments cell as HTML (hrefs may already be absolute)
    pub attachments_html: String,
    /// Video cell as HTML
    pub video_html: String,
    /// Start of the session, local conference time
    pub start: NaiveDateTime,
    /// End of the session; equals `start` when the end cell is malformed
    pub end: NaiveDateTime,
}

impl Event {
    /// Time range as embedded in the HTML export, e.g. `10:30&nbsp;-&nbsp;10:55`.
    pub fn time_range_html(&self) -> String {
        format!(
            "{}&nbsp;-&nbsp;{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
