//! Renderers for the extracted event list.
//!
//! HTML is the primary output; the Markdown and CSV variants are
//! experimental.

pub mod csv;
pub mod html;
pub mod markdown;

use crate::types::Event;

/// Export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Markdown,
    Csv,
}

impl ExportFormat {
    /// Render the sorted event list in this format.
    pub fn render(&self, events: &[Event]) -> String {
        match self {
            ExportFormat::Html => html::render_page(events),
            ExportFormat::Markdown => markdown::render_table(events),
            ExportFormat::Csv => csv::render(events),
        }
    }

    /// Default output file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Html => "fosdem_schedule.html",
            ExportFormat::Markdown => "fosdem_schedule.md",
            ExportFormat::Csv => "fosdem_schedule.csv",
        }
    }
}
