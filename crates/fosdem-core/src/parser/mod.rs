//! HTML parsers for the FOSDEM schedule page
//!
//! - `schedule`: extract events from the schedule table rows
//! - `links`: normalize relative links inside cell fragments

pub mod links;
pub mod schedule;

// Re-export main parsing functions
pub use links::{absolutize_fragment, absolutize_fragment_new_tab, split_links};
pub use schedule::{extract_event, parse_clock_offset, parse_schedule, sort_by_start, RowCells};
