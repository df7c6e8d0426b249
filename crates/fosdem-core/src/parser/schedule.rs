//! Row-to-event extraction for the schedule table.
//!
//! The events page is one big table, eight columns per row: title,
//! speakers, room, day, start, end, attachments, video. Section headers
//! (day and room separators) share the table and are recognized by the
//! `<h4>` marker opening their first cell.

use chrono::{Duration, NaiveTime};
use scraper::{ElementRef, Html, Selector};

use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::types::Event;

use super::links::{absolutize_fragment, absolutize_fragment_new_tab, split_links};

/// Selector for the schedule rows on the events page
const ROW_SELECTOR: &str =
    "div#main table.table.table-striped.table-bordered.table-condensed tbody > tr";

/// Marker opening the first cell of a section-header row
const SECTION_HEADER_MARKER: &str = "<h4>";

/// The eight columns of one schedule row, in document order.
///
/// The column contract is fixed; a row that does not produce exactly
/// eight cells yields no `RowCells` and is skipped.
#[derive(Debug, Clone, Copy)]
pub struct RowCells<'a> {
    pub title: ElementRef<'a>,
    pub speakers: ElementRef<'a>,
    pub room: ElementRef<'a>,
    pub day: ElementRef<'a>,
    pub start: ElementRef<'a>,
    pub end: ElementRef<'a>,
    pub attachments: ElementRef<'a>,
    pub video: ElementRef<'a>,
}

impl<'a> RowCells<'a> {
    /// Bind a row's cells to the fixed eight-column layout.
    pub fn from_cells(cells: &[ElementRef<'a>]) -> Option<Self> {
        let &[title, speakers, room, day, start, end, attachments, video] = cells else {
            return None;
        };
        Some(Self {
            title,
            speakers,
            room,
            day,
            start,
            end,
            attachments,
            video,
        })
    }
}

/// Parse all events from the schedule page HTML, in document order.
///
/// Section-header rows are skipped. The result is not yet sorted; see
/// [`sort_by_start`].
///
/// # Errors
/// Returns `ScheduleError::ParseError` if a selector fails to compile
/// (cannot happen for the built-in ones).
pub fn parse_schedule(html: &str, config: &ScheduleConfig) -> Result<Vec<Event>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse(ROW_SELECTOR)
        .map_err(|e| ScheduleError::ParseError(format!("Invalid selector: {e:?}")))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| ScheduleError::ParseError(format!("Invalid selector: {e:?}")))?;

    let mut events = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        match cells.first() {
            None => continue,
            Some(first) if first.inner_html().starts_with(SECTION_HEADER_MARKER) => continue,
            Some(_) => {}
        }
        let Some(cells) = RowCells::from_cells(&cells) else {
            continue;
        };
        events.push(extract_event(&cells, config));
    }
    tracing::debug!(count = events.len(), "extracted schedule events");
    Ok(events)
}

/// Extract one event from a bound row.
pub fn extract_event(cells: &RowCells<'_>, config: &ScheduleConfig) -> Event {
    let title_html = normalize(&cells.title.inner_html(), config);
    let pairs = split_links(&cells.title, &config.base_url);
    let (title_text, title_link) = pairs.into_iter().next().unwrap_or_default();
    let id = first_anchor_href(&cells.title).unwrap_or_default();

    let day_text = cells.day.text().collect::<String>();
    let date = if day_text == config.day_two_label {
        config.day_two
    } else {
        config.day_one
    };
    let mut start = date.and_time(NaiveTime::MIN);
    let mut end = start;
    if let Some(offset) = parse_clock_offset(&cells.start.text().collect::<String>()) {
        start += offset;
    }
    if let Some(offset) = parse_clock_offset(&cells.end.text().collect::<String>()) {
        end += offset;
    }

    Event {
        title_html,
        title_text,
        title_link,
        id,
        speakers_html: normalize(&cells.speakers.inner_html(), config),
        room_html: normalize(&cells.room.inner_html(), config),
        attachments_html: normalize(&cells.attachments.inner_html(), config),
        video_html: normalize(&cells.video.inner_html(), config),
        start,
        end,
    }
}

/// Parse a time-of-day offset cell of the shape `HH:MM`.
///
/// Only cells of exactly five characters are considered; everything else
/// (including a five-character cell that fails numeric parsing) leaves
/// the day baseline untouched.
pub fn parse_clock_offset(text: &str) -> Option<Duration> {
    if text.len() != 5 {
        return None;
    }
    let (hours, minutes) = text.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    Some(Duration::hours(hours) + Duration::minutes(minutes))
}

/// Stable ascending sort by start time.
///
/// Events sharing a start keep their input order; no secondary key.
pub fn sort_by_start(events: &mut [Event]) {
    events.sort_by_key(|event| event.start);
}

fn first_anchor_href(cell: &ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("a").ok()?;
    let anchor = cell.select(&selector).next()?;
    anchor.value().attr("href").map(str::to_string)
}

fn normalize(fragment: &str, config: &ScheduleConfig) -> String {
    if config.new_tab_links {
        absolutize_fragment_new_tab(fragment, &config.base_url)
    } else {
        absolutize_fragment(fragment, &config.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> ScheduleConfig {
        ScheduleConfig::default()
    }

    fn page(rows: &str) -> String {
        format!(
            "<html><body><div id=\"main\">\
             <table class=\"table table-striped table-bordered table-condensed\">\
             <tbody>{rows}</tbody></table></div></body></html>"
        )
    }

    fn event_row(title: &str, day: &str, start: &str, end: &str) -> String {
        format!(
            "<tr><td>{title}</td><td><a href=\"/speaker/s/\">S</a></td>\
             <td><a href=\"/room/r/\">R1</a></td>\
             <td>{day}</td><td>{start}</td><td>{end}</td><td></td><td></td></tr>"
        )
    }

    fn parse_one(row: &str) -> Event {
        let events = parse_schedule(&page(row), &config()).unwrap();
        assert_eq!(events.len(), 1);
        events.into_iter().next().unwrap()
    }

    fn day(date: (i32, u32, u32), h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_section_header_rows_are_skipped() {
        let rows = format!(
            "<tr><td colspan=\"8\"><h4>Sunday</h4></td></tr>{}",
            event_row("<a href=\"/e/\">E</a>", "Saturday", "10:00", "10:30")
        );
        let events = parse_schedule(&page(&rows), &config()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title_text, "E");
    }

    #[test]
    fn test_rows_without_eight_cells_are_skipped() {
        let rows = "<tr><td>just one cell</td></tr>";
        let events = parse_schedule(&page(rows), &config()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_day_marker_sunday() {
        let event = parse_one(&event_row("t", "Sunday", "09:00", "09:30"));
        assert_eq!(event.start, day((2021, 2, 7), 9, 0));
        assert_eq!(event.end, day((2021, 2, 7), 9, 30));
    }

    #[test]
    fn test_day_marker_saturday() {
        let event = parse_one(&event_row("t", "Saturday", "09:00", "09:30"));
        assert_eq!(event.start, day((2021, 2, 6), 9, 0));
    }

    #[test]
    fn test_unknown_day_marker_falls_back_to_day_one() {
        let event = parse_one(&event_row("t", "Monday??", "09:00", "09:30"));
        assert_eq!(event.start, day((2021, 2, 6), 9, 0));
    }

    #[test]
    fn test_empty_offset_leaves_midnight() {
        let event = parse_one(&event_row("t", "Saturday", "", ""));
        assert_eq!(event.start, day((2021, 2, 6), 0, 0));
        assert_eq!(event.end, event.start);
    }

    #[test]
    fn test_wrong_length_offset_is_ignored() {
        let event = parse_one(&event_row("t", "Saturday", "9:30", "10:30:00"));
        assert_eq!(event.start, day((2021, 2, 6), 0, 0));
        assert_eq!(event.end, day((2021, 2, 6), 0, 0));
    }

    #[test]
    fn test_malformed_end_stays_at_day_baseline() {
        let event = parse_one(&event_row("t", "Saturday", "11:00", "later"));
        assert_eq!(event.start, day((2021, 2, 6), 11, 0));
        assert_eq!(event.end, day((2021, 2, 6), 0, 0));
    }

    #[test]
    fn test_title_split_and_id() {
        let event = parse_one(&event_row(
            "<a href=\"/2021/schedule/event/intro/\">Welcome</a>",
            "Saturday",
            "10:00",
            "10:25",
        ));
        assert_eq!(event.title_text, "Welcome");
        assert_eq!(
            event.title_link,
            "https://fosdem.org/2021/schedule/event/intro/"
        );
        assert_eq!(event.id, "/2021/schedule/event/intro/");
        assert_eq!(
            event.title_html,
            "<a href=\"https://fosdem.org/2021/schedule/event/intro/\">Welcome</a>"
        );
    }

    #[test]
    fn test_title_without_link() {
        let event = parse_one(&event_row("Lunch break", "Saturday", "12:00", "13:00"));
        assert_eq!(event.title_html, "Lunch break");
        assert!(event.title_text.is_empty());
        assert!(event.title_link.is_empty());
        assert!(event.id.is_empty());
    }

    #[test]
    fn test_link_cells_are_normalized() {
        let event = parse_one(&event_row("t", "Saturday", "10:00", "10:30"));
        assert_eq!(
            event.speakers_html,
            "<a href=\"https://fosdem.org/speaker/s/\">S</a>"
        );
        assert_eq!(event.room_html, "<a href=\"https://fosdem.org/room/r/\">R1</a>");
    }

    #[test]
    fn test_new_tab_config_rewrites_links() {
        let config = ScheduleConfig {
            new_tab_links: true,
            ..ScheduleConfig::default()
        };
        let rows = event_row("t", "Saturday", "10:00", "10:30");
        let events = parse_schedule(&page(&rows), &config).unwrap();
        assert_eq!(
            events[0].speakers_html,
            "<a target=\"_blank\" href=\"https://fosdem.org/speaker/s/\">S</a>"
        );
    }

    // End-to-end scenario: one Sunday row with a relative title link.
    #[test]
    fn test_full_row_extraction() {
        let event = parse_one(&event_row(
            "<a href=\"/x\">Talk A</a>",
            "Sunday",
            "11:00",
            "11:30",
        ));
        assert_eq!(event.title_link, "https://fosdem.org/x");
        assert_eq!(event.start, day((2021, 2, 7), 11, 0));
        assert_eq!(event.end, day((2021, 2, 7), 11, 30));
    }

    #[test]
    fn test_parse_clock_offset_valid() {
        assert_eq!(
            parse_clock_offset("09:30"),
            Some(Duration::hours(9) + Duration::minutes(30))
        );
        assert_eq!(parse_clock_offset("00:00"), Some(Duration::zero()));
    }

    #[test]
    fn test_parse_clock_offset_length_gate() {
        assert_eq!(parse_clock_offset(""), None);
        assert_eq!(parse_clock_offset("9:30"), None);
        assert_eq!(parse_clock_offset("09:30:00"), None);
    }

    #[test]
    fn test_parse_clock_offset_malformed_five_chars() {
        assert_eq!(parse_clock_offset("ab:cd"), None);
        assert_eq!(parse_clock_offset("09-30"), None);
        assert_eq!(parse_clock_offset("1::34"), None);
    }

    #[test]
    fn test_sort_by_start_orders_events() {
        let rows = format!(
            "{}{}",
            event_row("<a href=\"/b\">B</a>", "Sunday", "09:00", "09:30"),
            event_row("<a href=\"/a\">A</a>", "Saturday", "15:00", "15:30"),
        );
        let mut events = parse_schedule(&page(&rows), &config()).unwrap();
        sort_by_start(&mut events);
        assert_eq!(events[0].title_text, "A");
        assert_eq!(events[1].title_text, "B");
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let rows = format!(
            "{}{}{}",
            event_row("<a href=\"/1\">first</a>", "Saturday", "10:00", "10:30"),
            event_row("<a href=\"/2\">second</a>", "Saturday", "10:00", "10:45"),
            event_row("<a href=\"/0\">earlier</a>", "Saturday", "09:00", "09:30"),
        );
        let mut events = parse_schedule(&page(&rows), &config()).unwrap();
        sort_by_start(&mut events);
        assert_eq!(events[0].title_text, "earlier");
        assert_eq!(events[1].title_text, "first");
        assert_eq!(events[2].title_text, "second");
    }

    #[test]
    fn test_parse_schedule_empty_document() {
        let events = parse_schedule("<html><body></body></html>", &config()).unwrap();
        assert!(events.is_empty());
    }
}
