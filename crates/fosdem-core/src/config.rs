//! Schedule configuration constants.
//!
//! The scraped edition is fixed: FOSDEM 2021 ran online over the first
//! weekend of February, with all times given in WET. The values live in a
//! config struct so tests can point the scraper at arbitrary servers and
//! dates.

use chrono::NaiveDate;

/// Base URL used to absolutize relative links
pub const FOSDEM_BASE_URL: &str = "https://fosdem.org";

/// Path of the schedule events page, relative to the base URL
pub const SCHEDULE_PATH: &str = "/2021/schedule/events/";

/// Configuration for schedule extraction
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Prefix applied to relative `href` attributes
    pub base_url: String,
    /// Path of the schedule page, fetched relative to `base_url`
    pub schedule_path: String,
    /// Calendar date of the first conference day (Saturday)
    pub day_one: NaiveDate,
    /// Calendar date of the second conference day (Sunday)
    pub day_two: NaiveDate,
    /// Day-marker cell value selecting `day_two`; any other value falls
    /// back to `day_one`
    pub day_two_label: String,
    /// Timezone label shared by all timestamps (informational only, the
    /// timestamps themselves are naive local times)
    pub timezone: String,
    /// Rewrite links so they open in a new browser tab
    pub new_tab_links: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_url: FOSDEM_BASE_URL.to_string(),
            schedule_path: SCHEDULE_PATH.to_string(),
            day_one: NaiveDate::from_ymd_opt(2021, 2, 6).expect("valid date"),
            day_two: NaiveDate::from_ymd_opt(2021, 2, 7).expect("valid date"),
            day_two_label: "Sunday".to_string(),
            timezone: "WET".to_string(),
            new_tab_links: false,
        }
    }
}
