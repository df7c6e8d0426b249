//! Static HTML page renderer.
//!
//! Reuses the stylesheet of the live schedule so the output looks like
//! the original page. Cell fragments arrive already link-normalized and
//! are embedded without further escaping. Events with an id get a
//! checkbox whose checked state persists in the browser's localStorage,
//! for ticking off watched talks.

use crate::types::Event;

const PAGE_HEADER: &str = r#"<!doctype html>
<html lang="en">
	<head>
		<meta charset="utf-8">
		<title>FOSDEM 2021 Schedule</title>
		<link media="all" rel="stylesheet" type="text/css" href="https://fosdem.org/2021/assets/style/fosdem-18736d187ceb9d8deb0e21312ca92ecbafa3786eabacf5c3a574d0f73c273843.css">
		<style>
			#main {
				max-width: 100%;
			}
		</style>
	</head>
	<body class="schedule-events">
		<div id="main">
			<table class="table table-striped table-bordered table-condensed">
"#;

const PAGE_FOOTER: &str = r#"			</table>
		</div>
		<script>
			document.querySelectorAll("input.watched").forEach(function (box) {
				var key = "watched:" + box.dataset.event;
				box.checked = localStorage.getItem(key) === "1";
				box.addEventListener("change", function () {
					if (box.checked) {
						localStorage.setItem(key, "1");
					} else {
						localStorage.removeItem(key);
					}
				});
			});
		</script>
	</body>
</html>
"#;

/// Render the whole schedule page, one table row per event.
pub fn render_page(events: &[Event]) -> String {
    let mut page = String::from(PAGE_HEADER);
    for event in events {
        page.push_str(&render_row(event));
    }
    page.push_str(PAGE_FOOTER);
    page
}

fn render_row(event: &Event) -> String {
    let checkbox = if event.id.is_empty() {
        String::new()
    } else {
        format!(
            "<input type=\"checkbox\" class=\"watched\" data-event=\"{}\">",
            event.id
        )
    };
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        event.time_range_html(),
        event.room_html,
        checkbox,
        event.title_html,
        event.attachments_html,
        event.speakers_html,
        event.video_html,
    )
}
