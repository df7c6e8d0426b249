//! Link normalization for schedule cell fragments.
//!
//! The schedule page mixes relative links (talks, rooms, speakers) with
//! absolute ones (attachments). Fragments are rewritten so every embedded
//! link is absolute before they reach a renderer.

use scraper::{ElementRef, Selector};

/// Rewrite every relative `href` in a fragment to an absolute URL.
///
/// If the fragment contains `base_url` anywhere it is returned unchanged:
/// one absolute link is taken to mean all links in that fragment are
/// already absolute. Applying the function twice therefore yields the
/// same result as applying it once.
///
/// # Examples
/// ```
/// use fosdem_core::parser::absolutize_fragment;
///
/// let fragment = "<a href=\"/2021/schedule/event/foo/\">Foo</a>";
/// assert_eq!(
///     absolutize_fragment(fragment, "https://fosdem.org"),
///     "<a href=\"https://fosdem.org/2021/schedule/event/foo/\">Foo</a>"
/// );
/// ```
pub fn absolutize_fragment(fragment: &str, base_url: &str) -> String {
    if fragment.contains(base_url) {
        return fragment.to_string();
    }
    fragment.replace("href=\"", &format!("href=\"{base_url}"))
}

/// Variant of [`absolutize_fragment`] that also makes every link open in
/// a new browser tab.
pub fn absolutize_fragment_new_tab(fragment: &str, base_url: &str) -> String {
    if fragment.contains(base_url) {
        return fragment.replace("href=\"", "target=\"_blank\" href=\"");
    }
    fragment.replace("href=\"", &format!("target=\"_blank\" href=\"{base_url}"))
}

/// Collect the `(text, href)` pairs of all anchors under a cell, hrefs
/// absolutized with `base_url` unless they already contain it.
///
/// The first pair, if any, becomes the event's plain-text title and link.
pub fn split_links(cell: &ElementRef<'_>, base_url: &str) -> Vec<(String, String)> {
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };
    cell.select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let text = anchor.text().collect::<String>();
            let href = if href.contains(base_url) {
                href.to_string()
            } else {
                format!("{base_url}{href}")
            };
            Some((text, href))
        })
        .collect()
}
