use chrono::{DateTime, FixedOffset};

use super::extract::{self, RSS_ENCLOSURE};
use crate::model::{Channel, Item};
use crate::xml::Element;

/// `pubDate` layout after the weekday: `02 Jan 2006 15:04:05 -0700`.
const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Folds one un-namespaced channel child. `item` is handled by the walker,
/// not here.
pub(crate) fn reduce_channel(mut channel: Channel, el: &Element) -> Channel {
    match el.local_name() {
        "title" => channel.title = el.text(),
        "link" => channel.link = el.text(),
        "generator" => channel.generator = el.text(),
        "description" => channel.description = el.text(),
        "language" => channel.language = el.text(),
        "copyright" => channel.copyright = el.text(),
        "category" => channel.categories.push(el.text()),
        "image" => channel.image = extract::rss_image(channel.image, el),
        _ => {}
    }
    channel
}

/// Folds one un-namespaced item child.
pub(crate) fn reduce_item(mut item: Item, el: &Element) -> Item {
    match el.local_name() {
        "title" => item.title = el.text(),
        "link" => item.link = el.text(),
        "description" => item.description = el.text(),
        "pubDate" => {
            let raw = el.text();
            match parse_pub_date(&raw) {
                Some(date) => item.date = Some(date),
                None => tracing::trace!(value = %raw, "Skipping unparsable pubDate"),
            }
        }
        "enclosure" => {
            let previous = item.enclosure.take().unwrap_or_default();
            item.enclosure = Some(extract::enclosure(previous, el, &RSS_ENCLOSURE));
        }
        "guid" => item.guid = extract::guid(el),
        "category" => item.categories.push(el.text()),
        _ => {}
    }
    item
}

/// Parses `Mon, 02 Jan 2006 15:04:05 -0700`.
///
/// The weekday must be a day name but its value is not checked against the
/// date; feeds routinely carry the wrong one.
pub(crate) fn parse_pub_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let (weekday, rest) = raw.trim().split_once(", ")?;
    if !WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(weekday)) {
        return None;
    }
    DateTime::parse_from_str(rest, PUB_DATE_FORMAT).ok()
}
