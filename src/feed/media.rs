use super::extract::{self, MEDIA_CONTENT};
use crate::model::{MediaChannelMeta, MediaItemMeta};
use crate::xml::Element;

const KEYWORD_SEPARATOR: &str = ", ";

/// Folds one MediaRSS element found directly under `<channel>`.
pub(crate) fn reduce_channel(mut meta: MediaChannelMeta, el: &Element) -> MediaChannelMeta {
    match el.local_name() {
        "rating" => meta.rating = el.text(),
        "copyright" => meta.copyright = el.text(),
        "thumbnail" => meta.thumbnail = extract::thumbnail(meta.thumbnail, el),
        "keywords" => meta.keywords = split_keywords(&el.text()),
        "category" => meta.categories.push(el.text()),
        _ => {}
    }
    meta
}

/// Splits on the literal separator. Empty text has no keywords, but empty
/// fragments between separators are kept.
fn split_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(KEYWORD_SEPARATOR).map(str::to_string).collect()
}

/// Folds one MediaRSS element found directly under an `<item>`.
pub(crate) fn reduce_item(mut meta: MediaItemMeta, el: &Element) -> MediaItemMeta {
    match el.local_name() {
        "content" => meta.content = extract::enclosure(meta.content, el, &MEDIA_CONTENT),
        "thumbnail" => meta.thumbnail = extract::thumbnail(meta.thumbnail, el),
        // MediaRSS names the element `credit`; some feeds write `credits`
        "credit" | "credits" => {
            if let Some((role, name)) = extract::credit(el) {
                meta.credits.insert(role, name);
            }
        }
        _ => {}
    }
    meta
}
