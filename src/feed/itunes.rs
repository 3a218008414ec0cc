use super::duration::parse_duration;
use super::extract;
use crate::model::ItunesMeta;
use crate::xml::Element;

/// Folds one iTunes-namespace element into `meta`.
///
/// Used for both channel and item children. Unknown tags return `meta`
/// unchanged.
pub(crate) fn reduce(mut meta: ItunesMeta, el: &Element) -> ItunesMeta {
    match el.local_name() {
        "subtitle" => meta.subtitle = el.text(),
        "author" => meta.author = el.text(),
        "summary" => meta.summary = el.text(),
        "explicit" => meta.explicit = el.text(),
        "keywords" => meta.keywords = el.text(),
        "duration" => {
            let raw = el.text();
            match parse_duration(&raw) {
                Some(duration) => meta.duration = Some(duration),
                None => tracing::trace!(value = %raw, "Skipping unparsable itunes:duration"),
            }
        }
        "image" => meta.image = extract::itunes_image(meta.image, el),
        "category" => {
            if let Some(text) = el.attribute("text") {
                meta.categories.push(text.to_string());
            }
        }
        _ => {}
    }
    meta
}
