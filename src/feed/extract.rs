//! Attribute-driven sub-objects shared by channel and item classifiers.
//!
//! Numeric attributes that fail to parse become 0 rather than leaving the
//! previous value in place; an attribute that is absent leaves the field
//! alone.

use crate::model::{Enclosure, Guid, Image};
use crate::xml::Element;

/// Attribute names for the three enclosure fields. RSS `<enclosure>` and
/// `media:content` spell the size differently.
pub(crate) struct EnclosureAttrs {
    pub url: &'static str,
    pub media_type: &'static str,
    pub size: &'static str,
}

pub(crate) const RSS_ENCLOSURE: EnclosureAttrs = EnclosureAttrs {
    url: "url",
    media_type: "type",
    size: "length",
};

pub(crate) const MEDIA_CONTENT: EnclosureAttrs = EnclosureAttrs {
    url: "url",
    media_type: "type",
    size: "fileSize",
};

pub(crate) fn enclosure(mut enclosure: Enclosure, el: &Element, attrs: &EnclosureAttrs) -> Enclosure {
    if let Some(url) = el.attribute(attrs.url) {
        enclosure.url = url.to_string();
    }
    if let Some(media_type) = el.attribute(attrs.media_type) {
        enclosure.media_type = media_type.to_string();
    }
    if let Some(size) = el.attribute(attrs.size) {
        enclosure.size = parse_size(size);
    }
    enclosure
}

/// `media:thumbnail`: `url`, `width` and `height` attributes.
pub(crate) fn thumbnail(mut image: Image, el: &Element) -> Image {
    if let Some(url) = el.attribute("url") {
        image.url = url.to_string();
    }
    if let Some(width) = el.attribute("width") {
        image.width = parse_dimension(width);
    }
    if let Some(height) = el.attribute("height") {
        image.height = parse_dimension(height);
    }
    image
}

/// `itunes:image`: the artwork URL lives in `href`, never in text content.
pub(crate) fn itunes_image(mut image: Image, el: &Element) -> Image {
    if let Some(href) = el.attribute("href") {
        image.url = href.to_string();
    }
    image
}

/// Plain RSS `<image>`: nested `url`, `title`, `link`, `width`, `height`.
pub(crate) fn rss_image(mut image: Image, el: &Element) -> Image {
    for child in el.child_elements().filter(|c| c.namespace().is_empty()) {
        match child.local_name() {
            "url" => image.url = child.text(),
            "title" => image.title = child.text(),
            "link" => image.link = child.text(),
            "width" => image.width = parse_dimension(&child.text()),
            "height" => image.height = parse_dimension(&child.text()),
            _ => {}
        }
    }
    image
}

/// `media:credit`: `role` attribute → text content. Credits without a role
/// are dropped.
pub(crate) fn credit(el: &Element) -> Option<(String, String)> {
    el.attribute("role")
        .map(|role| (role.to_string(), el.text()))
}

pub(crate) fn guid(el: &Element) -> Guid {
    Guid {
        content: el.text(),
        is_permalink: el
            .attribute("isPermaLink")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
    }
}

fn parse_size(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::trace!(value = raw, "Unparsable size, using 0");
        0
    })
}

fn parse_dimension(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::trace!(value = raw, "Unparsable dimension, using 0");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodeOptions;
    use crate::xml::parse_document;

    fn element(xml: &str) -> Element {
        parse_document(xml.as_bytes(), &DecodeOptions::default())
            .expect("test fixture should be well-formed")
            .root()
            .clone()
    }

    #[test]
    fn test_rss_enclosure_with_bad_length_defaults_to_zero() {
        let el = element(r#"<enclosure url="https://e.com/a.mp3" type="audio/mpeg" length="not-a-number"/>"#);
        let enc = enclosure(Enclosure::default(), &el, &RSS_ENCLOSURE);
        assert_eq!(enc.url, "https://e.com/a.mp3");
        assert_eq!(enc.media_type, "audio/mpeg");
        assert_eq!(enc.size, 0);
    }

    #[test]
    fn test_media_content_reads_file_size() {
        let el = element(r#"<content url="https://e.com/v.mp4" type="video/mp4" fileSize="1048576" length="9"/>"#);
        let enc = enclosure(Enclosure::default(), &el, &MEDIA_CONTENT);
        assert_eq!(enc.media_type, "video/mp4");
        assert_eq!(enc.size, 1_048_576);
    }

    #[test]
    fn test_bad_size_overwrites_previous_value() {
        let previous = Enclosure {
            size: 42,
            ..Enclosure::default()
        };
        let el = element(r#"<enclosure length="-1"/>"#);
        assert_eq!(enclosure(previous, &el, &RSS_ENCLOSURE).size, 0);
    }

    #[test]
    fn test_thumbnail_dimensions() {
        let el = element(r#"<thumbnail url="https://e.com/t.jpg" width="1280" height="tall"/>"#);
        let image = thumbnail(Image::default(), &el);
        assert_eq!(image.url, "https://e.com/t.jpg");
        assert_eq!(image.width, 1280);
        assert_eq!(image.height, 0);
    }

    #[test]
    fn test_itunes_image_ignores_text() {
        let el = element(r#"<image href="https://e.com/art.png">https://e.com/ignored.png</image>"#);
        assert_eq!(itunes_image(Image::default(), &el).url, "https://e.com/art.png");

        let bare = element("<image>https://e.com/ignored.png</image>");
        assert_eq!(itunes_image(Image::default(), &bare).url, "");
    }

    #[test]
    fn test_rss_image_block() {
        let el = element(
            "<image><url>https://e.com/logo.png</url><title>Logo</title>\
             <link>https://e.com</link><width>88</width><height>31</height></image>",
        );
        let image = rss_image(Image::default(), &el);
        assert_eq!(
            image,
            Image {
                title: "Logo".to_string(),
                url: "https://e.com/logo.png".to_string(),
                link: "https://e.com".to_string(),
                width: 88,
                height: 31,
            }
        );
    }

    #[test]
    fn test_credit_requires_role() {
        let with_role = element(r#"<credit role="photographer">Jane</credit>"#);
        assert_eq!(
            credit(&with_role),
            Some(("photographer".to_string(), "Jane".to_string()))
        );
        assert_eq!(credit(&element("<credit>Anonymous</credit>")), None);
    }

    #[test]
    fn test_guid_permalink() {
        let g = guid(&element(r#"<guid isPermaLink="TRUE">https://e.com/1</guid>"#));
        assert_eq!(g.content, "https://e.com/1");
        assert!(g.is_permalink);

        let g = guid(&element("<guid>abc-123</guid>"));
        assert!(!g.is_permalink);
    }
}
