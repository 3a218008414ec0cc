use super::item::walk_item;
use super::namespace::Namespace;
use super::{itunes, media, rss};
use crate::model::Channel;
use crate::xml::Element;

/// Finds the `<channel>` under the document root and decodes it.
///
/// Only the first `channel` child counts. A root without one yields an
/// empty channel.
pub(crate) fn walk_channel(root: &Element) -> Channel {
    match root.child_elements().find(|el| el.local_name() == "channel") {
        Some(node) => decode_channel(node),
        None => {
            tracing::debug!(root = root.local_name(), "Document has no channel element");
            Channel::default()
        }
    }
}

fn decode_channel(node: &Element) -> Channel {
    let mut channel = Channel::default();
    let mut item_nodes: Vec<&Element> = Vec::new();

    for child in node.child_elements() {
        match Namespace::of(child) {
            Namespace::Itunes => {
                let meta = channel.itunes.take().unwrap_or_default();
                channel.itunes = Some(itunes::reduce(meta, child));
            }
            Namespace::MediaRss => {
                let meta = channel.media.take().unwrap_or_default();
                channel.media = Some(media::reduce_channel(meta, child));
            }
            Namespace::Rss if child.local_name() == "item" => item_nodes.push(child),
            Namespace::Rss => channel = rss::reduce_channel(channel, child),
            Namespace::Other => {}
        }
    }

    channel.items = item_nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| walk_item(index, node))
        .collect();
    channel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodeOptions;
    use crate::xml::parse_document;

    fn walk(xml: &str) -> Channel {
        let doc = parse_document(xml.as_bytes(), &DecodeOptions::default()).unwrap();
        walk_channel(doc.root())
    }

    #[test]
    fn test_first_channel_wins() {
        let channel = walk(
            "<rss><channel><title>One</title></channel>\
             <channel><title>Two</title></channel></rss>",
        );
        assert_eq!(channel.title, "One");
    }

    #[test]
    fn test_missing_channel_is_empty() {
        assert_eq!(walk("<rss><foo/></rss>"), Channel::default());
    }

    #[test]
    fn test_image_tag_routed_by_namespace() {
        let channel = walk(
            r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"
                    xmlns:media="http://search.yahoo.com/mrss/">
                 <channel>
                   <image><url>https://e.com/rss.png</url></image>
                   <itunes:image href="https://e.com/itunes.png"/>
                   <media:thumbnail url="https://e.com/media.png"/>
                 </channel>
               </rss>"#,
        );
        assert_eq!(channel.image.url, "https://e.com/rss.png");
        assert_eq!(
            channel.itunes.as_ref().map(|m| m.image.url.as_str()),
            Some("https://e.com/itunes.png")
        );
        assert_eq!(
            channel.media.as_ref().map(|m| m.thumbnail.url.as_str()),
            Some("https://e.com/media.png")
        );
    }

    #[test]
    fn test_presence_flag_set_even_when_field_unrecognised() {
        let channel = walk(
            r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
                 <channel><itunes:block>yes</itunes:block></channel>
               </rss>"#,
        );
        assert!(channel.is_itunes());
        assert!(!channel.is_media_rss());
    }

    #[test]
    fn test_unknown_namespace_ignored() {
        let channel = walk(
            r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/">
                 <channel><dc:title>Nope</dc:title><title>Yes</title></channel>
               </rss>"#,
        );
        assert_eq!(channel.title, "Yes");
    }

    #[test]
    fn test_categories_keep_order() {
        let channel = walk(
            "<rss><channel><category>b</category><category>a</category></channel></rss>",
        );
        assert_eq!(channel.categories, vec!["b", "a"]);
    }
}
