use super::namespace::Namespace;
use super::{itunes, media, rss};
use crate::model::Item;
use crate::xml::Element;

/// Decodes one `<item>` element. `index` is its position in the channel.
pub(crate) fn walk_item(index: usize, node: &Element) -> Item {
    let mut item = Item::default();

    for child in node.child_elements() {
        match Namespace::of(child) {
            Namespace::Itunes => {
                let meta = item.itunes.take().unwrap_or_default();
                item.itunes = Some(itunes::reduce(meta, child));
            }
            Namespace::MediaRss => {
                let meta = item.media.take().unwrap_or_default();
                item.media = Some(media::reduce_item(meta, child));
            }
            Namespace::Rss => item = rss::reduce_item(item, child),
            Namespace::Other => {}
        }
    }

    tracing::trace!(
        index,
        itunes = item.is_itunes(),
        media_rss = item.is_media_rss(),
        "Decoded item"
    );
    item
}
