//! RSS decoding: from raw bytes to a read-only [`Feed`].
//!
//! The decoder makes one synchronous pass:
//!
//! - **Tree**: the bytes are parsed into a namespace-resolved element tree
//!   ([`crate::xml`]). This is the only step that can fail.
//! - **Channel walk**: the first `<channel>` under the root is located and
//!   each child is routed by namespace URI to a field classifier; `<item>`
//!   elements are set aside.
//! - **Item walk**: each recorded item is decoded the same way.
//!
//! # Architecture
//!
//! Classifiers are reducers, `(meta, &Element) -> meta`, one per namespace:
//!
//! - `rss` - plain RSS 2.0 fields (no namespace)
//! - `itunes` - `http://www.itunes.com/dtds/podcast-1.0.dtd`
//! - `media` - `http://search.yahoo.com/mrss/`
//!
//! Sub-values that don't parse (durations, sizes, dimensions, dates) degrade
//! to "absent" and are never reported to the caller.
//!
//! # Example
//!
//! ```
//! let feed = feedscope::decode(
//!     b"<rss><channel><title>T</title><item><title>I</title></item></channel></rss>",
//! )
//! .unwrap();
//!
//! assert_eq!(feed.channel().title(), Ok("T"));
//! assert_eq!(feed.items().unwrap()[0].title(), Ok("I"));
//! ```

mod channel;
mod duration;
mod extract;
mod item;
mod itunes;
mod media;
mod namespace;
mod rss;

pub use duration::parse_duration;
pub use namespace::{Namespace, ITUNES_NS, MEDIA_RSS_NS};

use crate::config::DecodeOptions;
use crate::error::DecodeError;
use crate::model::Feed;
use crate::xml::parse_document;

/// Decodes an RSS document with default [`DecodeOptions`].
///
/// # Errors
///
/// Returns [`DecodeError`] only when `data` is not well-formed XML (or
/// violates a configured limit). A well-formed document always decodes,
/// even if none of its fields are recognised.
pub fn decode(data: &[u8]) -> Result<Feed, DecodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decodes an RSS document.
///
/// The parsed tree lives only for the duration of this call and is dropped
/// on every path, including errors.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Feed, DecodeError> {
    let document = parse_document(data, options)?;
    let channel = channel::walk_channel(document.root());
    drop(document);

    tracing::debug!(
        items = channel.items.len(),
        itunes = channel.is_itunes(),
        media_rss = channel.is_media_rss(),
        "Decoded feed"
    );

    Ok(Feed::new(channel))
}
