//! Namespace-aware RSS decoding with iTunes podcast and MediaRSS support.
//!
//! [`decode`] turns the bytes of an RSS 2.0 document into a read-only
//! [`Feed`]. Elements are classified by namespace URI and local name, so
//! `image` means three different things depending on whether it is plain
//! RSS, `itunes:image` or a MediaRSS element.
//!
//! Accessors return [`FieldResult`]: a value, or a [`FieldError`] saying
//! the field is not populated or the feed doesn't use that extension.
//!
//! ```
//! use feedscope::FieldError;
//!
//! let feed = feedscope::decode(br#"<rss><channel><title>News</title></channel></rss>"#)?;
//! assert_eq!(feed.channel().title(), Ok("News"));
//! assert_eq!(feed.items().unwrap_err(), FieldError::NoItems);
//! assert_eq!(
//!     feed.channel().itunes().and_then(|itunes| itunes.author()),
//!     Err(FieldError::NotItunes)
//! );
//! # Ok::<(), feedscope::DecodeError>(())
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod util;
pub mod xml;

pub use config::DecodeOptions;
pub use error::{DecodeError, FieldError, FieldResult};
pub use feed::{decode, decode_with};
pub use model::{
    Channel, Enclosure, Feed, Guid, Image, Item, ItunesMeta, MediaChannelMeta, MediaItemMeta,
};
