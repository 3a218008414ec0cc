use super::{Image, Item, ItunesMeta, MediaChannelMeta};
use crate::error::{non_empty, non_empty_slice, FieldError, FieldResult};

/// The single top-level `<channel>` of a feed.
///
/// `itunes` and `media` double as the namespace presence flags: they become
/// `Some` the first time an element of that namespace is seen and never go
/// back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) generator: String,
    pub(crate) description: String,
    pub(crate) language: String,
    pub(crate) copyright: String,
    pub(crate) categories: Vec<String>,
    pub(crate) image: Image,
    pub(crate) items: Vec<Item>,
    pub(crate) itunes: Option<ItunesMeta>,
    pub(crate) media: Option<MediaChannelMeta>,
}

impl Channel {
    pub fn title(&self) -> FieldResult<&str> {
        non_empty(&self.title, "Feed title")
    }

    pub fn link(&self) -> FieldResult<&str> {
        non_empty(&self.link, "Feed link")
    }

    pub fn generator(&self) -> FieldResult<&str> {
        non_empty(&self.generator, "Feed generator")
    }

    pub fn description(&self) -> FieldResult<&str> {
        non_empty(&self.description, "Feed description")
    }

    /// Language tag as written in the feed. Feeds are not consistent about
    /// the format, so expect `en`, `en-us`, `en_US` and worse.
    pub fn language(&self) -> FieldResult<&str> {
        non_empty(&self.language, "Feed language")
    }

    pub fn copyright(&self) -> FieldResult<&str> {
        non_empty(&self.copyright, "Feed copyright")
    }

    /// Plain RSS `<category>` values, in document order.
    pub fn categories(&self) -> FieldResult<&[String]> {
        non_empty_slice(&self.categories, "Feed categories")
    }

    /// The plain RSS `<image>` block.
    pub fn image(&self) -> FieldResult<&Image> {
        if self.image.has_url() {
            Ok(&self.image)
        } else {
            Err(FieldError::NotPopulated("Feed image"))
        }
    }

    pub fn items(&self) -> FieldResult<&[Item]> {
        if self.items.is_empty() {
            Err(FieldError::NoItems)
        } else {
            Ok(&self.items)
        }
    }

    pub fn is_itunes(&self) -> bool {
        self.itunes.is_some()
    }

    /// Channel-wide iTunes metadata, or [`FieldError::NotItunes`].
    pub fn itunes(&self) -> FieldResult<&ItunesMeta> {
        self.itunes.as_ref().ok_or(FieldError::NotItunes)
    }

    pub fn is_media_rss(&self) -> bool {
        self.media.is_some()
    }

    /// Channel-wide MediaRSS metadata, or [`FieldError::NotMediaRss`].
    pub fn media(&self) -> FieldResult<&MediaChannelMeta> {
        self.media.as_ref().ok_or(FieldError::NotMediaRss)
    }
}
