use chrono::{DateTime, FixedOffset};

use super::{Enclosure, Guid, ItunesMeta, MediaItemMeta};
use crate::error::{non_empty, non_empty_slice, FieldError, FieldResult};

/// One `<item>` of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) date: Option<DateTime<FixedOffset>>,
    pub(crate) description: String,
    pub(crate) enclosure: Option<Enclosure>,
    pub(crate) guid: Guid,
    pub(crate) categories: Vec<String>,
    pub(crate) itunes: Option<ItunesMeta>,
    pub(crate) media: Option<MediaItemMeta>,
}

impl Item {
    pub fn title(&self) -> FieldResult<&str> {
        non_empty(&self.title, "Item title")
    }

    pub fn link(&self) -> FieldResult<&str> {
        non_empty(&self.link, "Item link")
    }

    /// Publication time from `pubDate`. Dates that don't match
    /// `Mon, 02 Jan 2006 15:04:05 -0700` are left unset.
    pub fn date(&self) -> FieldResult<DateTime<FixedOffset>> {
        self.date.ok_or(FieldError::NotPopulated("Item date"))
    }

    pub fn description(&self) -> FieldResult<&str> {
        non_empty(&self.description, "Item description")
    }

    /// Whether an `<enclosure>` element was present, populated or not.
    pub fn has_enclosure(&self) -> bool {
        self.enclosure.is_some()
    }

    pub fn enclosure(&self) -> FieldResult<&Enclosure> {
        self.enclosure
            .as_ref()
            .ok_or(FieldError::NotPopulated("Item enclosure"))
    }

    pub fn guid(&self) -> FieldResult<&Guid> {
        if self.guid.content.is_empty() {
            Err(FieldError::NotPopulated("Item GUID"))
        } else {
            Ok(&self.guid)
        }
    }

    pub fn categories(&self) -> FieldResult<&[String]> {
        non_empty_slice(&self.categories, "Item categories")
    }

    pub fn is_itunes(&self) -> bool {
        self.itunes.is_some()
    }

    /// iTunes metadata, or [`FieldError::NotItunes`] when the item has no
    /// iTunes elements.
    pub fn itunes(&self) -> FieldResult<&ItunesMeta> {
        self.itunes.as_ref().ok_or(FieldError::NotItunes)
    }

    pub fn is_media_rss(&self) -> bool {
        self.media.is_some()
    }

    /// MediaRSS metadata, or [`FieldError::NotMediaRss`] when the item has no
    /// MediaRSS elements.
    pub fn media(&self) -> FieldResult<&MediaItemMeta> {
        self.media.as_ref().ok_or(FieldError::NotMediaRss)
    }
}
