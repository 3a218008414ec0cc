use std::collections::BTreeMap;

use super::{Enclosure, Image};
use crate::error::{non_empty, non_empty_slice, FieldError, FieldResult};

/// Channel-level MediaRSS metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaChannelMeta {
    pub(crate) rating: String,
    pub(crate) copyright: String,
    pub(crate) thumbnail: Image,
    pub(crate) keywords: Vec<String>,
    pub(crate) categories: Vec<String>,
}

impl MediaChannelMeta {
    /// Age rating, e.g. `adult` or `nonadult`.
    pub fn rating(&self) -> FieldResult<&str> {
        non_empty(&self.rating, "MediaRSS feed rating")
    }

    pub fn copyright(&self) -> FieldResult<&str> {
        non_empty(&self.copyright, "MediaRSS feed copyright")
    }

    pub fn thumbnail(&self) -> FieldResult<&Image> {
        if self.thumbnail.has_url() {
            Ok(&self.thumbnail)
        } else {
            Err(FieldError::NotPopulated("MediaRSS thumbnail"))
        }
    }

    /// `media:keywords`, split on `", "`.
    pub fn keywords(&self) -> FieldResult<&[String]> {
        non_empty_slice(&self.keywords, "MediaRSS feed keywords")
    }

    /// Every `media:category`, in document order.
    pub fn categories(&self) -> FieldResult<&[String]> {
        non_empty_slice(&self.categories, "MediaRSS feed categories")
    }
}

/// Item-level MediaRSS metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaItemMeta {
    pub(crate) content: Enclosure,
    pub(crate) credits: BTreeMap<String, String>,
    pub(crate) thumbnail: Image,
}

impl MediaItemMeta {
    /// The `media:content` payload.
    pub fn content(&self) -> FieldResult<&Enclosure> {
        if self.content == Enclosure::default() {
            Err(FieldError::NotPopulated("MediaRSS content"))
        } else {
            Ok(&self.content)
        }
    }

    /// Role → credited name, from `media:credit` elements carrying a `role`.
    pub fn credits(&self) -> FieldResult<&BTreeMap<String, String>> {
        if self.credits.is_empty() {
            Err(FieldError::NotPopulated("MediaRSS credits"))
        } else {
            Ok(&self.credits)
        }
    }

    pub fn credit(&self, role: &str) -> FieldResult<&str> {
        self.credits
            .get(role)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(FieldError::NotPopulated("MediaRSS credit"))
    }

    pub fn thumbnail(&self) -> FieldResult<&Image> {
        if self.thumbnail.has_url() {
            Ok(&self.thumbnail)
        } else {
            Err(FieldError::NotPopulated("MediaRSS thumbnail"))
        }
    }
}
