use std::time::Duration;

use super::Image;
use crate::error::{non_empty, non_empty_slice, FieldError, FieldResult};

/// iTunes podcast metadata, shared by channels and items.
///
/// Only reachable through [`crate::Channel::itunes`] or
/// [`crate::Item::itunes`], which gate on the presence of the namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItunesMeta {
    pub(crate) author: String,
    pub(crate) subtitle: String,
    pub(crate) summary: String,
    pub(crate) explicit: String,
    pub(crate) keywords: String,
    pub(crate) duration: Option<Duration>,
    pub(crate) image: Image,
    pub(crate) categories: Vec<String>,
}

impl ItunesMeta {
    pub fn author(&self) -> FieldResult<&str> {
        non_empty(&self.author, "Itunes author")
    }

    pub fn subtitle(&self) -> FieldResult<&str> {
        non_empty(&self.subtitle, "Itunes subtitle")
    }

    pub fn summary(&self) -> FieldResult<&str> {
        non_empty(&self.summary, "Itunes summary")
    }

    /// Raw `itunes:explicit` text, e.g. `"yes"` or `"clean"`.
    pub fn explicit(&self) -> FieldResult<&str> {
        non_empty(&self.explicit, "Itunes explicit")
    }

    /// Interprets `itunes:explicit`.
    ///
    /// `yes`, `true` and `explicit` map to `true`; `no`, `false` and `clean`
    /// to `false` (case-insensitive). Anything else is "not populated".
    pub fn is_explicit(&self) -> FieldResult<bool> {
        match self.explicit.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "explicit" => Ok(true),
            "no" | "false" | "clean" => Ok(false),
            _ => Err(FieldError::NotPopulated("Itunes explicit")),
        }
    }

    /// Raw comma-separated `itunes:keywords` text.
    pub fn keywords(&self) -> FieldResult<&str> {
        non_empty(&self.keywords, "Itunes keywords")
    }

    /// Episode length. A zero duration is indistinguishable from an absent
    /// or unparsable one.
    pub fn duration(&self) -> FieldResult<Duration> {
        self.duration
            .filter(|d| !d.is_zero())
            .ok_or(FieldError::NotPopulated("Itunes duration"))
    }

    /// Artwork from `itunes:image`; only the URL is ever populated.
    pub fn image(&self) -> FieldResult<&Image> {
        if self.image.has_url() {
            Ok(&self.image)
        } else {
            Err(FieldError::NotPopulated("Itunes image"))
        }
    }

    /// `text` attributes of `itunes:category`, in document order.
    pub fn categories(&self) -> FieldResult<&[String]> {
        non_empty_slice(&self.categories, "Itunes categories")
    }
}
