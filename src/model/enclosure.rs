use crate::error::{non_empty, non_zero, FieldResult};

/// An attached media payload: an RSS `<enclosure>` or a `media:content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enclosure {
    pub(crate) url: String,
    pub(crate) media_type: String,
    pub(crate) size: u64,
}

impl Enclosure {
    pub fn url(&self) -> FieldResult<&str> {
        non_empty(&self.url, "Enclosure URL")
    }

    /// MIME type, e.g. `audio/mpeg`.
    pub fn media_type(&self) -> FieldResult<&str> {
        non_empty(&self.media_type, "Enclosure media type")
    }

    /// Payload size in bytes. Unparsable sizes decode as 0 and report
    /// "not populated".
    pub fn size(&self) -> FieldResult<u64> {
        non_zero(self.size, "Enclosure size")
    }
}

/// An item's `<guid>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guid {
    pub(crate) content: String,
    pub(crate) is_permalink: bool,
}

impl Guid {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Value of the `isPermaLink` attribute.
    ///
    /// False when the attribute is absent. RSS 2.0 defaults it to true, but
    /// only an explicit `isPermaLink="true"` is reported here.
    pub fn is_permalink(&self) -> bool {
        self.is_permalink
    }
}
