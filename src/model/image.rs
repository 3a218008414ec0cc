use crate::error::{non_empty, non_zero, FieldResult};

/// An image reference: an RSS `<image>`, an `itunes:image` or a
/// `media:thumbnail`.
///
/// Empty strings and zero dimensions mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) link: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Image {
    pub fn title(&self) -> FieldResult<&str> {
        non_empty(&self.title, "Image title")
    }

    /// Location of the image itself.
    pub fn url(&self) -> FieldResult<&str> {
        non_empty(&self.url, "Image URL")
    }

    /// Where the image links to.
    pub fn link(&self) -> FieldResult<&str> {
        non_empty(&self.link, "Image link")
    }

    /// Width in pixels.
    pub fn width(&self) -> FieldResult<u32> {
        non_zero(self.width, "Image width")
    }

    /// Height in pixels.
    pub fn height(&self) -> FieldResult<u32> {
        non_zero(self.height, "Image height")
    }

    /// An image without a URL is treated as absent by its owner.
    pub(crate) fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}
