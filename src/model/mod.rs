//! Read-only model of a decoded feed.
//!
//! Every accessor follows the same rule: a field holding its zero value
//! (empty string, zero number, unset date, empty list) is reported as
//! [`FieldError::NotPopulated`](crate::FieldError::NotPopulated). Extension
//! metadata sits behind a namespace gate that is checked first, so a feed
//! without iTunes elements answers [`FieldError::NotItunes`] for every
//! iTunes field, never "not populated".
//!
//! Values are only written while the decoder walks the document; nothing
//! here exposes a mutation API.

mod channel;
mod enclosure;
mod image;
mod item;
mod itunes;
mod media;

pub use channel::Channel;
pub use enclosure::{Enclosure, Guid};
pub use image::Image;
pub use item::Item;
pub use itunes::ItunesMeta;
pub use media::{MediaChannelMeta, MediaItemMeta};

use crate::error::FieldResult;

/// A decoded RSS document: exactly one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    channel: Channel,
}

impl Feed {
    pub(crate) fn new(channel: Channel) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// The channel's items, or [`FieldError::NoItems`](crate::FieldError::NoItems).
    pub fn items(&self) -> FieldResult<&[Item]> {
        self.channel.items()
    }

    pub fn into_channel(self) -> Channel {
        self.channel
    }
}
