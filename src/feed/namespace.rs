use crate::xml::Element;

/// iTunes podcast extension namespace URI.
pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// MediaRSS extension namespace URI.
pub const MEDIA_RSS_NS: &str = "http://search.yahoo.com/mrss/";

/// The namespaces the classifiers know how to route.
///
/// Matching is an exact string comparison on the resolved URI; the prefix
/// used in the document is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// No namespace: plain RSS 2.0 elements.
    Rss,
    Itunes,
    MediaRss,
    /// Anything else. Ignored entirely.
    Other,
}

impl Namespace {
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            "" => Namespace::Rss,
            ITUNES_NS => Namespace::Itunes,
            MEDIA_RSS_NS => Namespace::MediaRss,
            _ => Namespace::Other,
        }
    }

    pub fn of(element: &Element) -> Self {
        Self::from_uri(element.namespace())
    }
}
