use thiserror::Error;

// ============================================================================
// Decode Errors
// ============================================================================

/// Errors that abort a decode.
///
/// Only structural problems with the document end up here. Once the bytes
/// form a well-formed XML tree, field extraction never fails the decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte sequence is not well-formed XML.
    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// SEC-003: Element nesting exceeds the configured limit.
    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),

    /// Document exceeds the configured size limit.
    #[error("Document too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
}

impl DecodeError {
    pub(crate) fn xml(position: u64, message: impl Into<String>) -> Self {
        DecodeError::Xml {
            position,
            message: message.into(),
        }
    }
}

// ============================================================================
// Accessor Errors
// ============================================================================

/// Errors returned by the read accessors of the decoded model.
///
/// Namespace-gated accessors check the extension first and report
/// [`FieldError::NotItunes`] / [`FieldError::NotMediaRss`] before they ever
/// look at the field itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The owning channel or item carries no iTunes elements.
    #[error("Not an Itunes RSS Feed")]
    NotItunes,

    /// The owning channel or item carries no MediaRSS elements.
    #[error("Not a MediaRSS Feed")]
    NotMediaRss,

    /// The channel has no `item` elements.
    #[error("Feed contains no items")]
    NoItems,

    /// The field holds its zero value (absent, empty, or unparsable).
    #[error("{0} is not populated")]
    NotPopulated(&'static str),
}

impl FieldError {
    /// True for every "value is absent" error, as opposed to the
    /// namespace gates.
    pub fn is_not_populated(&self) -> bool {
        matches!(self, FieldError::NotPopulated(_) | FieldError::NoItems)
    }
}

/// Shorthand for the accessor layer.
pub type FieldResult<T> = Result<T, FieldError>;

/// Returns `value` unless it is empty.
pub(crate) fn non_empty<'a>(value: &'a str, field: &'static str) -> FieldResult<&'a str> {
    if value.is_empty() {
        Err(FieldError::NotPopulated(field))
    } else {
        Ok(value)
    }
}

/// Returns `value` unless it is zero.
pub(crate) fn non_zero<T>(value: T, field: &'static str) -> FieldResult<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        Err(FieldError::NotPopulated(field))
    } else {
        Ok(value)
    }
}

/// Returns `values` unless the slice is empty.
pub(crate) fn non_empty_slice<'a, T>(
    values: &'a [T],
    field: &'static str,
) -> FieldResult<&'a [T]> {
    if values.is_empty() {
        Err(FieldError::NotPopulated(field))
    } else {
        Ok(values)
    }
}
