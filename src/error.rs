use std::string::FromUtf8Error;

/// Errors raised while percent-decoding a query string.
///
/// Every variant is a decoding failure: the query-string codec has no other
/// failure modes. Parsing stops at the first malformed segment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A `%` that is not followed by a complete, hexadecimal escape.
    #[error("malformed percent-escape at byte {index}")]
    MalformedEscape { index: usize },

    /// The decoded bytes of a UTF-8 escape sequence are not valid UTF-8.
    #[error("percent-decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// A `%uXXXX` escape left an unpaired UTF-16 surrogate.
    #[error("escape decodes to unpaired surrogate U+{0:04X}")]
    InvalidCodeUnit(u32),
}

impl Error {
    pub(crate) fn malformed(index: usize) -> Self {
        Error::MalformedEscape { index }
    }

    /// Every error this crate produces originates from percent-decoding.
    pub fn is_decoding(&self) -> bool {
        matches!(
            self,
            Error::MalformedEscape { .. } | Error::Utf8(_) | Error::InvalidCodeUnit(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
