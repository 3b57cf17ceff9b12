//! Percent-encoding of individual query keys and values.

pub mod iso;
mod utf8;

use crate::config::EncodingMode;
use crate::error::Result;
use crate::utils::replace_char;

/// Encodes and decodes single query-string components.
///
/// The scheme is chosen once, when the codec is built, and never changes
/// afterwards. Both schemes use the query-string convention of writing a
/// space as `+`.
///
/// ```
/// use urlqs::{EncodingMode, PercentCodec};
///
/// let utf8 = PercentCodec::new(EncodingMode::Utf8);
/// assert_eq!(utf8.encode("crème brûlée"), "cr%C3%A8me+br%C3%BBl%C3%A9e");
///
/// let iso = PercentCodec::new(EncodingMode::Iso);
/// assert_eq!(iso.encode("crème brûlée"), "cr%E8me+br%FBl%E9e");
/// assert_eq!(iso.decode("cr%E8me+br%FBl%E9e").unwrap(), "crème brûlée");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PercentCodec {
    mode: EncodingMode,
}

impl PercentCodec {
    pub const fn new(mode: EncodingMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Turns spaces into `+`, then percent-encodes with the selected scheme.
    pub fn encode(&self, input: &str) -> String {
        let input = replace_char(input, ' ', '+');
        match self.mode {
            EncodingMode::Utf8 => utf8::encode(&input),
            EncodingMode::Iso => iso::encode_component(&input),
        }
    }

    /// Percent-decodes with the selected scheme, then turns every `+` into a
    /// space. That includes a `+` which was escaped as `%2B`.
    pub fn decode(&self, input: &str) -> Result<String> {
        let decoded = match self.mode {
            EncodingMode::Utf8 => utf8::decode(input)?,
            EncodingMode::Iso => iso::decode_component(input)?,
        };
        Ok(replace_char(&decoded, '+', ' ').into_owned())
    }
}
