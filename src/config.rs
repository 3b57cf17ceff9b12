use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::codec::PercentCodec;
use crate::error::Result;
use crate::location::Location;
use crate::map::QueryMap;
use crate::record::UrlRecord;

/// Which percent-encoding scheme query keys and values use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Percent-encode the UTF-8 bytes, as `encodeURIComponent` does.
    #[default]
    Utf8,
    /// One `%XX` per Latin-1 code point, as `escape` does, for consumers
    /// expecting ISO-8859-1.
    Iso,
}

impl EncodingMode {
    pub const fn from_use_utf8(use_utf8: bool) -> Self {
        if use_utf8 {
            EncodingMode::Utf8
        } else {
            EncodingMode::Iso
        }
    }
}

/// Configuration for query-string parsing and serialization.
///
/// A `Config` is copied into every [`UrlRecord`] built from it, so it acts
/// as the default encoding for the records an application creates. Changing
/// a `Config` afterwards does not affect records that already exist.
///
/// Default value: `EncodingMode::Utf8`
///
/// ```
/// use urlqs::{Config, QueryValue};
///
/// let config = Config::new().use_utf8(false);
/// let map = config.parse_query("name=Zo%EB&admin").unwrap();
/// assert_eq!(map.get("name"), Some(&QueryValue::from("Zoë")));
/// assert_eq!(map.get("admin"), Some(&QueryValue::Flag));
///
/// assert_eq!(config.serialize_query(&map), "name=Zo%EB&admin=true");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    encoding: EncodingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            encoding: EncodingMode::Utf8,
        }
    }

    /// Selects the percent-encoding scheme.
    pub const fn encoding(mut self, encoding: EncodingMode) -> Self {
        self.encoding = encoding;
        self
    }

    /// `true` selects [`EncodingMode::Utf8`], `false` [`EncodingMode::Iso`].
    pub const fn use_utf8(self, use_utf8: bool) -> Self {
        self.encoding(EncodingMode::from_use_utf8(use_utf8))
    }

    pub const fn mode(&self) -> EncodingMode {
        self.encoding
    }

    pub const fn codec(&self) -> PercentCodec {
        PercentCodec::new(self.encoding)
    }

    /// Parses a query string (without the leading `?`) using this `Config`.
    pub fn parse_query(self, query: &str) -> Result<QueryMap> {
        crate::de::parse(query, &self.codec())
    }

    /// Serializes a map to a query string (without the leading `?`) using
    /// this `Config`.
    pub fn serialize_query(self, map: &QueryMap) -> String {
        crate::ser::serialize(map, &self.codec())
    }

    /// Serializes a map to a writer using this `Config`.
    pub fn serialize_to_writer<W: Write>(
        self,
        map: &QueryMap,
        writer: &mut W,
    ) -> std::io::Result<()> {
        crate::ser::serialize_to_writer(map, &self.codec(), writer)
    }

    /// Builds a record from `url`, resolved against `current` if relative.
    pub fn parse_url(self, url: &str, current: &Location) -> Result<UrlRecord> {
        UrlRecord::parse(url, current, self)
    }

    /// Builds a record from the current location.
    pub fn current_url(self, current: &Location) -> Result<UrlRecord> {
        UrlRecord::from_location(current, self)
    }
}
