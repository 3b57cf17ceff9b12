use std::fmt;

use tracing::debug;

use crate::codec::PercentCodec;
use crate::config::{Config, EncodingMode};
use crate::error::Result;
use crate::location::Location;
use crate::map::QueryMap;

/// A URL split into its parts, with its query string decoded into an
/// editable [`QueryMap`].
///
/// The location fields are copied from the host parser and are not kept in
/// sync with each other. `search` in particular is only a cache: it is
/// rebuilt from `query` by [`UrlRecord::update_search`] and
/// [`UrlRecord::to_url_string`].
///
/// ```
/// use urlqs::{Config, Location};
///
/// let current = Location::parse("http://example.com/search?q=old", None);
/// let mut record = Config::new().current_url(&current).unwrap();
///
/// record.query.insert("q", "new value");
/// record.query.insert("page", "2");
/// assert_eq!(
///     record.to_url_string(),
///     "http://example.com/search?q=new+value&page=2"
/// );
/// assert_eq!(record.search, "?q=new+value&page=2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlRecord {
    pub protocol: String,
    pub host: String,
    pub port: Option<u16>,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub hostname: String,
    pub href: String,
    pub origin: String,
    pub base_uri: String,
    pub hreflang: String,
    pub query: QueryMap,
    codec: PercentCodec,
}

impl UrlRecord {
    /// Builds a record from `url` if one is given and non-empty, otherwise
    /// from `current`.
    pub fn new(url: Option<&str>, current: &Location, config: Config) -> Result<Self> {
        match url.filter(|url| !url.is_empty()) {
            Some(url) => Self::parse(url, current, config),
            None => Self::from_location(current, config),
        }
    }

    /// Builds a record from `url`, resolved against `current` if relative.
    pub fn parse(url: &str, current: &Location, config: Config) -> Result<Self> {
        Self::build(Location::parse(url, Some(current)), config)
    }

    /// Builds a record from the current location.
    pub fn from_location(current: &Location, config: Config) -> Result<Self> {
        Self::build(current.clone(), config)
    }

    fn build(location: Location, config: Config) -> Result<Self> {
        let Location {
            protocol,
            host,
            port,
            pathname,
            search,
            hash,
            hostname,
            href,
            origin,
            base_uri,
            hreflang,
        } = location;

        let codec = config.codec();
        let raw_query = search.strip_prefix('?').unwrap_or(&search);
        let query = crate::de::parse(raw_query, &codec)?;
        debug!(%href, mode = ?codec.mode(), params = query.len(), "built url record");

        Ok(UrlRecord {
            protocol,
            host,
            port: port.filter(|&port| port != 0),
            pathname,
            search,
            hash,
            hostname,
            href,
            origin,
            base_uri,
            hreflang,
            query,
            codec,
        })
    }

    pub fn encoding(&self) -> EncodingMode {
        self.codec.mode()
    }

    pub fn codec(&self) -> &PercentCodec {
        &self.codec
    }

    /// Rebuilds `search` from `query`. The result always starts with `?`,
    /// even when there are no parameters.
    pub fn update_search(&mut self) -> &mut Self {
        self.search = self.render_search();
        self
    }

    /// Refreshes `search`, then assembles
    /// `protocol//host[:port]pathname search hash`.
    pub fn to_url_string(&mut self) -> String {
        self.update_search();
        self.assemble(&self.search)
    }

    fn render_search(&self) -> String {
        format!("?{}", crate::ser::serialize(&self.query, &self.codec))
    }

    fn assemble(&self, search: &str) -> String {
        let mut url = String::with_capacity(
            self.protocol.len()
                + self.host.len()
                + self.pathname.len()
                + search.len()
                + self.hash.len()
                + 8,
        );
        url.push_str(&self.protocol);
        url.push_str("//");
        url.push_str(&self.host);
        if let Some(port) = self.port.filter(|&port| port != 80) {
            let mut buffer = itoa::Buffer::new();
            let port = buffer.format(port);
            // `host` from the host parser already carries non-default ports
            let carried = self
                .host
                .strip_suffix(port)
                .is_some_and(|host| host.ends_with(':'));
            if !carried {
                url.push(':');
                url.push_str(port);
            }
        }
        url.push_str(&self.pathname);
        url.push_str(search);
        url.push_str(&self.hash);
        url
    }
}

/// Renders the same string as [`UrlRecord::to_url_string`] without
/// updating the cached `search`.
impl fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble(&self.render_search()))
    }
}
