use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use url::Url;

/// A URL already split into its named parts by the host URL parser.
///
/// Field names and formats follow the DOM `Location` interface: `protocol`
/// keeps its trailing `:`, `search` its leading `?` and `hash` its leading
/// `#`, and `host` includes the port when it is not the scheme's default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub protocol: String,
    pub host: String,
    /// Accepts the DOM's string form (`""` for the default port) as well
    /// as a number.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: Option<u16>,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub hostname: String,
    pub href: String,
    pub origin: String,
    #[serde(rename = "baseURI")]
    pub base_uri: String,
    pub hreflang: String,
}

impl Location {
    /// Parses `input`, resolving it against `base` when one is given.
    ///
    /// Input the host parser rejects yields a location with every field
    /// empty, the same as an anchor with an unusable `href`.
    ///
    /// ```
    /// use urlqs::Location;
    ///
    /// let current = Location::parse("https://example.com:8443/docs/index.html", None);
    /// assert_eq!(current.host, "example.com:8443");
    /// assert_eq!(current.port, Some(8443));
    ///
    /// let next = Location::parse("../api?v=2#top", Some(&current));
    /// assert_eq!(next.href, "https://example.com:8443/api?v=2#top");
    /// assert_eq!(next.search, "?v=2");
    /// assert_eq!(next.base_uri, current.href);
    /// ```
    pub fn parse(input: &str, base: Option<&Location>) -> Location {
        let base = base.filter(|base| !base.href.is_empty());
        let parsed = match base {
            Some(base) => Url::parse(&base.href).and_then(|base| base.join(input)),
            None => Url::parse(input),
        };

        match parsed {
            Ok(url) => {
                let mut location = Location::from(&url);
                if let Some(base) = base {
                    location.base_uri = base.href.clone();
                }
                location
            }
            Err(err) => {
                warn!(%err, input, "host parser rejected url");
                Location::default()
            }
        }
    }
}

struct PortVisitor;

impl<'de> Visitor<'de> for PortVisitor {
    type Value = Option<u16>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a port number, a numeric string or an empty string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match u16::try_from(v) {
            Ok(0) => Ok(None),
            Ok(port) => Ok(Some(port)),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(None);
        }
        match v.parse::<u16>() {
            Ok(port) => self.visit_u64(u64::from(port)),
            Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

fn deserialize_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    deserializer.deserialize_any(PortVisitor)
}

impl From<&Url> for Location {
    fn from(url: &Url) -> Self {
        let hostname = url.host_str().unwrap_or_default().to_owned();
        let host = match url.port() {
            Some(port) => format!("{hostname}:{port}"),
            None => hostname.clone(),
        };
        let search = match url.query() {
            Some(query) if !query.is_empty() => format!("?{query}"),
            _ => String::new(),
        };
        let hash = match url.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
            _ => String::new(),
        };

        Location {
            protocol: format!("{}:", url.scheme()),
            host,
            port: url.port(),
            pathname: url.path().to_owned(),
            search,
            hash,
            hostname,
            href: url.as_str().to_owned(),
            origin: url.origin().ascii_serialization(),
            base_uri: url.as_str().to_owned(),
            hreflang: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_absolute_url() {
        let location = Location::parse("http://user@Example.COM/a/b?x=1&y#frag", None);
        assert_eq!(location.protocol, "http:");
        assert_eq!(location.hostname, "example.com");
        assert_eq!(location.host, "example.com");
        assert_eq!(location.port, None);
        assert_eq!(location.pathname, "/a/b");
        assert_eq!(location.search, "?x=1&y");
        assert_eq!(location.hash, "#frag");
        assert_eq!(location.origin, "http://example.com");
    }

    #[test]
    fn default_port_is_absent() {
        let location = Location::parse("https://example.com:443/", None);
        assert_eq!(location.port, None);
        assert_eq!(location.host, "example.com");
    }

    #[test]
    fn empty_query_and_fragment_are_empty_strings() {
        let location = Location::parse("https://example.com/?#", None);
        assert_eq!(location.search, "");
        assert_eq!(location.hash, "");
    }

    #[test]
    fn rejected_input_is_empty() {
        assert_eq!(Location::parse("not a url", None), Location::default());
        assert_eq!(Location::parse("http://[::1", None), Location::default());
    }

    #[test]
    fn deserializes_dom_field_names() {
        let location: Location = serde_json::from_str(
            r#"{
                "protocol": "https:",
                "host": "example.com",
                "pathname": "/",
                "search": "?a=1",
                "baseURI": "https://example.com/"
            }"#,
        )
        .unwrap();
        assert_eq!(location.search, "?a=1");
        assert_eq!(location.base_uri, "https://example.com/");
        assert_eq!(location.port, None);
        assert_eq!(location.hash, "");
    }

    #[test]
    fn port_accepts_dom_strings_and_numbers() {
        let port = |json: &str| {
            serde_json::from_str::<Location>(&format!(r#"{{"port":{json}}}"#)).map(|l| l.port)
        };
        assert_eq!(port(r#""""#).unwrap(), None);
        assert_eq!(port(r#""0""#).unwrap(), None);
        assert_eq!(port(r#""8080""#).unwrap(), Some(8080));
        assert_eq!(port("8080").unwrap(), Some(8080));
        assert_eq!(port("0").unwrap(), None);
        assert_eq!(port("null").unwrap(), None);

        assert!(port(r#""http""#).is_err());
        assert!(port("70000").is_err());
        assert!(port("-1").is_err());
    }

    #[test]
    fn serialized_port_reads_back() {
        let location = Location::parse("http://example.com:8080/", None);
        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(serde_json::from_str::<Location>(&json).unwrap(), location);
    }
}
