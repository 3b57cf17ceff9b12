//! Parsing of raw query strings.

use tracing::trace;

use crate::codec::PercentCodec;
use crate::error::Result;
use crate::map::{QueryMap, QueryValue};

/// Parses a query string, without its leading `?`, using the default
/// [`Config`](crate::Config).
///
/// ```
/// use urlqs::QueryValue;
///
/// let map = urlqs::from_str("q=rust+lang&page=2&verbose").unwrap();
/// assert_eq!(map.get("q"), Some(&QueryValue::from("rust lang")));
/// assert_eq!(map.get("page"), Some(&QueryValue::from("2")));
/// assert_eq!(map.get("verbose"), Some(&QueryValue::Flag));
/// ```
pub fn from_str(query: &str) -> Result<QueryMap> {
    crate::Config::default().parse_query(query)
}

/// Splits `query` into `&`-separated segments and decodes each into a key
/// and value.
///
/// - empty segments are skipped
/// - a segment without `=`, or whose value decodes to nothing, becomes a
///   [`QueryValue::Flag`]
/// - only the text between the first and second `=` is the value
/// - a repeated key keeps its first position but takes the last value
///
/// The first segment that fails to decode aborts the parse.
pub fn parse(query: &str, codec: &PercentCodec) -> Result<QueryMap> {
    let mut map = QueryMap::new();
    if query.is_empty() {
        return Ok(map);
    }

    for segment in query.split('&').filter(|segment| !segment.is_empty()) {
        let mut parts = segment.split('=');
        let Some(raw_key) = parts.next() else {
            continue;
        };

        let key = codec.decode(raw_key)?;
        let value = match parts.next() {
            Some(raw_value) => codec.decode(raw_value)?,
            None => String::new(),
        };
        let value = QueryValue::from_decoded(value);

        trace!(%key, %value, "parsed query segment");
        if let Some(previous) = map.insert(key, value) {
            trace!(%previous, "overwrote repeated query key");
        }
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncodingMode;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn utf8() -> PercentCodec {
        PercentCodec::new(EncodingMode::Utf8)
    }

    fn pairs(map: &QueryMap) -> Vec<(&str, String)> {
        map.iter().map(|(k, v)| (k.as_str(), v.to_string())).collect()
    }

    #[test]
    fn empty_query_is_empty_map() {
        assert!(parse("", &utf8()).unwrap().is_empty());
        assert!(parse("&&", &utf8()).unwrap().is_empty());
    }

    #[test]
    fn simple_pairs() {
        let map = parse("a=1&b=2", &utf8()).unwrap();
        assert_eq!(pairs(&map), vec![("a", "1".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn bare_and_empty_values_are_flags() {
        let map = parse("flag&empty=&plus=+", &utf8()).unwrap();
        assert_eq!(map.get("flag"), Some(&QueryValue::Flag));
        assert_eq!(map.get("empty"), Some(&QueryValue::Flag));
        // a lone `+` decodes to a space, which is not empty
        assert_eq!(map.get("plus"), Some(&QueryValue::from(" ")));
    }

    #[test]
    fn last_occurrence_wins() {
        let map = parse("a=1&b=x&a=2", &utf8()).unwrap();
        assert_eq!(map.get("a"), Some(&QueryValue::from("2")));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn text_after_second_equals_is_dropped() {
        let map = parse("expr=a=b&eq==c", &utf8()).unwrap();
        assert_eq!(map.get("expr"), Some(&QueryValue::from("a")));
        assert_eq!(map.get("eq"), Some(&QueryValue::Flag));
    }

    #[test]
    fn keys_and_values_are_decoded() {
        let map = parse("first+name=J%C3%BCrgen&a%26b=c%3Dd", &utf8()).unwrap();
        assert_eq!(map.get("first name"), Some(&QueryValue::from("Jürgen")));
        assert_eq!(map.get("a&b"), Some(&QueryValue::from("c=d")));
    }

    #[test]
    fn iso_decoding() {
        let map = parse("name=J%FCrgen&sym=%u20AC", &PercentCodec::new(EncodingMode::Iso)).unwrap();
        assert_eq!(map.get("name"), Some(&QueryValue::from("Jürgen")));
        assert_eq!(map.get("sym"), Some(&QueryValue::from("€")));
    }

    #[test]
    fn first_malformed_segment_fails_the_parse() {
        assert_eq!(parse("ok=1&bad=%zz", &utf8()).unwrap_err(), Error::malformed(0));
        assert_eq!(parse("%=1", &utf8()).unwrap_err(), Error::malformed(0));
        // `%FC` alone is not UTF-8
        assert!(matches!(parse("name=J%FCrgen", &utf8()), Err(Error::Utf8(_))));
    }
}
