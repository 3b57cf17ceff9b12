//! Serialization of query maps back into query strings.

use std::io::Write;

use crate::codec::PercentCodec;
use crate::map::{QueryMap, QueryValue};

/// Serializes a map into a query string, without a leading `?`, using the
/// default [`Config`](crate::Config).
///
/// ```
/// use urlqs::QueryMap;
///
/// let mut map = QueryMap::new();
/// map.insert("q", "rust lang");
/// map.insert_flag("verbose");
/// assert_eq!(urlqs::to_string(&map), "q=rust+lang&verbose=true");
/// ```
pub fn to_string(map: &QueryMap) -> String {
    crate::Config::default().serialize_query(map)
}

/// Serializes a map into a generic writer object.
///
/// ```
/// use urlqs::QueryMap;
///
/// let map: QueryMap = [("a", "1"), ("b", "2")].into_iter().collect();
/// let mut buffer = Vec::new();
/// urlqs::to_writer(&map, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "a=1&b=2");
/// ```
pub fn to_writer<W: Write>(map: &QueryMap, writer: &mut W) -> std::io::Result<()> {
    crate::Config::default().serialize_to_writer(map, writer)
}

/// Writes `key=value` for every entry, in map order, joined by `&`.
///
/// A [`QueryValue::Flag`] is written as `key=true`, so `?debug` does not
/// survive a parse/serialize round trip unchanged.
pub fn serialize(map: &QueryMap, codec: &PercentCodec) -> String {
    let mut output = String::with_capacity(map.len() * 16);
    for (idx, (key, value)) in map.iter().enumerate() {
        if idx > 0 {
            output.push('&');
        }
        output.push_str(&codec.encode(key));
        output.push('=');
        output.push_str(&encode_value(value, codec));
    }
    output
}

pub fn serialize_to_writer<W: Write>(
    map: &QueryMap,
    codec: &PercentCodec,
    writer: &mut W,
) -> std::io::Result<()> {
    for (idx, (key, value)) in map.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b"&")?;
        }
        writer.write_all(codec.encode(key).as_bytes())?;
        writer.write_all(b"=")?;
        writer.write_all(encode_value(value, codec).as_bytes())?;
    }
    Ok(())
}

fn encode_value(value: &QueryValue, codec: &PercentCodec) -> String {
    match value {
        QueryValue::Text(text) => codec.encode(text),
        QueryValue::Flag => codec.encode("true"),
    }
}
