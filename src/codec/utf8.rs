use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::utils::hex_digits;

/// The set escaped by `encodeURIComponent`.
///
/// Everything except the ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Used for query keys and values, which have had their spaces turned into
/// `+` before they get here. Those `+` signs are left alone.
const QUERY_COMPONENT_SET: &AsciiSet = &URI_COMPONENT_SET.remove(b'+');

/// `encodeURIComponent`.
pub fn encode_component(input: &str) -> String {
    percent_encoding::utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

pub fn encode(input: &str) -> String {
    percent_encoding::utf8_percent_encode(input, QUERY_COMPONENT_SET).to_string()
}

/// `decodeURIComponent`: every `%` must start a two digit hex escape, and
/// the decoded bytes must be valid UTF-8.
pub fn decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    if !bytes.contains(&b'%') {
        return Ok(input.to_owned());
    }

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let byte = hex_digits(bytes, idx + 1, 2).ok_or(Error::malformed(idx))?;
            decoded.push(byte as u8);
            idx += 3;
        } else {
            decoded.push(bytes[idx]);
            idx += 1;
        }
    }

    Ok(String::from_utf8(decoded)?)
}
