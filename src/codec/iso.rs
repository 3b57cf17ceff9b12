//! Single-byte percent-encoding in the style of `escape`/`unescape`.
//!
//! Code points up to U+00FF are written as `%XX` against their Latin-1
//! value, so ISO-8859-1 consumers read them back byte for byte. Anything
//! above that is written as `%uXXXX`, one escape per UTF-16 code unit.

use std::convert::Infallible;

use super::utf8;
use crate::error::{Error, Result};
use crate::utils::{hex_digits, push_hex};

/// `escape` leaves these literal, and so do we, except for the ones the
/// correction pass then re-escapes.
fn is_unescaped(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '*' | '_' | '+' | '-' | '.' | '/')
}

/// Characters the base pass leaves literal which must match the UTF-8
/// scheme's output. Each is a single byte with the same value in both
/// schemes, which is the only reason this substitution is sound.
const CORRECTED: [char; 3] = ['*', '@', '/'];

/// Latin-1 counterpart of `encodeURIComponent`: the `escape` pass followed
/// by the `* @ /` correction. Spaces are percent-encoded, not turned into `+`.
///
/// ```
/// assert_eq!(urlqs::iso::encode_component("a b*@/"), "a%20b*%40%2F");
/// assert_eq!(urlqs::iso::encode_component("déjà vu"), "d%E9j%E0%20vu");
/// ```
pub fn encode_component(input: &str) -> String {
    match correct(escape(input), |c| Ok::<_, Infallible>(utf8::encode_component(c))) {
        Ok(encoded) => encoded,
        Err(never) => match never {},
    }
}

/// Inverse of [`encode_component`]. `+` is left as is.
///
/// ```
/// assert_eq!(urlqs::iso::decode_component("a%20b*%40%2F").unwrap(), "a b*@/");
/// assert_eq!(urlqs::iso::decode_component("1+1").unwrap(), "1+1");
/// assert!(urlqs::iso::decode_component("%E").is_err());
/// ```
pub fn decode_component(input: &str) -> Result<String> {
    correct(unescape(input)?, utf8::decode)
}

/// Replaces each literal occurrence of the corrected characters, in order,
/// with the UTF-8 primitive applied to that character.
fn correct<F, E>(mut s: String, mut complementary: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    for c in CORRECTED {
        if s.contains(c) {
            let mut buf = [0; 4];
            let replacement = complementary(c.encode_utf8(&mut buf))?;
            s = s.replace(c, &replacement);
        }
    }
    Ok(s)
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if is_unescaped(c) {
            escaped.push(c);
        } else if u32::from(c) <= 0xFF {
            escaped.push('%');
            push_hex(&mut escaped, u32::from(c), 2);
        } else {
            let mut units = [0; 2];
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str("%u");
                push_hex(&mut escaped, u32::from(*unit), 4);
            }
        }
    }
    escaped
}

/// Unlike `unescape`, a malformed escape is an error rather than being
/// passed through literally.
fn unescape(input: &str) -> Result<String> {
    if !input.contains('%') {
        return Ok(input.to_owned());
    }

    let bytes = input.as_bytes();
    let mut units: Vec<u16> = Vec::with_capacity(input.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let (unit, width) = if bytes.get(idx + 1) == Some(&b'u') {
                (hex_digits(bytes, idx + 2, 4), 6)
            } else {
                (hex_digits(bytes, idx + 1, 2), 3)
            };
            let unit = unit.ok_or(Error::malformed(idx))?;
            units.push(unit as u16);
            idx += width;
        } else {
            // only ever advanced past ASCII or whole chars, so `idx` is a
            // char boundary
            let Some(c) = input[idx..].chars().next() else {
                break;
            };
            let mut buf = [0; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
            idx += c.len_utf8();
        }
    }

    char::decode_utf16(units)
        .map(|unit| unit.map_err(|e| Error::InvalidCodeUnit(u32::from(e.unpaired_surrogate()))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_its_literal_set_alone() {
        assert_eq!(escape("aZ9@*_+-./"), "aZ9@*_+-./");
        assert_eq!(escape("a b"), "a%20b");
        assert_eq!(escape("é"), "%E9");
        assert_eq!(escape("€"), "%u20AC");
        assert_eq!(escape("🦀"), "%uD83E%uDD80");
    }

    #[test]
    fn encode_corrects_star_at_and_slash() {
        assert_eq!(encode_component("*@/"), "*%40%2F");
        assert_eq!(encode_component("a@b/c"), "a%40b%2Fc");
        // the rest of the literal set is not touched
        assert_eq!(encode_component("-_+."), "-_+.");
    }

    #[test]
    fn components_keep_space_and_plus_apart() {
        assert_eq!(encode_component("a b*@/"), "a%20b*%40%2F");
        assert_eq!(encode_component("1+1"), "1+1");
        assert_eq!(decode_component("a%20b+c").unwrap(), "a b+c");
    }

    #[test]
    fn decodes_latin1_and_wide_escapes() {
        assert_eq!(decode_component("caf%E9").unwrap(), "café");
        assert_eq!(decode_component("%u20AC%20%40").unwrap(), "€ @");
        assert_eq!(decode_component("%uD83E%uDD80").unwrap(), "🦀");
        assert_eq!(decode_component("déjà").unwrap(), "déjà");
    }

    #[test]
    fn rejects_malformed_escapes() {
        assert_eq!(decode_component("%").unwrap_err(), Error::malformed(0));
        assert_eq!(decode_component("ab%u12").unwrap_err(), Error::malformed(2));
        assert_eq!(decode_component("%G0").unwrap_err(), Error::malformed(0));
    }

    #[test]
    fn rejects_unpaired_surrogates() {
        assert_eq!(decode_component("%uD800").unwrap_err(), Error::InvalidCodeUnit(0xD800));
    }
}
