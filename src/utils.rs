use std::borrow::Cow;

/// Replaces every `from` with `to`, borrowing the input when there is
/// nothing to replace.
pub fn replace_char(input: &str, from: char, to: char) -> Cow<'_, str> {
    match input.find(from) {
        None => Cow::Borrowed(input),
        Some(first_position) => {
            let mut replaced = String::with_capacity(input.len());
            replaced.push_str(&input[..first_position]);
            replaced.extend(
                input[first_position..]
                    .chars()
                    .map(|c| if c == from { to } else { c }),
            );
            Cow::Owned(replaced)
        }
    }
}

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u32> {
    char::from(c).to_digit(16)
}

/// Reads `count` hex digits starting at `at`.
pub fn hex_digits(bytes: &[u8], at: usize, count: usize) -> Option<u32> {
    let digits = bytes.get(at..at + count)?;
    digits
        .iter()
        .try_fold(0u32, |acc, &b| Some(acc * 0x10 + char_to_digit(b)?))
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Pushes `value` as `width` uppercase hex digits.
pub fn push_hex(out: &mut String, value: u32, width: u32) {
    for shift in (0..width).rev() {
        let nibble = (value >> (shift * 4)) & 0xF;
        out.push(char::from(HEX_UPPER[nibble as usize]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_char_borrows_when_untouched() {
        assert!(matches!(replace_char("abc", ' ', '+'), Cow::Borrowed("abc")));
        assert_eq!(replace_char("a b  c", ' ', '+'), "a+b++c");
        assert_eq!(replace_char("é é", ' ', '+'), "é+é");
    }

    #[test]
    fn hex_digits_rejects_short_or_invalid_input() {
        assert_eq!(hex_digits(b"%2F", 1, 2), Some(0x2F));
        assert_eq!(hex_digits(b"%u20ac", 2, 4), Some(0x20AC));
        assert_eq!(hex_digits(b"%2", 1, 2), None);
        assert_eq!(hex_digits(b"%zz", 1, 2), None);
    }

    #[test]
    fn push_hex_pads() {
        let mut out = String::new();
        push_hex(&mut out, 0x9, 2);
        push_hex(&mut out, 0x20AC, 4);
        assert_eq!(out, "0920AC");
    }
}
