/// Percent-encode `input` the way `encodeURIComponent` does
///
/// Unreserved characters `A-Z a-z 0-9 - _ . ! ~ * ' ( )` pass through; every
/// other UTF-8 byte becomes `%XX` with upper-case hex digits.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_and_reserved() {
        assert_eq!(encode_uri_component("123 Main St"), "123%20Main%20St");
        assert_eq!(encode_uri_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's (ok)!*~".replace(' ', "%20"));
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("東京"), "%E6%9D%B1%E4%BA%AC");
    }
}
