/// Percent-encodes `s` the way browsers encode a single URI component:
/// everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped as UTF-8 bytes.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            }
        }
    }
    out
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

#[cfg(test)]
mod tests {
    use super::encode_component;

    #[test]
    fn escapes_spaces_and_reserved() {
        assert_eq!(encode_component("Computer Network"), "Computer%20Network");
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(encode_component("notes_v1-(final).pdf"), "notes_v1-(final).pdf");
    }

    #[test]
    fn escapes_multibyte() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
