// ANSI escape sequence stripping

/// Remove ANSI escape sequences from a string. Covers CSI sequences
/// (terminated by an ASCII letter), OSC sequences (terminated by BEL
/// or ESC `\`) and single-character escapes.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            result.push(ch);
            continue;
        }
        if chars.peek() == Some(&']') {
            // OSC payload runs to BEL or the ESC-backslash terminator.
            chars.next();
            while let Some(ch) = chars.next() {
                if ch == '\x07' {
                    break;
                }
                if ch == '\x1b' {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        } else {
            while let Some(ch) = chars.next() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }
    result
}
