pub fn straighten(c: char) -> Option<char> {
    match c {
        '\u{201c}' | '\u{201d}' => Some('\''),
        _ => None,
    }
}
