/// Quote `token` as a single POSIX shell word.
///
/// Callers reject NUL bytes before quoting; everything else fits inside
/// single quotes, with embedded quotes rendered as `'\''`.
pub(crate) fn quote(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_safe_char) {
        return token.to_owned();
    }
    format!("'{}'", token.replace('\'', r"'\''"))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '-' | '.' | '/' | ',' | ':' | '=' | '@' | '+' | '%')
}
