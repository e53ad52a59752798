pub mod cat;
pub mod cd;
pub mod cp;
pub mod echo;
pub mod exit;
pub mod grep;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod rm;
pub mod storage;
pub mod touch;

/// Strip one matching pair of surrounding quotes, if present.
pub(crate) fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"hello world\""), "hello world");
        assert_eq!(unquote("'f.txt'"), "f.txt");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\"half"), "\"half");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"'mixed\"'"), "\"'mixed\"'");
    }
}
