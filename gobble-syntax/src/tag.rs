//! Struct tag lookup following Go's `key:"value"` convention.

use crate::literal::unquote;

/// Look up `key` in a struct tag such as `json:"id" builder:"ignore"`.
///
/// Pairs are separated by spaces and values are interpreted string literals.
/// The first matching key wins; scanning stops at the first malformed pair,
/// mirroring `reflect.StructTag.Lookup`.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let name_len = bytes
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(bytes.len());
        if name_len == 0
            || name_len + 1 >= bytes.len()
            || bytes[name_len] != b':'
            || bytes[name_len + 1] != b'"'
        {
            return None;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        // Scan to the closing quote, skipping escaped characters.
        let bytes = rest.as_bytes();
        let mut end = 1;
        while end < bytes.len() && bytes[end] != b'"' {
            if bytes[end] == b'\\' {
                end += 1;
            }
            end += 1;
        }
        if end >= bytes.len() {
            return None;
        }
        let quoted = &rest[..=end];
        rest = &rest[end + 1..];

        if name == key {
            return unquote(quoted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_single_key() {
        assert_eq!(lookup(r#"builder:"ignore""#, "builder").as_deref(), Some("ignore"));
    }

    #[test]
    fn test_lookup_among_other_keys() {
        let tag = r#"json:"id,omitempty"  builder:"ignore" db:"user_id""#;
        assert_eq!(lookup(tag, "builder").as_deref(), Some("ignore"));
        assert_eq!(lookup(tag, "json").as_deref(), Some("id,omitempty"));
        assert_eq!(lookup(tag, "db").as_deref(), Some("user_id"));
        assert_eq!(lookup(tag, "yaml"), None);
    }

    #[test]
    fn test_lookup_empty_value() {
        assert_eq!(lookup(r#"builder:"""#, "builder").as_deref(), Some(""));
    }

    #[test]
    fn test_lookup_escaped_value() {
        assert_eq!(
            lookup(r#"doc:"say \"hi\"" builder:"ignore""#, "builder").as_deref(),
            Some("ignore")
        );
    }

    #[test]
    fn test_lookup_stops_at_malformed_pair() {
        assert_eq!(lookup(r#"json builder:"ignore""#, "builder"), None);
        assert_eq!(lookup(r#"builder:ignore"#, "builder"), None);
        assert_eq!(lookup(r#"builder:"ignore"#, "builder"), None);
    }
}
