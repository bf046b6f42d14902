//! Write side of the property format.

use std::collections::HashMap;

/// Serialize a map as `key=value` lines, sorted by key.
///
/// No comment header is written. Output parses back to an equal map.
pub fn to_string(properties: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        out.push_str(&escape_key(key));
        out.push('=');
        out.push_str(&escape_value(&properties[key]));
        out.push('\n');
    }
    out
}

/// Keys must survive the read-side separator scan, so every separator and
/// comment-introducing character is escaped.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' | '=' | ':' | '#' | '!' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out
}

/// Values run to end of line, so only backslashes, line breaks and a leading
/// space need escaping; embedded spaces are written verbatim.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if i == 0 => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::parse;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_output_is_sorted_by_key() {
        let text = to_string(&map(&[("b", "2"), ("a", "1"), ("c", "3")]));
        assert_eq!(text, "a=1\nb=2\nc=3\n");
    }

    #[test]
    fn test_no_comment_header() {
        let text = to_string(&map(&[("k", "v")]));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_key_escaping() {
        let text = to_string(&map(&[("a key=1:2", "v")]));
        assert_eq!(text, "a\\ key\\=1\\:2=v\n");
    }

    #[test]
    fn test_value_leading_space_escaped_embedded_kept() {
        let text = to_string(&map(&[("k", " padded value")]));
        assert_eq!(text, "k=\\ padded value\n");
    }

    #[test]
    fn test_hostile_pairs_survive_write_then_parse() {
        let original = map(&[
            ("plain", "value"),
            ("spaced key", "has = signs : inside"),
            ("multi", "line one\nline two"),
            ("trailing\\slash", "back\\slash"),
            ("#commentish", "!bangish"),
        ]);
        let reparsed = parse(&to_string(&original)).unwrap();
        assert_eq!(reparsed, original);
    }
}
