//! Read side of the property format.

use crate::error::StoreError;
use std::collections::HashMap;

/// Parse property-file text into a key/value map.
///
/// Later occurrences of a key overwrite earlier ones. The only hard failure
/// is a malformed `\uXXXX` escape; everything else the format tolerates.
pub fn parse(text: &str) -> Result<HashMap<String, String>, StoreError> {
    let mut map = HashMap::new();
    let mut lines = text.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        // Fold backslash-continued natural lines into one logical line.
        // Leading whitespace of each continuation line is skipped.
        let mut logical = trimmed.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_pair(&logical, idx + 1)?;
        map.insert(key, value);
    }

    Ok(map)
}

/// A trailing even run of backslashes is escaped backslashes; an odd run
/// means the last one escapes the line terminator.
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace and
/// unescape both halves. A line with no separator maps to the empty value.
fn split_pair(line: &str, line_no: usize) -> Result<(String, String), StoreError> {
    let chars: Vec<char> = line.chars().collect();
    let mut key_end = chars.len();
    let mut explicit_sep = false;

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '=' | ':' => {
                key_end = i;
                explicit_sep = true;
                break;
            }
            ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }

    let mut value_start = key_end.min(chars.len());
    if explicit_sep {
        value_start += 1;
    } else {
        // Whitespace-terminated key: skip the whitespace run, then consume
        // one optional `=`/`:` that may follow it.
        while value_start < chars.len() && is_sep_whitespace(chars[value_start]) {
            value_start += 1;
        }
        if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
            value_start += 1;
        }
    }
    while value_start < chars.len() && is_sep_whitespace(chars[value_start]) {
        value_start += 1;
    }

    let key: String = chars[..key_end.min(chars.len())].iter().collect();
    let value: String = chars[value_start..].iter().collect();
    Ok((unescape(&key, line_no)?, unescape(&value, line_no)?))
}

fn is_sep_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Decode backslash escapes: `\t` `\n` `\r` `\f` `\uXXXX`; a backslash before
/// any other character yields that character.
fn unescape(text: &str, line_no: usize) -> Result<String, StoreError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(16))
                        .ok_or(StoreError::InvalidEscape { line: line_no })?;
                    code = code * 16 + digit;
                }
                let decoded =
                    char::from_u32(code).ok_or(StoreError::InvalidEscape { line: line_no })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            // Trailing lone backslash; continuation folding already consumed
            // the ones that mattered.
            None => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let map = parse("a=1\nb=2\n").unwrap();
        assert_eq!(map.get("a"), Some(&"1".to_string()));
        assert_eq!(map.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let map = parse("# comment\n! also a comment\n\n   \nkey=value\n").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key"), Some(&"value".to_string()));
    }

    #[test]
    fn test_separator_variants() {
        let map = parse("a:1\nb 2\nc = 3\nd : 4\ne\t=\t5\n").unwrap();
        assert_eq!(map.get("a"), Some(&"1".to_string()));
        assert_eq!(map.get("b"), Some(&"2".to_string()));
        assert_eq!(map.get("c"), Some(&"3".to_string()));
        assert_eq!(map.get("d"), Some(&"4".to_string()));
        assert_eq!(map.get("e"), Some(&"5".to_string()));
    }

    #[test]
    fn test_line_with_no_separator_maps_to_empty() {
        let map = parse("lonely\n").unwrap();
        assert_eq!(map.get("lonely"), Some(&String::new()));
    }

    #[test]
    fn test_escaped_separator_stays_in_key() {
        let map = parse("a\\=b=c\nd\\ e f\n").unwrap();
        assert_eq!(map.get("a=b"), Some(&"c".to_string()));
        assert_eq!(map.get("d e"), Some(&"f".to_string()));
    }

    #[test]
    fn test_escape_sequences() {
        let map = parse("tabs=a\\tb\nnewline=a\\nb\nunicode=\\u0041\nother=\\q\n").unwrap();
        assert_eq!(map.get("tabs"), Some(&"a\tb".to_string()));
        assert_eq!(map.get("newline"), Some(&"a\nb".to_string()));
        assert_eq!(map.get("unicode"), Some(&"A".to_string()));
        assert_eq!(map.get("other"), Some(&"q".to_string()));
    }

    #[test]
    fn test_line_continuation() {
        let map = parse("key=first\\\n    second\n").unwrap();
        assert_eq!(map.get("key"), Some(&"firstsecond".to_string()));
    }

    #[test]
    fn test_double_backslash_is_not_a_continuation() {
        let map = parse("key=ends\\\\\nnext=1\n").unwrap();
        assert_eq!(map.get("key"), Some(&"ends\\".to_string()));
        assert_eq!(map.get("next"), Some(&"1".to_string()));
    }

    #[test]
    fn test_malformed_unicode_escape_is_an_error() {
        assert!(matches!(
            parse("bad=\\uZZZZ\n"),
            Err(StoreError::InvalidEscape { line: 1 })
        ));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let map = parse("k=1\nk=2\n").unwrap();
        assert_eq!(map.get("k"), Some(&"2".to_string()));
    }
}
