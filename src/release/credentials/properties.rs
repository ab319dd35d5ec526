//! Reader for Java-style `.properties` files.
//!
//! Supports the subset of the format that `local.properties` files use in
//! practice: `#`/`!` comments, `=`, `:` or whitespace separators, backslash
//! line continuations and the standard escapes (`\t`, `\n`, `\r`, `\f`,
//! `\uXXXX`, `\<c>`).

use crate::release::{Error, ErrorExt, Result};
use std::{collections::HashMap, fs::File, io::Read, path::Path};
use thiserror::Error;

/// Syntax problem found while parsing properties text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct SyntaxError {
    /// 1-based line of the logical entry that failed
    pub line: usize,
    /// Description of the problem
    pub reason: String,
}

impl SyntaxError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parsed key/value pairs of a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    entries: HashMap<String, String>,
}

impl PropertiesFile {
    /// Loads and parses the properties file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. A file that exists but
    /// is not valid UTF-8 or not valid properties syntax is an
    /// [`Error::ConfigParse`].
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let bytes = {
            let mut file = match File::open(path) {
                Ok(file) => file,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(e).fs_context("opening properties file", path),
            };
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)
                .fs_context("reading properties file", path)?;
            bytes
        };

        let text = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            Error::ConfigParse {
                path: path.to_path_buf(),
                line: valid.iter().filter(|b| **b == b'\n').count() + 1,
                reason: "file is not valid UTF-8".to_string(),
            }
        })?;

        Self::parse(&text)
            .map(Some)
            .map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                line: e.line,
                reason: e.reason,
            })
    }

    /// Parses properties text. Later duplicate keys override earlier ones.
    pub fn parse(text: &str) -> std::result::Result<Self, SyntaxError> {
        let mut entries = HashMap::new();
        let mut lines = physical_lines(text).into_iter().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line_no = index + 1;
            let trimmed = raw.trim_start_matches(is_blank);
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                    None => {
                        return Err(SyntaxError::new(
                            line_no,
                            "unterminated escape at end of input",
                        ));
                    }
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key, line_no)?, unescape(value, line_no)?);
        }

        Ok(Self { entries })
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the file defines no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// An odd number of trailing backslashes joins the next line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Splits a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let value = match rest.strip_prefix(['=', ':']) {
        Some(after) => after.trim_start_matches(is_blank),
        None => rest,
    };

    (&line[..key_end], value)
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A terminator at the very end
/// does not start another line.
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Reads the four hex digits following `\u`.
fn read_code_unit(
    chars: &mut std::str::Chars<'_>,
    line: usize,
) -> std::result::Result<u16, SyntaxError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SyntaxError::new(line, format!("malformed \\uxxxx escape: \\u{hex}")));
    }
    u16::from_str_radix(&hex, 16)
        .map_err(|_| SyntaxError::new(line, format!("malformed \\uxxxx escape: \\u{hex}")))
}

fn unescape(raw: &str, line: usize) -> std::result::Result<String, SyntaxError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars, line)?;
                let units = if (0xD800..=0xDBFF).contains(&unit) {
                    match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => vec![unit, read_code_unit(&mut chars, line)?],
                        _ => vec![unit],
                    }
                } else {
                    vec![unit]
                };
                let decoded: String = char::decode_utf16(units)
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| {
                        SyntaxError::new(
                            line,
                            format!("unpaired surrogate \\u{:04X}", e.unpaired_surrogate()),
                        )
                    })?;
                out.push_str(&decoded);
            }
            Some(other) => out.push(other),
            None => return Err(SyntaxError::new(line, "unterminated escape")),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separators_and_comments() {
        let props = PropertiesFile::parse(
            "# comment\n! also a comment\n\nA=1\nB : 2\nC 3\n   D=  spaced value\nE=\n",
        )
        .unwrap();

        assert_eq!(props.get("A"), Some("1"));
        assert_eq!(props.get("B"), Some("2"));
        assert_eq!(props.get("C"), Some("3"));
        assert_eq!(props.get("D"), Some("spaced value"));
        assert_eq!(props.get("E"), Some(""));
        assert_eq!(props.len(), 5);
    }

    #[test]
    fn joins_continuation_lines() {
        let props = PropertiesFile::parse("path=/opt/\\\n    keys/\\\n    qing.jks\n").unwrap();
        assert_eq!(props.get("path"), Some("/opt/keys/qing.jks"));
    }

    #[test]
    fn escaped_backslash_is_not_a_continuation() {
        let props = PropertiesFile::parse("dir=C:\\\\keys\\\\\nnext=1\n").unwrap();
        assert_eq!(props.get("dir"), Some("C:\\keys\\"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn decodes_escapes_in_keys_and_values() {
        let props =
            PropertiesFile::parse("my\\ key=tab\\there\nuni=\\u0041lbatross\ncolon\\:key=x\n")
                .unwrap();
        assert_eq!(props.get("my key"), Some("tab\there"));
        assert_eq!(props.get("uni"), Some("Albatross"));
        assert_eq!(props.get("colon:key"), Some("x"));
    }

    #[test]
    fn later_duplicates_win() {
        let props = PropertiesFile::parse("k=first\nk=second\n").unwrap();
        assert_eq!(props.get("k"), Some("second"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let props = PropertiesFile::parse("A=1\r\nB=2\r\n").unwrap();
        assert_eq!(props.get("A"), Some("1"));
        assert_eq!(props.get("B"), Some("2"));
    }

    #[test]
    fn decodes_surrogate_pairs() {
        let props = PropertiesFile::parse("RELEASE_STORE_PASSWORD=pw\\uD83D\\uDE00\n").unwrap();
        assert_eq!(props.get("RELEASE_STORE_PASSWORD"), Some("pw\u{1F600}"));
    }

    #[test]
    fn rejects_unpaired_surrogates() {
        let high = PropertiesFile::parse("a=\\uD83Dx\n").unwrap_err();
        assert!(high.reason.contains("unpaired surrogate"), "{high:?}");

        let low = PropertiesFile::parse("a=\\uDE00\n").unwrap_err();
        assert!(low.reason.contains("unpaired surrogate"), "{low:?}");

        let high_then_bmp = PropertiesFile::parse("a=\\uD83D\\u0041\n").unwrap_err();
        assert!(high_then_bmp.reason.contains("unpaired surrogate"));
    }

    #[test]
    fn handles_lone_cr_line_endings() {
        let props =
            PropertiesFile::parse("RELEASE_KEY_ALIAS=a\rRELEASE_KEY_PASSWORD=b\r").unwrap();
        assert_eq!(props.get("RELEASE_KEY_ALIAS"), Some("a"));
        assert_eq!(props.get("RELEASE_KEY_PASSWORD"), Some("b"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn continuation_spans_crlf_and_cr_terminators() {
        let props = PropertiesFile::parse("path=/opt/\\\r\n  keys/\\\r  qing.jks\r\nnext=1").unwrap();
        assert_eq!(props.get("path"), Some("/opt/keys/qing.jks"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn rejects_short_unicode_escape() {
        let err = PropertiesFile::parse("ok=1\nbad=\\u12\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("malformed"));
    }

    #[test]
    fn rejects_non_hex_unicode_escape() {
        assert!(PropertiesFile::parse("bad=\\uZZZZ\n").is_err());
    }

    #[test]
    fn rejects_dangling_continuation_at_end_of_input() {
        let err = PropertiesFile::parse("A=1\nB=unterminated\\").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("unterminated"));
    }
}
