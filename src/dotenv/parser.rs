//! Line parser for `KEY=VALUE` files

use super::DotenvError;
use serde::{Deserialize, Serialize};
use std::str::Lines;

/// What to do when a blank or `#` comment line is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentHandling {
    /// The first blank or comment line ends the file. Lines after it are never read.
    #[default]
    StopParsing,
    /// Blank and comment lines are skipped and parsing continues.
    SkipLine,
}

/// One `KEY=VALUE` line after trimming and unquoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentAssignment {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Lazily parses assignments line by line.
///
/// Yields `Err` at most once; iteration ends after an error or when a
/// blank/comment line is hit under [`CommentHandling::StopParsing`].
pub struct Assignments<'a> {
    lines: Lines<'a>,
    line_number: usize,
    handling: CommentHandling,
    finished: bool,
}

impl<'a> Assignments<'a> {
    /// A leading UTF-8 byte order mark is ignored.
    pub fn new(content: &'a str, handling: CommentHandling) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self { lines: content.lines(), line_number: 0, handling, finished: false }
    }
}

impl Iterator for Assignments<'_> {
    type Item = Result<EnvironmentAssignment, DotenvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;

            if is_blank_or_comment(line) {
                match self.handling {
                    CommentHandling::StopParsing => break,
                    CommentHandling::SkipLine => continue,
                }
            }

            let parsed = parse_line(line, self.line_number);
            if parsed.is_err() {
                self.finished = true;
            }
            return Some(parsed);
        }

        self.finished = true;
        None
    }
}

/// Parse a whole file into assignments.
pub fn parse(
    content: &str,
    handling: CommentHandling,
) -> Result<Vec<EnvironmentAssignment>, DotenvError> {
    Assignments::new(content, handling).collect()
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_line(line: &str, line_number: usize) -> Result<EnvironmentAssignment, DotenvError> {
    let invalid = || DotenvError::InvalidFormat { line: line_number };

    let (raw_key, raw_value) = line.split_once('=').ok_or_else(invalid)?;
    // Both sides of the separator must be non-empty before trimming.
    if raw_key.is_empty() || raw_value.is_empty() {
        return Err(invalid());
    }
    // Environment entries cannot carry NUL bytes.
    if line.contains('\0') {
        return Err(invalid());
    }

    let key = raw_key.trim();
    if key.is_empty() {
        return Err(invalid());
    }

    Ok(EnvironmentAssignment {
        key: key.to_string(),
        value: unquote(raw_value.trim()),
        line: line_number,
    })
}

/// Strip one pair of surrounding double quotes and unescape `\"`.
fn unquote(value: &str) -> String {
    match value.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\""),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(content: &str, handling: CommentHandling) -> Vec<(String, String)> {
        parse(content, handling)
            .expect("parse")
            .into_iter()
            .map(|a| (a.key, a.value))
            .collect()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn parses_every_assignment_in_order() {
        let parsed = pairs("A=1\nB=two\nC = three \n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1"), pair("B", "two"), pair("C", "three")]);
    }

    #[test]
    fn records_line_numbers() {
        let parsed = parse("A=1\n\nB=2", CommentHandling::SkipLine).expect("parse");
        assert_eq!(parsed[0].line, 1);
        assert_eq!(parsed[1].line, 3);
    }

    #[test]
    fn strips_surrounding_quotes() {
        let parsed = pairs("KEY=\"quoted value\"", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("KEY", "quoted value")]);
    }

    #[test]
    fn unescapes_inner_quotes() {
        let parsed = pairs(r#"KEY="has \"escaped\" quotes""#, CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("KEY", r#"has "escaped" quotes"#)]);
    }

    #[test]
    fn leaves_unbalanced_quotes_alone() {
        let parsed = pairs("A=\"open\nB=close\"\nC=\"", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "\"open"), pair("B", "close\""), pair("C", "\"")]);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let parsed = pairs("A=B=C", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "B=C")]);
    }

    #[test]
    fn blank_line_stops_parsing() {
        let parsed = pairs("A=1\n\nB=2\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1")]);
    }

    #[test]
    fn whitespace_only_line_stops_parsing() {
        let parsed = pairs("A=1\n   \t\nB=2\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1")]);
    }

    #[test]
    fn comment_line_stops_parsing() {
        let parsed = pairs("A=1\n  # note\nB=2\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1")]);
    }

    #[test]
    fn leading_comment_yields_nothing() {
        assert!(pairs("# header\nA=1\n", CommentHandling::StopParsing).is_empty());
    }

    #[test]
    fn invalid_line_after_stop_is_never_reached() {
        let parsed = pairs("A=1\n#\nNOEQUALSATALL\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1")]);
    }

    #[test]
    fn skip_line_continues_past_comments() {
        let parsed = pairs("# header\nA=1\n\n# more\nB=2\n", CommentHandling::SkipLine);
        assert_eq!(parsed, vec![pair("A", "1"), pair("B", "2")]);
    }

    #[test]
    fn missing_equals_is_invalid() {
        let err = parse("A=1\nNOEQUALSATALL\n", CommentHandling::StopParsing).unwrap_err();
        assert!(matches!(err, DotenvError::InvalidFormat { line: 2 }));
    }

    #[test]
    fn empty_key_is_invalid() {
        let err = parse("=value", CommentHandling::StopParsing).unwrap_err();
        assert!(matches!(err, DotenvError::InvalidFormat { line: 1 }));

        let err = parse("   =value", CommentHandling::StopParsing).unwrap_err();
        assert!(matches!(err, DotenvError::InvalidFormat { line: 1 }));
    }

    #[test]
    fn nothing_after_equals_is_invalid() {
        let err = parse("KEY=", CommentHandling::StopParsing).unwrap_err();
        assert!(matches!(err, DotenvError::InvalidFormat { line: 1 }));
    }

    #[test]
    fn nul_byte_is_invalid() {
        let err = parse("KEY=a\0b", CommentHandling::StopParsing).unwrap_err();
        assert!(matches!(err, DotenvError::InvalidFormat { line: 1 }));
    }

    #[test]
    fn whitespace_value_trims_to_empty() {
        let parsed = pairs("KEY=   ", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("KEY", "")]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let parsed = pairs("A=1\r\nB=\"two\"\r\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("A", "1"), pair("B", "two")]);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let parsed = pairs("\u{feff}KEY=1\nOTHER=2\n", CommentHandling::StopParsing);
        assert_eq!(parsed, vec![pair("KEY", "1"), pair("OTHER", "2")]);
    }

    #[test]
    fn iterator_stops_after_first_error() {
        let mut iter = Assignments::new("A=1\nBAD\nC=3\n", CommentHandling::StopParsing);
        assert!(iter.next().expect("first").is_ok());
        assert!(iter.next().expect("second").is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn comment_handling_deserializes_from_snake_case() {
        let handling: CommentHandling = serde_json::from_str("\"skip_line\"").expect("json");
        assert_eq!(handling, CommentHandling::SkipLine);
    }
}
