//! Value lists
//!
//! Lists are comma- and/or whitespace-separated tokens, given inline with
//! `--values` or read from a file with the same syntax.

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// How list tokens are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    /// Signed 64-bit integers, numeric order
    Integer,
    /// Raw strings, lexicographic order
    Text,
}

impl ValueKind {
    pub(crate) fn from_text_flag(text: bool) -> Self {
        if text {
            Self::Text
        } else {
            Self::Integer
        }
    }
}

/// Parsed sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Values {
    Integers(Vec<i64>),
    Text(Vec<String>),
}

impl Values {
    /// Parse a raw list as `kind`
    ///
    /// # Errors
    /// Returns [`CliError::InvalidValue`] for the first token that does not parse
    pub(crate) fn parse(raw: &str, kind: ValueKind) -> Result<Self, CliError> {
        match kind {
            ValueKind::Integer => tokens(raw)
                .enumerate()
                .map(|(position, token)| {
                    token.parse::<i64>().map_err(|e| CliError::InvalidValue {
                        token: token.to_string(),
                        position,
                        reason: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Integers),
            ValueKind::Text => Ok(Self::Text(tokens(raw).map(str::to_string).collect())),
        }
    }

    /// Number of elements
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Integers(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }
}

/// Split a list into non-empty tokens
pub(crate) fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parse an integer search target
///
/// # Errors
/// Returns [`CliError::InvalidTarget`] if `raw` is not an integer
pub(crate) fn parse_integer_target(raw: &str) -> Result<i64, CliError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| CliError::InvalidTarget {
            token: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Raw list text from `--values` or `--file`
///
/// # Errors
/// Returns [`CliError::MissingInput`] if neither is set, or
/// [`CliError::Io`] if the file cannot be read
pub(crate) fn read_list(values: Option<&str>, file: Option<&Path>) -> Result<String, CliError> {
    match (values, file) {
        (Some(inline), _) => Ok(inline.to_string()),
        (None, Some(path)) => {
            tracing::debug!(path = %path.display(), "reading values file");
            fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
        }
        (None, None) => Err(CliError::MissingInput),
    }
}

/// Read and parse a list in one step
///
/// # Errors
/// Propagates errors from [`read_list`] and [`Values::parse`]
pub(crate) fn load(
    values: Option<&str>,
    file: Option<&Path>,
    kind: ValueKind,
) -> Result<Values, CliError> {
    let raw = read_list(values, file)?;
    let parsed = Values::parse(&raw, kind)?;
    tracing::debug!(count = parsed.len(), ?kind, "loaded values");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn commas_and_whitespace_both_separate() {
        let got: Vec<&str> = tokens("2, 3 ,4\n10\t40,,").collect();
        assert_eq!(got, vec!["2", "3", "4", "10", "40"]);
    }

    #[test]
    fn parses_integers() {
        let values = Values::parse("2,3,4,10,40", ValueKind::Integer).unwrap();
        assert_eq!(values, Values::Integers(vec![2, 3, 4, 10, 40]));
    }

    #[test]
    fn negative_integers() {
        let values = Values::parse("-5 -1 0", ValueKind::Integer).unwrap();
        assert_eq!(values, Values::Integers(vec![-5, -1, 0]));
    }

    #[test]
    fn reports_bad_token_position() {
        let err = Values::parse("1,2,x,4", ValueKind::Integer).unwrap_err();
        match err {
            CliError::InvalidValue {
                token, position, ..
            } => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn text_tokens_kept_verbatim() {
        let values = Values::parse("apple banana cherry", ValueKind::Text).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(
            values,
            Values::Text(vec!["apple".into(), "banana".into(), "cherry".into()])
        );
    }

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(Values::parse("  ", ValueKind::Integer).unwrap().len(), 0);
    }

    #[test]
    fn target_parsing() {
        assert_eq!(parse_integer_target(" 10 ").unwrap(), 10);
        assert!(matches!(
            parse_integer_target("ten"),
            Err(CliError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn missing_input() {
        assert!(matches!(read_list(None, None), Err(CliError::MissingInput)));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2 3 4").unwrap();
        writeln!(file, "10 40").unwrap();

        let values = load(None, Some(file.path()), ValueKind::Integer).unwrap();
        assert_eq!(values, Values::Integers(vec![2, 3, 4, 10, 40]));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_list(None, Some(dir.path().join("absent.txt").as_path())).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
