//! Decoding of already-extracted p-value lists.
//!
//! Two formats are accepted:
//!
//! - a JSON array of numbers (`null` entries are skipped), and
//! - free text with one or more values per line, separated by whitespace,
//!   commas or semicolons. Lines starting with `#` are comments. Values may
//!   omit the leading zero (`.05`).
//!
//! Decoded values are not range-checked; the scoring window handles that.

use std::path::Path;

use serde_json::Value;

/// Errors raised while reading p-value lists.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON p-value list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON p-value list must be an array of numbers, found {found} at index {index}")]
    JsonElement { index: usize, found: String },

    #[error("invalid p-value '{token}' on line {line}")]
    InvalidToken { token: String, line: usize },
}

/// How to treat tokens that are not numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Skip them and count them in [`ParsedPValues::skipped`].
    #[default]
    Lenient,
    /// Fail on the first one.
    Strict,
}

/// Values decoded from one input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPValues {
    pub values: Vec<f64>,
    /// Tokens dropped under [`ParsePolicy::Lenient`].
    pub skipped: usize,
}

/// Decode a p-value list from text.
pub fn parse_p_values(text: &str, policy: ParsePolicy) -> Result<ParsedPValues, InputError> {
    if text.trim_start().starts_with('[') {
        return parse_json(text, policy);
    }

    let mut parsed = ParsedPValues::default();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
        {
            match parse_token(token) {
                Some(p) => parsed.values.push(p),
                None => reject(&mut parsed, policy, token, line_no + 1)?,
            }
        }
    }
    Ok(parsed)
}

/// Read and decode a p-value list from a file.
pub fn read_p_values(path: &Path, policy: ParsePolicy) -> Result<ParsedPValues, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_p_values(&text, policy)
}

/// Parse a single value. `f64::from_str` already accepts `.05` and `5e-3`.
fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

fn reject(
    parsed: &mut ParsedPValues,
    policy: ParsePolicy,
    token: &str,
    line: usize,
) -> Result<(), InputError> {
    match policy {
        ParsePolicy::Strict => Err(InputError::InvalidToken {
            token: token.to_string(),
            line,
        }),
        ParsePolicy::Lenient => {
            log::warn!("skipping non-numeric token '{token}' on line {line}");
            parsed.skipped += 1;
            Ok(())
        }
    }
}

fn parse_json(text: &str, policy: ParsePolicy) -> Result<ParsedPValues, InputError> {
    let elements: Vec<Value> = serde_json::from_str(text)?;
    let mut parsed = ParsedPValues::default();
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            Value::Null => {}
            other => match (other.as_f64(), policy) {
                (Some(p), _) => parsed.values.push(p),
                (None, ParsePolicy::Strict) => {
                    return Err(InputError::JsonElement {
                        index,
                        found: other.to_string(),
                    });
                }
                (None, ParsePolicy::Lenient) => {
                    log::warn!("skipping non-numeric JSON element {other} at index {index}");
                    parsed.skipped += 1;
                }
            },
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_and_commas() {
        let parsed = parse_p_values("0.001 0.02,0.045;0.5\n0.03", ParsePolicy::Strict).unwrap();
        assert_eq!(parsed.values, vec![0.001, 0.02, 0.045, 0.5, 0.03]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_leading_dot() {
        let parsed = parse_p_values(".05 .001", ParsePolicy::Strict).unwrap();
        assert_eq!(parsed.values, vec![0.05, 0.001]);
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let text = "# extracted from results section\n\n0.01\n  # trailing note\n0.04\n";
        let parsed = parse_p_values(text, ParsePolicy::Strict).unwrap();
        assert_eq!(parsed.values, vec![0.01, 0.04]);
    }

    #[test]
    fn test_lenient_skips_bad_tokens() {
        let parsed = parse_p_values("0.01 n/a 0.04 p<.05", ParsePolicy::Lenient).unwrap();
        assert_eq!(parsed.values, vec![0.01, 0.04]);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_strict_reports_token_and_line() {
        let err = parse_p_values("0.01\n0.02 oops", ParsePolicy::Strict).unwrap_err();
        match err {
            InputError::InvalidToken { token, line } => {
                assert_eq!(token, "oops");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let parsed = parse_p_values("-0.2 1.5 0", ParsePolicy::Strict).unwrap();
        assert_eq!(parsed.values, vec![-0.2, 1.5, 0.0]);
    }

    #[test]
    fn test_parse_json_array_skips_null() {
        let parsed = parse_p_values("[0.005, null, 0.015, 0.045, null]", ParsePolicy::Strict)
            .unwrap();
        assert_eq!(parsed.values, vec![0.005, 0.015, 0.045]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_json_rejects_strings_when_strict() {
        let err = parse_p_values("[0.01, \"0.02\"]", ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, InputError::JsonElement { index: 1, .. }));
    }

    #[test]
    fn test_parse_json_lenient_counts_strings() {
        let parsed = parse_p_values("[0.01, \"x\", true]", ParsePolicy::Lenient).unwrap();
        assert_eq!(parsed.values, vec![0.01]);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_parse_json_numbers_kept_when_strict() {
        let parsed = parse_p_values("[5e-3, 1, 0.04]", ParsePolicy::Strict).unwrap();
        assert_eq!(parsed.values, vec![0.005, 1.0, 0.04]);
        assert_eq!(parsed.skipped, 0);
        let err = parse_p_values("[0.01, {\"p\": 0.02}]", ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, InputError::JsonElement { index: 1, .. }));
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_p_values("[0.01, ", ParsePolicy::Lenient).unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            parse_p_values("", ParsePolicy::Strict).unwrap(),
            ParsedPValues::default()
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_p_values(Path::new("/nonexistent/pvalues.txt"), ParsePolicy::Lenient)
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pvalues.txt"));
    }
}
