pub mod analyze;
pub mod score;
pub mod summarize;

use std::io::Read;
use std::path::Path;

use pcurve_core::{InputError, ParsePolicy, ParsedPValues, parse_p_values, read_p_values};

/// Name shown for stdin in reports.
const STDIN_NAME: &str = "<stdin>";

/// Map the `--strict` flag to a parse policy.
pub fn parse_policy(strict: bool) -> ParsePolicy {
    if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    }
}

/// Map a `--fail-on` level to the minimum status severity that fails.
pub fn parse_fail_on(s: &str) -> u8 {
    match s {
        "moderate" => 1,
        "high" => 2,
        _ => {
            eprintln!("Unknown risk level '{s}', using high");
            2
        }
    }
}

/// Decode every input. An empty list, or "-", means stdin.
pub fn load_inputs(
    files: &[String],
    policy: ParsePolicy,
) -> Result<Vec<(String, ParsedPValues)>, InputError> {
    if files.is_empty() {
        return Ok(vec![(STDIN_NAME.to_string(), read_stdin(policy)?)]);
    }

    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        let parsed = if file == "-" {
            read_stdin(policy)?
        } else {
            read_p_values(Path::new(file), policy)?
        };
        let name = if file == "-" { STDIN_NAME } else { file.as_str() };
        log::info!(
            "read {} p-value(s) from {name} ({} skipped)",
            parsed.values.len(),
            parsed.skipped
        );
        inputs.push((name.to_string(), parsed));
    }
    Ok(inputs)
}

/// Like [`load_inputs`], but reports the error and exits.
pub fn load_inputs_or_exit(files: &[String], strict: bool) -> Vec<(String, ParsedPValues)> {
    match load_inputs(files, parse_policy(strict)) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_stdin(policy: ParsePolicy) -> Result<ParsedPValues, InputError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| InputError::Io {
            path: STDIN_NAME.to_string(),
            source,
        })?;
    parse_p_values(&text, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // -----------------------------------------------------------------------
    // parse_policy / parse_fail_on tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy(true), ParsePolicy::Strict);
        assert_eq!(parse_policy(false), ParsePolicy::Lenient);
    }

    #[test]
    fn test_parse_fail_on_levels() {
        assert_eq!(parse_fail_on("moderate"), 1);
        assert_eq!(parse_fail_on("high"), 2);
    }

    #[test]
    fn test_parse_fail_on_unknown_defaults_high() {
        assert_eq!(parse_fail_on("HIGH"), 2); // case-sensitive
        assert_eq!(parse_fail_on(""), 2);
    }

    // -----------------------------------------------------------------------
    // load_inputs tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_load_inputs_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.json");
        std::fs::File::create(&a)
            .unwrap()
            .write_all(b"0.01 0.02")
            .unwrap();
        std::fs::write(&b, "[0.045, null]").unwrap();

        let files = vec![a.display().to_string(), b.display().to_string()];
        let inputs = load_inputs(&files, ParsePolicy::Strict).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].0, files[0]);
        assert_eq!(inputs[0].1.values, vec![0.01, 0.02]);
        assert_eq!(inputs[1].1.values, vec![0.045]);
    }

    #[test]
    fn test_load_inputs_missing_file_errors() {
        let files = vec!["/nonexistent/pcurve-input.txt".to_string()];
        assert!(matches!(
            load_inputs(&files, ParsePolicy::Lenient),
            Err(InputError::Io { .. })
        ));
    }
}
