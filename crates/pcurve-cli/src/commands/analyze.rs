//! `pcurve analyze`: score one or more p-value lists.

use pcurve_core::{PCurveReport, assess, render_markdown, render_text};
use serde::Serialize;

/// Configuration for the analyze command.
pub struct AnalyzeCommandConfig<'a> {
    pub files: &'a [String],
    pub strict: bool,
    pub json: bool,
    pub output_path: Option<&'a str>,
    pub fail_on: Option<&'a str>,
}

/// One input's assessment as printed by `--json`.
#[derive(Serialize)]
struct InputAssessment<'a> {
    input: &'a str,
    skipped_tokens: usize,
    #[serde(flatten)]
    report: &'a PCurveReport,
}

pub fn run(config: AnalyzeCommandConfig<'_>) {
    let inputs = super::load_inputs_or_exit(config.files, config.strict);

    let mut results: Vec<(String, usize, PCurveReport)> = Vec::with_capacity(inputs.len());
    for (name, parsed) in inputs {
        let report = assess(&parsed.values);
        results.push((name, parsed.skipped, report));
    }

    if config.json {
        print_json(&results);
    } else {
        for (i, (name, skipped, report)) in results.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(60));
            }
            println!("📄 {name}");
            if *skipped > 0 {
                println!("  ({skipped} non-numeric token(s) skipped)");
            }
            print!("{}", render_text(report));
        }
    }

    if let Some(path) = config.output_path {
        let named: Vec<(String, PCurveReport)> = results
            .iter()
            .map(|(name, _, report)| (name.clone(), report.clone()))
            .collect();
        let md = render_markdown(&named, &unix_timestamp());
        if let Err(e) = std::fs::write(path, md) {
            eprintln!("Failed to write report to {path}: {e}");
            std::process::exit(1);
        }
        if !config.json {
            println!("\n📄 Report saved to: {path}");
        }
    }

    if let Some(level) = config.fail_on {
        let threshold = super::parse_fail_on(level);
        let flagged = results
            .iter()
            .filter(|(_, _, r)| r.status.severity() >= threshold)
            .count();
        if flagged > 0 {
            log::info!("{flagged} input(s) at or above '{level}' risk");
            std::process::exit(2);
        }
    }
}

fn print_json(results: &[(String, usize, PCurveReport)]) {
    let rows: Vec<InputAssessment<'_>> = results
        .iter()
        .map(|(name, skipped, report)| InputAssessment {
            input: name,
            skipped_tokens: *skipped,
            report,
        })
        .collect();
    let json = if rows.len() == 1 {
        serde_json::to_string_pretty(&rows[0])
    } else {
        serde_json::to_string_pretty(&rows)
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize results: {e}");
            std::process::exit(1);
        }
    }
}

fn unix_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", dur.as_secs())
}
