//! `pcurve summarize`: bucket counts and risk ratio as JSON.

use pcurve_core::{PValueSummary, summarize_p_values};
use serde::Serialize;

#[derive(Serialize)]
struct InputSummary<'a> {
    input: &'a str,
    #[serde(flatten)]
    summary: PValueSummary,
}

pub fn run(files: &[String], strict: bool) {
    let inputs = super::load_inputs_or_exit(files, strict);
    let rows: Vec<InputSummary<'_>> = inputs
        .iter()
        .map(|(name, parsed)| InputSummary {
            input: name,
            summary: summarize_p_values(&parsed.values),
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
            eprintln!("Failed to serialize summary: {e}");
            std::process::exit(1);
        }
    }
}
