//! `pcurve score`: map a raw risk ratio to a score and status.

use pcurve_core::{classify_score, score_from_ratio};

pub fn run(ratio: f64) {
    if !ratio.is_finite() || ratio < 0.0 {
        eprintln!("Risk ratio must be a finite, non-negative number (got {ratio})");
        std::process::exit(1);
    }
    let score = score_from_ratio(ratio);
    let status = classify_score(score, false);
    println!("Risk ratio {ratio:.3} → Integrity score: {score}/100 - {status}");
}
