//! Plain-text and Markdown renderings of a [`PCurveReport`].

use crate::scoring::PCurveReport;

/// Console block for a single assessment.
pub fn render_text(report: &PCurveReport) -> String {
    let s = &report.summary;
    let mut out = String::new();
    if s.total_count == 0 {
        out.push_str("No p-values supplied\n");
    } else {
        out.push_str(&format!(
            "{} p-value(s): {} in (0, 0.05] (scored), {} above 0.05, {} excluded\n",
            s.total_count, s.filtered_count, s.count_above_window, s.excluded_count
        ));
        out.push_str(&format!(
            "  Highly sig (<=0.01): {}, Moderate: {}, Risky (0.04-0.05): {}\n",
            s.high_sig_count, s.moderate_count, s.risky_count
        ));
        out.push_str(&format!("  Risk ratio: {:.3}\n", s.risk_ratio));
    }
    out.push_str(&format!(
        "\nIntegrity score: {}/100 - {}\n",
        report.score, report.status
    ));
    out
}

/// Markdown document with one section per named input.
pub fn render_markdown(reports: &[(String, PCurveReport)], generated: &str) -> String {
    let mut md = String::new();
    md.push_str("# P-Curve Integrity Report\n\n");
    md.push_str(&format!("Generated: {generated}\n\n"));

    for (name, report) in reports {
        let s = &report.summary;
        md.push_str(&format!("## {name}\n\n"));
        md.push_str(&format!(
            "- Integrity score: {}/100\n- Status: {}\n- P-values: {} total, {} in window\n- Risk ratio: {:.3}\n\n",
            report.score, report.status, s.total_count, s.filtered_count, s.risk_ratio
        ));

        md.push_str("| Bucket | Range | Count |\n");
        md.push_str("|--------|-------|-------|\n");
        md.push_str(&format!("| Highly significant | p <= 0.01 | {} |\n", s.high_sig_count));
        md.push_str(&format!("| Moderate | 0.01 < p < 0.04 | {} |\n", s.moderate_count));
        md.push_str(&format!("| Risky | 0.04 <= p <= 0.05 | {} |\n\n", s.risky_count));

        md.push_str("| Bin | Count |\n");
        md.push_str("|-----|-------|\n");
        for (left, right, count) in report.histogram.iter_bins() {
            md.push_str(&format!("| {left:.2}-{right:.2} | {count} |\n"));
        }
        md.push_str("\n---\n\n");
    }

    md
}
