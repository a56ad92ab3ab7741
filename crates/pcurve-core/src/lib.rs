//! # pcurve-core
//!
//! **Does this paper's p-curve look right-skewed, or does it bunch up at 0.05?**
//!
//! `pcurve-core` turns a list of reported p-values into a 0–100 integrity score
//! and a verdict. It is a heuristic screen for p-hacking, not a hypothesis test.
//!
//! ## Quick Start
//!
//! ```
//! use pcurve_core::{IntegrityStatus, analyze_p_values, summarize_p_values};
//!
//! let mut p_values = vec![0.005; 40];
//! p_values.extend([0.045; 4]);
//!
//! let (score, status) = analyze_p_values(&p_values);
//! assert_eq!(score, 90);
//! assert_eq!(status, IntegrityStatus::LikelyReliable);
//!
//! let summary = summarize_p_values(&p_values);
//! assert_eq!(summary.risky_count, 4);
//! ```
//!
//! ## Architecture
//!
//! Window `(0, 0.05]` → Buckets → Risk ratio → Score → Status
//!
//! - **Buckets**: highly significant (`p <= 0.01`), moderate
//!   (`0.01 < p < 0.04`), risky (`0.04 <= p <= 0.05`).
//! - **Risk ratio**: `risky / max(highly_significant, 1)`.
//! - **Score**: `floor(100 / (1 + ratio))`, clamped to `[0, 100]`; 100 when the
//!   window is empty.
//! - **Status**: `>= 70` Likely Reliable, `>= 40` Moderate Risk, else High Risk.
//!
//! Every stage is a pure function over a slice; nothing is cached or shared.
//! Extraction of p-values from documents happens upstream. [`input`] only
//! decodes lists of numbers that were already extracted.

pub mod input;
pub mod report;
pub mod scoring;

pub use input::{InputError, ParsePolicy, ParsedPValues, parse_p_values, read_p_values};
pub use report::{render_markdown, render_text};
pub use scoring::{
    BucketCounts, IntegrityStatus, PCurveHistogram, PCurveReport, PValueSummary, RiskBucket,
    analyze_p_values, assess, classify, classify_score, in_window, integrity_score,
    p_curve_histogram, risk_ratio, score_from_ratio, summarize_p_values, window_filter,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
