//! P-curve integrity scoring.
//!
//! The pipeline runs five pure stages over a slice of p-values:
//!
//! ```text
//! p-values → window (0, 0.05] → risk buckets → risk ratio → score → status
//! ```
//!
//! Under a genuine effect, significant p-values are right-skewed: most land at
//! p ≤ 0.01 and density falls off toward 0.05. A pile-up just under 0.05
//! inverts that shape, which is what the risk ratio measures.
//!
//! Bucket boundaries and the floor in the score mapping are fixed. Changing
//! either changes scores for common inputs.

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound (inclusive) of the informative window.
pub const WINDOW_UPPER: f64 = 0.05;

/// Upper bound (inclusive) of the highly significant bucket.
pub const HIGH_SIG_UPPER: f64 = 0.01;

/// Lower bound (inclusive) of the risky bucket.
pub const RISKY_LOWER: f64 = 0.04;

/// Score reported when the window is empty.
pub const EMPTY_WINDOW_SCORE: u8 = 100;

/// Lowest score still classified as [`IntegrityStatus::LikelyReliable`].
pub const RELIABLE_THRESHOLD: u8 = 70;

/// Lowest score still classified as [`IntegrityStatus::ModerateRisk`].
pub const MODERATE_THRESHOLD: u8 = 40;

/// Left edges of the histogram bins; the last bin runs to [`WINDOW_UPPER`].
pub const HISTOGRAM_EDGES: [f64; 5] = [0.0, 0.01, 0.02, 0.03, 0.04];

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Risk bucket of a single p-value inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    /// `p <= 0.01`
    HighlySignificant,
    /// `0.01 < p < 0.04`
    Moderate,
    /// `0.04 <= p <= 0.05`
    Risky,
}

impl RiskBucket {
    /// Bucket for `p`, or `None` when `p` is outside `(0, 0.05]`.
    pub fn of(p: f64) -> Option<Self> {
        if !in_window(p) {
            return None;
        }
        Some(if p <= HIGH_SIG_UPPER {
            Self::HighlySignificant
        } else if p < RISKY_LOWER {
            Self::Moderate
        } else {
            Self::Risky
        })
    }
}

/// Counts per risk bucket. Always sums to the window size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub high_sig_count: usize,
    pub moderate_count: usize,
    pub risky_count: usize,
}

impl BucketCounts {
    /// Number of values that were classified.
    pub fn total(&self) -> usize {
        self.high_sig_count + self.moderate_count + self.risky_count
    }

    /// True when no value fell inside the window.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Denominator of the risk ratio; floored to 1.
    fn ratio_denominator(&self) -> usize {
        self.high_sig_count.max(1)
    }
}

/// Categorical verdict derived from the integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityStatus {
    /// No p-value fell inside `(0, 0.05]`.
    NoPValuesInWindow,
    LikelyReliable,
    ModerateRisk,
    HighRisk,
}

impl IntegrityStatus {
    /// Human-readable label, stable across releases.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPValuesInWindow => "No p-values in 0-0.05",
            Self::LikelyReliable => "Likely Reliable",
            Self::ModerateRisk => "Moderate Risk",
            Self::HighRisk => "High Risk",
        }
    }

    /// Severity rank: 0 for no data and reliable, 1 moderate, 2 high.
    pub fn severity(&self) -> u8 {
        match self {
            Self::NoPValuesInWindow | Self::LikelyReliable => 0,
            Self::ModerateRisk => 1,
            Self::HighRisk => 2,
        }
    }
}

impl std::fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IntegrityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Intermediate figures behind a score, for consumers that show more than
/// the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PValueSummary {
    /// Every input value, whatever its range.
    pub total_count: usize,
    /// Values inside `(0, 0.05]`.
    pub filtered_count: usize,
    /// Values above 0.05 (including values above 1 and +inf).
    pub count_above_window: usize,
    /// Values at or below 0, and NaN.
    pub excluded_count: usize,
    pub high_sig_count: usize,
    pub moderate_count: usize,
    pub risky_count: usize,
    pub risk_ratio: f64,
}

/// Bin counts of the significant part of the p-curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PCurveHistogram {
    /// `[0,0.01) [0.01,0.02) [0.02,0.03) [0.03,0.04) [0.04,0.05]`, window only.
    pub bins: [usize; 5],
}

impl PCurveHistogram {
    pub fn total(&self) -> usize {
        self.bins.iter().sum()
    }

    /// `(left_edge, right_edge, count)` per bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.bins.iter().enumerate().map(|(i, &count)| {
            let right = HISTOGRAM_EDGES.get(i + 1).copied().unwrap_or(WINDOW_UPPER);
            (HISTOGRAM_EDGES[i], right, count)
        })
    }
}

/// Score, verdict, and every figure they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PCurveReport {
    pub score: u8,
    pub status: IntegrityStatus,
    pub summary: PValueSummary,
    pub histogram: PCurveHistogram,
}

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

/// True when `p` lies in the informative window `(0, 0.05]`.
///
/// NaN fails both comparisons and is therefore never in the window.
pub fn in_window(p: f64) -> bool {
    p > 0.0 && p <= WINDOW_UPPER
}

/// Keep only the values inside `(0, 0.05]`, preserving input order.
pub fn window_filter(p_values: &[f64]) -> Vec<f64> {
    p_values.iter().copied().filter(|&p| in_window(p)).collect()
}

/// Count values per risk bucket. Values outside the window are ignored, so
/// passing unfiltered input gives the same counts as passing the filtered
/// window.
pub fn classify(p_values: &[f64]) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for bucket in p_values.iter().filter_map(|&p| RiskBucket::of(p)) {
        match bucket {
            RiskBucket::HighlySignificant => counts.high_sig_count += 1,
            RiskBucket::Moderate => counts.moderate_count += 1,
            RiskBucket::Risky => counts.risky_count += 1,
        }
    }
    counts
}

/// `risky_count / max(high_sig_count, 1)`.
///
/// With no highly significant values the ratio is the raw risky count.
pub fn risk_ratio(counts: &BucketCounts) -> f64 {
    counts.risky_count as f64 / counts.ratio_denominator() as f64
}

/// Map an arbitrary ratio to `floor(100 / (1 + ratio))`, clamped to `[0, 100]`.
///
/// NaN maps to 0.
pub fn score_from_ratio(ratio: f64) -> u8 {
    let raw = (100.0 / (1.0 + ratio)).floor();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0) as u8
}

/// Integrity score for a set of bucket counts:
/// `score_from_ratio(risk_ratio(counts))`, or 100 for an empty window.
///
/// The float form is kept as written so the score always agrees with the
/// reported `risk_ratio`.
pub fn integrity_score(counts: &BucketCounts) -> u8 {
    if counts.is_empty() {
        return EMPTY_WINDOW_SCORE;
    }
    score_from_ratio(risk_ratio(counts))
}

/// Verdict for a score. `window_empty` overrides the score.
pub fn classify_score(score: u8, window_empty: bool) -> IntegrityStatus {
    if window_empty {
        IntegrityStatus::NoPValuesInWindow
    } else if score >= RELIABLE_THRESHOLD {
        IntegrityStatus::LikelyReliable
    } else if score >= MODERATE_THRESHOLD {
        IntegrityStatus::ModerateRisk
    } else {
        IntegrityStatus::HighRisk
    }
}

/// Bin the window into five 0.01-wide bins.
pub fn p_curve_histogram(p_values: &[f64]) -> PCurveHistogram {
    let mut histogram = PCurveHistogram::default();
    for &p in p_values.iter().filter(|&&p| in_window(p)) {
        let idx = HISTOGRAM_EDGES
            .iter()
            .rposition(|&edge| p >= edge)
            .unwrap_or(0);
        histogram.bins[idx] += 1;
    }
    histogram
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Score a set of p-values: `(integrity_score, status)`.
pub fn analyze_p_values(p_values: &[f64]) -> (u8, IntegrityStatus) {
    let counts = classify(p_values);
    let score = integrity_score(&counts);
    (score, classify_score(score, counts.is_empty()))
}

/// Counts and risk ratio behind [`analyze_p_values`].
pub fn summarize_p_values(p_values: &[f64]) -> PValueSummary {
    let counts = classify(p_values);
    let count_above_window = p_values.iter().filter(|&&p| p > WINDOW_UPPER).count();
    let filtered_count = counts.total();
    PValueSummary {
        total_count: p_values.len(),
        filtered_count,
        count_above_window,
        excluded_count: p_values.len() - filtered_count - count_above_window,
        high_sig_count: counts.high_sig_count,
        moderate_count: counts.moderate_count,
        risky_count: counts.risky_count,
        risk_ratio: risk_ratio(&counts),
    }
}

/// Score, verdict, summary, and histogram in one pass.
pub fn assess(p_values: &[f64]) -> PCurveReport {
    let (score, status) = analyze_p_values(p_values);
    let summary = summarize_p_values(p_values);
    let histogram = p_curve_histogram(p_values);
    log::debug!(
        "assessed {} p-values: window={} high_sig={} risky={} ratio={:.3} score={score} ({status})",
        summary.total_count,
        summary.filtered_count,
        summary.high_sig_count,
        summary.risky_count,
        summary.risk_ratio,
    );
    PCurveReport {
        score,
        status,
        summary,
        histogram,
    }
}
