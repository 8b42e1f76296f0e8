//! Reusable formatting utilities for CLI output

/// Format a 0.0–1.0 score as a whole-number percentage, e.g. `72`.
pub fn format_score(score: f64) -> String {
    format!("{:.0}", (score * 100.0).clamp(0.0, 100.0))
}

/// Format estimated savings in milliseconds.
///
/// # Example output
/// - `350 ms`
/// - `1.2 s` (one second or more)
pub fn format_saving_ms(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.1} s", ms / 1000.0)
    } else {
        format!("{:.0} ms", ms.max(0.0))
    }
}

/// Lighthouse rating band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

/// Rate a score using Lighthouse thresholds (0.9 and 0.5).
pub fn rating(score: f64) -> Rating {
    if score >= 0.9 {
        Rating::Good
    } else if score >= 0.5 {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}
