use super::config::ScoringConfig;
use crate::assessment::domain::RiskLevel;

/// Percentage of the maximum score reached, guarding the degenerate
/// zero-question case.
pub(crate) fn percentage(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        0.0
    } else {
        f64::from(score) * 100.0 / f64::from(max_score)
    }
}

/// Three-tier classification, first matching rule wins. Either signal alone
/// elevates: a raw score above the Red floor, or enough trigger flags. Flags
/// exist to catch qualitatively dangerous answers that a point-weighted
/// average would dilute into a falsely reassuring Green.
pub(crate) fn classify(
    percentage: f64,
    flag_count: usize,
    red_flag_count: usize,
    config: &ScoringConfig,
) -> RiskLevel {
    if percentage > config.red_percentage_floor || flag_count >= red_flag_count {
        RiskLevel::Red
    } else if percentage >= config.yellow_percentage_floor || flag_count >= 1 {
        RiskLevel::Yellow
    } else {
        RiskLevel::Green
    }
}

/// Complement of the score percentage: how protected the agreements appear.
pub(crate) fn confidence(percentage: f64) -> u8 {
    (100.0 - percentage).clamp(0.0, 100.0).round() as u8
}
