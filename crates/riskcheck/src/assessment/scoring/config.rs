/// Threshold dials for classification and risk derivation.
///
/// Defaults follow the published table: Red strictly above 60%, Yellow for
/// [30, 60] inclusive, Green below 30. Trigger flags elevate independently of
/// the percentage: three flags force Red across the whole assessment, while a
/// four-question area turns Red at two.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Percentage strictly above which the classification is Red.
    pub red_percentage_floor: f64,
    /// Percentage at or above which the classification is at least Yellow.
    pub yellow_percentage_floor: f64,
    /// Trigger-flag count that forces Red at whole-assessment scope.
    pub overall_red_flag_count: usize,
    /// Trigger-flag count that forces Red within a single area.
    pub area_red_flag_count: usize,
    /// Maximum length of the top-risks list.
    pub top_risk_cap: usize,
    /// Medium-severity items fill the list only while fewer high-severity
    /// items than this exist.
    pub medium_fill_threshold: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            red_percentage_floor: 60.0,
            yellow_percentage_floor: 30.0,
            overall_red_flag_count: 3,
            area_red_flag_count: 2,
            top_risk_cap: 7,
            medium_fill_threshold: 5,
        }
    }
}
