mod config;
mod plan;
mod policy;
mod rules;

pub use config::ScoringConfig;

use std::sync::Arc;

use super::catalog::Catalog;
use super::domain::{Answer, ModuleId, ScoreResult};

/// Stateless engine mapping a validated answer set to a frozen result.
///
/// Pure and synchronous: each invocation reads only the immutable catalog and
/// the caller-supplied answers, so identical inputs yield identical results.
pub struct ScoringEngine {
    catalog: Arc<Catalog>,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<Catalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn score(&self, selected_modules: &[ModuleId], answers: &[Answer]) -> ScoreResult {
        let area_scores = rules::area_scores(&self.catalog, selected_modules, answers, &self.config);
        let (total_score, max_possible_score) = rules::totals(&area_scores);

        let ratio = policy::percentage(total_score, max_possible_score);
        let trigger_flags: Vec<_> = area_scores
            .iter()
            .flat_map(|area| area.trigger_flags.iter().cloned())
            .collect();
        let risk_level = policy::classify(
            ratio,
            trigger_flags.len(),
            self.config.overall_red_flag_count,
            &self.config,
        );

        let top_risks = plan::top_risks(&self.catalog, answers, &self.config);
        let action_plan = plan::action_plan(&top_risks, risk_level);
        let trigger_details = plan::trigger_details(&self.catalog, answers);

        ScoreResult {
            total_score,
            max_possible_score,
            score_percentage: (ratio * 10.0).round() / 10.0,
            risk_level,
            confidence: policy::confidence(ratio),
            area_scores,
            trigger_flags,
            trigger_details,
            top_risks,
            action_plan,
        }
    }
}
