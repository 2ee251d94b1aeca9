use super::config::ScoringConfig;
use super::policy;
use crate::assessment::catalog::{Area, Catalog};
use crate::assessment::domain::{Answer, AreaScore, ModuleId, QuestionId};

/// Aggregate of one area before classification.
pub(crate) struct AreaAggregate {
    pub score: u32,
    pub max_score: u32,
    pub flagged: Vec<QuestionId>,
}

fn aggregate_area(area: &Area, answers: &[Answer]) -> AreaAggregate {
    let mut score = 0;
    let mut flagged = Vec::new();
    // Walk the catalog rather than the answers so flagged question ids come
    // out in declaration order.
    for question in &area.questions {
        let Some(answer) = answers
            .iter()
            .find(|answer| answer.question_id == question.id)
        else {
            continue;
        };
        score += answer.points;
        if answer.trigger_flag {
            flagged.push(answer.question_id.clone());
        }
    }
    AreaAggregate {
        score,
        max_score: area.max_score(),
        flagged,
    }
}

/// Per-area aggregation and classification over the selected modules, in
/// catalog declaration order. Unanswered questions contribute nothing to the
/// score while their maximum still counts toward `max_score`.
pub(crate) fn area_scores(
    catalog: &Catalog,
    selected_modules: &[ModuleId],
    answers: &[Answer],
    config: &ScoringConfig,
) -> Vec<AreaScore> {
    let mut scores = Vec::new();
    for module in catalog.modules() {
        if !selected_modules.contains(&module.id) {
            continue;
        }
        for area in &module.areas {
            let aggregate = aggregate_area(area, answers);
            let ratio = policy::percentage(aggregate.score, aggregate.max_score);
            let risk_level = policy::classify(
                ratio,
                aggregate.flagged.len(),
                config.area_red_flag_count,
                config,
            );
            scores.push(AreaScore {
                area_id: area.id.clone(),
                area_name: area.name.clone(),
                score: aggregate.score,
                max_score: aggregate.max_score,
                risk_level,
                trigger_flags: aggregate.flagged,
            });
        }
    }
    scores
}

/// Overall totals derived from the per-area breakdown.
pub(crate) fn totals(area_scores: &[AreaScore]) -> (u32, u32) {
    let total = area_scores.iter().map(|area| area.score).sum();
    let max = area_scores.iter().map(|area| area.max_score).sum();
    (total, max)
}
