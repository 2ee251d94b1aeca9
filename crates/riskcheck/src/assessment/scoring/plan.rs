use super::config::ScoringConfig;
use crate::assessment::catalog::Catalog;
use crate::assessment::domain::{ActionItem, Answer, RiskItem, RiskLevel, Severity, Urgency};

fn risk_item(catalog: &Catalog, answer: &Answer, severity: Severity) -> Option<RiskItem> {
    let found = catalog.find_question(&answer.question_id)?;
    Some(RiskItem {
        question_id: answer.question_id.clone(),
        area_id: found.area.id.clone(),
        area_name: found.area.name.clone(),
        title: found.question.risk_title.clone(),
        description: found.question.risk_summary.clone(),
        severity,
    })
}

/// Ranked risk list derived from the answers actually given.
///
/// Trigger-flagged answers come first in question order, then remaining
/// answers at their question's highest point tier, all at high severity.
/// While fewer than `medium_fill_threshold` high items exist, answered
/// mid-tier options fill in at medium severity. The list never grows past
/// `top_risk_cap`.
pub(crate) fn top_risks(
    catalog: &Catalog,
    answers: &[Answer],
    config: &ScoringConfig,
) -> Vec<RiskItem> {
    let mut risks = Vec::new();

    for answer in answers {
        if answer.trigger_flag {
            if let Some(item) = risk_item(catalog, answer, Severity::High) {
                risks.push(item);
            }
        }
    }

    for answer in answers {
        if risks.len() >= config.top_risk_cap {
            break;
        }
        if answer.trigger_flag || answer.points == 0 {
            continue;
        }
        let Some(found) = catalog.find_question(&answer.question_id) else {
            continue;
        };
        if answer.points == found.question.max_points() {
            if let Some(item) = risk_item(catalog, answer, Severity::High) {
                risks.push(item);
            }
        }
    }

    let high_count = risks.len();
    if high_count < config.medium_fill_threshold {
        for answer in answers {
            if risks.len() >= config.top_risk_cap {
                break;
            }
            if answer.trigger_flag || answer.points == 0 {
                continue;
            }
            let Some(found) = catalog.find_question(&answer.question_id) else {
                continue;
            };
            if answer.points < found.question.max_points() {
                if let Some(item) = risk_item(catalog, answer, Severity::Medium) {
                    risks.push(item);
                }
            }
        }
    }

    risks.truncate(config.top_risk_cap);
    risks
}

/// Trigger-flag detail records: the flagged subset of the risk list.
pub(crate) fn trigger_details(catalog: &Catalog, answers: &[Answer]) -> Vec<RiskItem> {
    answers
        .iter()
        .filter(|answer| answer.trigger_flag)
        .filter_map(|answer| risk_item(catalog, answer, Severity::High))
        .collect()
}

/// One action per top risk, prioritized in the same order, plus a closing
/// consultation recommendation whenever the overall level is elevated.
pub(crate) fn action_plan(risks: &[RiskItem], overall: RiskLevel) -> Vec<ActionItem> {
    let mut plan: Vec<ActionItem> = risks
        .iter()
        .enumerate()
        .map(|(index, risk)| {
            let (action, urgency) = match risk.severity {
                Severity::High => (format!("Fix: {}", risk.title), Urgency::High),
                Severity::Medium => (format!("Review: {}", risk.title), Urgency::Normal),
            };
            ActionItem {
                priority: index as u32 + 1,
                action,
                description: risk.description.clone(),
                urgency,
            }
        })
        .collect();

    if overall != RiskLevel::Green {
        plan.push(ActionItem {
            priority: plan.len() as u32 + 1,
            action: "Schedule a legal risk review call".to_string(),
            description: "A 30-minute call to discuss your specific situation and create a protection plan.".to_string(),
            urgency: if overall == RiskLevel::Red {
                Urgency::High
            } else {
                Urgency::Normal
            },
        });
    }

    plan
}
