use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, LeadId, ModuleId, RiskLevel};

/// Contact details captured alongside a completed checkup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub state: String,
    pub modules: Vec<ModuleId>,
    pub situation: String,
    pub assessment_id: Option<AssessmentId>,
}

/// Stored lead, hydrated with score details when the submission referenced a
/// completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub state: String,
    pub modules: Vec<ModuleId>,
    pub situation: String,
    pub assessment_id: Option<AssessmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    pub top_risks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Validation failures for the lead capture form.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("lead field '{0}' must not be empty")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

pub(crate) fn validate(submission: &LeadSubmission) -> Result<(), LeadError> {
    if submission.name.trim().is_empty() {
        return Err(LeadError::MissingField("name"));
    }
    if submission.email.trim().is_empty() {
        return Err(LeadError::MissingField("email"));
    }
    // Shape check only; deliverability is the email provider's problem.
    let email = submission.email.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(LeadError::InvalidEmail(email.to_string()));
    }
    if submission.business_name.trim().is_empty() {
        return Err(LeadError::MissingField("business_name"));
    }
    Ok(())
}

const EXPORT_HEADER: [&str; 11] = [
    "name",
    "email",
    "phone",
    "business_name",
    "state",
    "modules",
    "situation",
    "score",
    "risk_level",
    "top_risks",
    "timestamp",
];

/// Render captured leads as the CSV consumed by the admin dashboard.
pub fn export_csv(leads: &[LeadRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for lead in leads {
        let modules = lead
            .modules
            .iter()
            .map(|module| module.0.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writer.write_record([
            lead.name.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            lead.business_name.as_str(),
            lead.state.as_str(),
            modules.as_str(),
            lead.situation.as_str(),
            lead.score.as_deref().unwrap_or(""),
            lead.risk_level.map(RiskLevel::label).unwrap_or(""),
            lead.top_risks.join(", ").as_str(),
            lead.created_at.to_rfc3339().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
