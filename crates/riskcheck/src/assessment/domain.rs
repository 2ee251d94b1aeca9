use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Identifier for a question-catalog module (e.g. the unified checkup).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub String);

/// Identifier for a topical area within a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AreaId(pub String);

/// Identifier for a single catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// Three-tier output classification, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Green => "green",
            RiskLevel::Yellow => "yellow",
            RiskLevel::Red => "red",
        }
    }
}

/// Severity attached to an individual risk item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

/// Urgency attached to an action-plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Normal,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Normal => "normal",
        }
    }
}

/// Untrusted answer as submitted by the caller; validated at the intake
/// boundary before it reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub value: String,
}

/// A catalog-validated answer. Produced only by the intake guard, so points
/// and flags are trusted downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub area: AreaId,
    pub value: String,
    pub points: u32,
    pub trigger_flag: bool,
}

/// Per-area slice of the score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    pub area_id: AreaId,
    pub area_name: String,
    pub score: u32,
    pub max_score: u32,
    pub risk_level: RiskLevel,
    pub trigger_flags: Vec<QuestionId>,
}

/// One entry of the ranked risk list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub question_id: QuestionId,
    pub area_id: AreaId,
    pub area_name: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// One entry of the prioritized action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: u32,
    pub action: String,
    pub description: String,
    pub urgency: Urgency,
}

/// Frozen outcome of a scored assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u32,
    pub max_possible_score: u32,
    /// Rounded to one decimal for display; classification uses the raw ratio.
    pub score_percentage: f64,
    pub risk_level: RiskLevel,
    /// Complement of the score percentage, clamped to [0, 100].
    pub confidence: u8,
    pub area_scores: Vec<AreaScore>,
    pub trigger_flags: Vec<QuestionId>,
    pub trigger_details: Vec<RiskItem>,
    pub top_risks: Vec<RiskItem>,
    pub action_plan: Vec<ActionItem>,
}

/// Lifecycle of an assessment session: created once, submitted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Created,
    Submitted,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Created => "created",
            AssessmentStatus::Submitted => "submitted",
        }
    }
}

/// Repository record binding an assessment id to its selected modules,
/// answers, and (after submission) the frozen result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub modules: Vec<ModuleId>,
    pub status: AssessmentStatus,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<Answer>,
    pub result: Option<ScoreResult>,
}

impl AssessmentRecord {
    pub fn is_submitted(&self) -> bool {
        self.status == AssessmentStatus::Submitted
    }
}
