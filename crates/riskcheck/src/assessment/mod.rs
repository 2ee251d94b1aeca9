//! Assessment intake, scoring, and lead capture.
//!
//! The scoring engine is a pure function from (catalog, answers) to a frozen
//! [`ScoreResult`]; the service around it owns only the create-once /
//! submit-once lifecycle of session records.

pub mod catalog;
pub mod domain;
pub(crate) mod intake;
pub mod leads;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerOption, Area, Catalog, CatalogError, Module, Question};
pub use domain::{
    ActionItem, Answer, AnswerSubmission, AreaId, AreaScore, AssessmentId, AssessmentRecord,
    AssessmentStatus, LeadId, ModuleId, QuestionId, RiskItem, RiskLevel, ScoreResult, Severity,
    Urgency,
};
pub use intake::InvalidAnswer;
pub use leads::{LeadError, LeadRecord, LeadSubmission};
pub use repository::{AssessmentRepository, LeadRepository, RepositoryError};
pub use router::{assessment_router, AdminGate};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{AssessmentError, AssessmentService};
