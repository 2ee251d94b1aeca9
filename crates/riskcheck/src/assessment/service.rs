use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::catalog::{Catalog, CatalogError};
use super::domain::{
    AnswerSubmission, AssessmentId, AssessmentRecord, AssessmentStatus, LeadId, ModuleId,
};
use super::intake::{IntakeGuard, InvalidAnswer};
use super::leads::{self, LeadError, LeadRecord, LeadSubmission};
use super::repository::{AssessmentRepository, LeadRepository, RepositoryError};
use super::scoring::{ScoringConfig, ScoringEngine};

/// Service composing the catalog, intake guard, scoring engine, and stores.
///
/// The engine itself owns no mutable state between calls; the only mutation
/// here is the create-once / submit-once lifecycle of the session records.
pub struct AssessmentService<R, L> {
    catalog: Arc<Catalog>,
    guard: IntakeGuard,
    engine: ScoringEngine,
    assessments: Arc<R>,
    leads: Arc<L>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, L> AssessmentService<R, L>
where
    R: AssessmentRepository + 'static,
    L: LeadRepository + 'static,
{
    pub fn new(
        catalog: Arc<Catalog>,
        assessments: Arc<R>,
        leads: Arc<L>,
        config: ScoringConfig,
    ) -> Self {
        let guard = IntakeGuard::new(catalog.clone());
        let engine = ScoringEngine::new(catalog.clone(), config);
        Self {
            catalog,
            guard,
            engine,
            assessments,
            leads,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open a new assessment session against a set of catalog modules.
    pub fn create(&self, modules: Vec<ModuleId>) -> Result<AssessmentRecord, AssessmentError> {
        for module in &modules {
            self.catalog.module(module)?;
        }

        let record = AssessmentRecord {
            id: next_assessment_id(),
            modules,
            status: AssessmentStatus::Created,
            created_at: Utc::now(),
            answers: Vec::new(),
            result: None,
        };

        let stored = self.assessments.insert(record)?;
        Ok(stored)
    }

    /// Submit answers for scoring, freezing the record. Resubmission of a
    /// terminal record is rejected rather than silently replaced, so an
    /// already-communicated result can never change under a lead.
    pub fn submit(
        &self,
        id: &AssessmentId,
        submissions: &[AnswerSubmission],
    ) -> Result<AssessmentRecord, AssessmentError> {
        let mut record = self
            .assessments
            .fetch(id)?
            .ok_or(AssessmentError::NotFound)?;

        if record.is_submitted() {
            return Err(AssessmentError::AlreadySubmitted);
        }

        let answers = self.guard.answers(&record.modules, submissions)?;
        let result = self.engine.score(&record.modules, &answers);

        record.answers = answers;
        record.result = Some(result);
        record.status = AssessmentStatus::Submitted;
        self.assessments.update(record.clone())?;

        Ok(record)
    }

    /// Fetch an assessment record, completed or not.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentError> {
        self.assessments
            .fetch(id)?
            .ok_or(AssessmentError::NotFound)
    }

    /// Store a captured lead, hydrating score details from the referenced
    /// assessment when one exists. A dangling assessment reference is
    /// tolerated; the lead is simply stored without score info.
    pub fn capture_lead(
        &self,
        submission: LeadSubmission,
    ) -> Result<LeadRecord, AssessmentError> {
        leads::validate(&submission)?;

        let mut record = LeadRecord {
            id: next_lead_id(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            business_name: submission.business_name,
            state: submission.state,
            modules: submission.modules,
            situation: submission.situation,
            assessment_id: submission.assessment_id,
            score: None,
            risk_level: None,
            top_risks: Vec::new(),
            created_at: Utc::now(),
        };

        if let Some(assessment_id) = &record.assessment_id {
            if let Some(assessment) = self.assessments.fetch(assessment_id)? {
                if let Some(result) = &assessment.result {
                    record.score = Some(format!("{}%", result.score_percentage));
                    record.risk_level = Some(result.risk_level);
                    record.top_risks = result
                        .top_risks
                        .iter()
                        .map(|risk| risk.title.clone())
                        .collect();
                }
            }
        }

        let stored = self.leads.insert(record)?;
        Ok(stored)
    }

    /// Captured leads for the admin dashboard, newest first.
    pub fn leads(&self) -> Result<Vec<LeadRecord>, AssessmentError> {
        Ok(self.leads.list()?)
    }

    /// Captured leads rendered as CSV for the admin export.
    pub fn export_leads_csv(&self) -> Result<String, AssessmentError> {
        let leads = self.leads.list()?;
        Ok(leads::export_csv(&leads)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("assessment not found")]
    NotFound,
    #[error("assessment already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    InvalidAnswer(#[from] InvalidAnswer),
    #[error(transparent)]
    Lead(#[from] LeadError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("lead export failed: {0}")]
    Export(#[from] csv::Error),
}
