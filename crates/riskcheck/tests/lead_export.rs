//! Integration specifications for lead capture and the CSV export handed to
//! the follow-up team.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use riskcheck::assessment::{
        AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentService, Catalog,
        LeadRecord, LeadRepository, LeadSubmission, ModuleId, RepositoryError, ScoringConfig,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryAssessments {
        records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
    }

    impl AssessmentRepository for MemoryAssessments {
        fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.insert(record.id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryLeads {
        records: Arc<Mutex<Vec<LeadRecord>>>,
    }

    impl LeadRepository for MemoryLeads {
        fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lead mutex poisoned");
            guard.push(record.clone());
            Ok(record)
        }

        fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lead mutex poisoned");
            let mut leads = guard.clone();
            leads.reverse();
            Ok(leads)
        }
    }

    pub(super) fn build_service() -> AssessmentService<MemoryAssessments, MemoryLeads> {
        AssessmentService::new(
            Arc::new(Catalog::standard()),
            Arc::new(MemoryAssessments::default()),
            Arc::new(MemoryLeads::default()),
            ScoringConfig::default(),
        )
    }

    pub(super) fn lead(name: &str, business: &str) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            email: format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ),
            phone: "555-0100".to_string(),
            business_name: business.to_string(),
            state: "IA".to_string(),
            modules: vec![ModuleId("clbh".to_string())],
            situation: "Growing crew, paperwork lagging".to_string(),
            assessment_id: None,
        }
    }
}

use common::*;
use riskcheck::assessment::{
    AnswerSubmission, AssessmentError, Catalog, LeadError, ModuleId, RiskLevel,
};

#[test]
fn export_carries_assessment_outcomes_next_to_contact_details() {
    let service = build_service();
    let created = service
        .create(vec![ModuleId("clbh".to_string())])
        .expect("created");
    let submissions: Vec<_> = Catalog::standard()
        .all_questions()
        .map(|question| AnswerSubmission {
            question_id: question.id.clone(),
            value: "yellow".to_string(),
        })
        .collect();
    service
        .submit(&created.id, &submissions)
        .expect("submitted");

    let mut submission = lead("Dana Smith", "Smith Electric");
    submission.assessment_id = Some(created.id);
    service.capture_lead(submission).expect("lead captured");

    let csv = service.export_leads_csv().expect("export succeeds");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().expect("header"),
        "name,email,phone,business_name,state,modules,situation,score,risk_level,top_risks,timestamp"
    );
    let row = lines.next().expect("one lead row");
    assert!(row.starts_with("Dana Smith,dana.smith@example.com,"));
    assert!(row.contains("50%"));
    assert!(row.contains("yellow"));
}

#[test]
fn export_quotes_fields_containing_separators() {
    let service = build_service();
    let mut submission = lead("Ray Alvarez", "Alvarez, Sons & Co.");
    submission.situation = "Handshake deals; \"friends\" as subs".to_string();
    service.capture_lead(submission).expect("lead captured");

    let csv = service.export_leads_csv().expect("export succeeds");
    let row = csv.lines().nth(1).expect("one lead row");
    assert!(row.contains("\"Alvarez, Sons & Co.\""));
    assert!(row.contains("\"\"friends\"\""));
}

#[test]
fn listing_returns_newest_leads_first() {
    let service = build_service();
    service
        .capture_lead(lead("First Caller", "First LLC"))
        .expect("captured");
    service
        .capture_lead(lead("Second Caller", "Second LLC"))
        .expect("captured");

    let leads = service.leads().expect("listing works");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].business_name, "Second LLC");
    assert_eq!(leads[1].business_name, "First LLC");
}

#[test]
fn malformed_contacts_are_rejected_before_storage() {
    let service = build_service();

    let mut submission = lead("Dana Smith", "Smith Electric");
    submission.email = "not-an-email".to_string();
    let err = service
        .capture_lead(submission)
        .expect_err("bad email rejected");
    assert!(matches!(
        err,
        AssessmentError::Lead(LeadError::InvalidEmail(_))
    ));

    assert!(service.leads().expect("listing works").is_empty());
}

#[test]
fn leads_without_an_assessment_have_blank_outcome_columns() {
    let service = build_service();
    let stored = service
        .capture_lead(lead("Dana Smith", "Smith Electric"))
        .expect("captured");
    assert_eq!(stored.risk_level, None::<RiskLevel>);

    let csv = service.export_leads_csv().expect("export succeeds");
    let row = csv.lines().nth(1).expect("one lead row");
    // score and risk_level columns are empty between situation and top_risks.
    assert!(row.contains(",,"));
}
