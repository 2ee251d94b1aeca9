use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{AnswerOption, Area, Catalog, Module, Question};
use crate::assessment::domain::{
    AnswerSubmission, AreaId, AssessmentId, AssessmentRecord, ModuleId, QuestionId,
};
use crate::assessment::leads::LeadRecord;
use crate::assessment::repository::{
    AssessmentRepository, LeadRepository, RepositoryError,
};
use crate::assessment::router::{assessment_router, AdminGate};
use crate::assessment::scoring::ScoringConfig;
use crate::assessment::service::AssessmentService;

pub(super) fn option(value: &str, points: u32, trigger_flag: bool) -> AnswerOption {
    AnswerOption {
        value: value.to_string(),
        label: format!("{value} answer"),
        points,
        trigger_flag,
    }
}

/// Question with the spec's {0, 2, 4, 6} point spread and a trigger flag on
/// the 2-point "unsure" option.
pub(super) fn graded_question(id: &str) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        text: format!("Probe {id}"),
        why_it_matters: "Exposure compounds quietly.".to_string(),
        risk_title: format!("Risk {id}"),
        risk_summary: format!("Summary for {id}"),
        options: vec![
            option("clear", 0, false),
            option("unsure", 2, true),
            option("gap", 4, false),
            option("exposed", 6, false),
        ],
    }
}

/// Ten-question module split over two areas, plus a two-question extras
/// module for out-of-scope checks. Max possible score of `lite` is 60.
pub(super) fn test_catalog() -> Catalog {
    let ops = Area {
        id: AreaId("ops".to_string()),
        name: "Operations".to_string(),
        description: "Operational exposure".to_string(),
        questions: (1..=5).map(|n| graded_question(&format!("q{n}"))).collect(),
    };
    let finance = Area {
        id: AreaId("finance".to_string()),
        name: "Finance".to_string(),
        description: "Financial exposure".to_string(),
        questions: (6..=10).map(|n| graded_question(&format!("q{n}"))).collect(),
    };
    let extras = Area {
        id: AreaId("extras".to_string()),
        name: "Extras".to_string(),
        description: "Optional add-on".to_string(),
        questions: vec![graded_question("x1"), graded_question("x2")],
    };

    Catalog::new(vec![
        Module {
            id: ModuleId("lite".to_string()),
            name: "Lite Checkup".to_string(),
            areas: vec![ops, finance],
        },
        Module {
            id: ModuleId("addon".to_string()),
            name: "Add-on Checkup".to_string(),
            areas: vec![extras],
        },
    ])
}

pub(super) fn lite() -> ModuleId {
    ModuleId("lite".to_string())
}

pub(super) fn answer(question: &str, value: &str) -> AnswerSubmission {
    AnswerSubmission {
        question_id: QuestionId(question.to_string()),
        value: value.to_string(),
    }
}

/// Every `lite` question answered with the same option value.
pub(super) fn uniform_answers(value: &str) -> Vec<AnswerSubmission> {
    (1..=10)
        .map(|n| answer(&format!("q{n}"), value))
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryAssessments {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryAssessments {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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

/// Repository that always reports itself unavailable.
pub(super) struct UnavailableAssessments;

impl AssessmentRepository for UnavailableAssessments {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service(
    catalog: Catalog,
) -> AssessmentService<MemoryAssessments, MemoryLeads> {
    AssessmentService::new(
        Arc::new(catalog),
        Arc::new(MemoryAssessments::default()),
        Arc::new(MemoryLeads::default()),
        ScoringConfig::default(),
    )
}

pub(super) fn build_router(admin_key: Option<&str>) -> axum::Router {
    let service = Arc::new(build_service(test_catalog()));
    assessment_router(service, AdminGate::new(admin_key.map(str::to_string)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
