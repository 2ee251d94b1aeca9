use std::collections::BTreeMap;
use std::sync::Arc;

use super::catalog::Catalog;
use super::domain::{Answer, AnswerSubmission, ModuleId, QuestionId};

/// Validation errors raised at the answer intake boundary. Any one of these
/// aborts scoring; partial results are never produced.
#[derive(Debug, thiserror::Error)]
pub enum InvalidAnswer {
    #[error("answer references unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question}' is not part of the selected modules")]
    OutOfScope { question: String },
    #[error("'{value}' is not an option for question '{question}'")]
    UnknownOption { question: String, value: String },
    #[error("question '{0}' was answered more than once")]
    DuplicateAnswer(String),
}

/// Guard turning untrusted submissions into catalog-validated [`Answer`]s.
///
/// Submitted point values are never trusted; points and trigger flags are
/// re-read from the catalog so a tampered payload cannot skew the score.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    catalog: Arc<Catalog>,
}

impl IntakeGuard {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Validate a (possibly partial) answer set against the selected modules.
    ///
    /// The returned answers follow catalog declaration order regardless of
    /// submission order, which keeps every derived list in the score result
    /// deterministic.
    pub fn answers(
        &self,
        selected_modules: &[ModuleId],
        submissions: &[AnswerSubmission],
    ) -> Result<Vec<Answer>, InvalidAnswer> {
        let mut pending: BTreeMap<&QuestionId, &AnswerSubmission> = BTreeMap::new();
        for submission in submissions {
            if pending.insert(&submission.question_id, submission).is_some() {
                return Err(InvalidAnswer::DuplicateAnswer(
                    submission.question_id.0.clone(),
                ));
            }
        }

        let mut answers = Vec::with_capacity(pending.len());
        for module in self.catalog.modules() {
            if !selected_modules.contains(&module.id) {
                continue;
            }
            for area in &module.areas {
                for question in &area.questions {
                    let Some(submission) = pending.remove(&question.id) else {
                        continue;
                    };
                    let option = question.option(&submission.value).ok_or_else(|| {
                        InvalidAnswer::UnknownOption {
                            question: question.id.0.clone(),
                            value: submission.value.clone(),
                        }
                    })?;
                    answers.push(Answer {
                        question_id: question.id.clone(),
                        area: area.id.clone(),
                        value: option.value.clone(),
                        points: option.points,
                        trigger_flag: option.trigger_flag,
                    });
                }
            }
        }

        // Anything left over references a question outside the selected
        // modules, or no catalog question at all.
        if let Some((question_id, _)) = pending.into_iter().next() {
            return Err(match self.catalog.find_question(question_id) {
                Some(_) => InvalidAnswer::OutOfScope {
                    question: question_id.0.clone(),
                },
                None => InvalidAnswer::UnknownQuestion(question_id.0.clone()),
            });
        }

        Ok(answers)
    }
}
