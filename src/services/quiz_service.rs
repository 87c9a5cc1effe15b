use std::sync::Arc;

use crate::{
    clients::QuestionServiceClient,
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{AnswerResponse, QuestionWrapper},
    },
    repositories::QuizRepository,
    services::id_generator::QuizIdGenerator,
};

/// Orchestrates the question service and the quiz store. Each operation is an
/// independent request/response cycle; no state is shared between them beyond
/// the store itself.
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    question_service: Arc<dyn QuestionServiceClient>,
    id_generator: Arc<dyn QuizIdGenerator>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        question_service: Arc<dyn QuestionServiceClient>,
        id_generator: Arc<dyn QuizIdGenerator>,
    ) -> Self {
        Self {
            repository,
            question_service,
            id_generator,
        }
    }

    /// Requests `num_q` question ids for `category` from the question service
    /// and persists a quiz holding them verbatim, even when fewer than
    /// `num_q` come back. A non-success remote status fails creation instead
    /// of persisting a quiz with no id list.
    pub async fn create_quiz(&self, category: &str, num_q: i32, title: &str) -> AppResult<Quiz> {
        let remote = self
            .question_service
            .get_questions_for_quiz(category, num_q)
            .await?;

        if !remote.is_success() {
            return Err(AppError::RemoteService(format!(
                "question service returned status {} generating questions for category '{}'",
                remote.status, category
            )));
        }

        let question_ids = remote.body.ok_or_else(|| {
            AppError::RemoteService(format!(
                "question service returned no question ids for category '{}'",
                category
            ))
        })?;

        let quiz = Quiz::new(self.id_generator.generate(), title, question_ids);
        self.repository.save(&quiz).await?;

        log::info!(
            "Quiz created successfully with ID: {} for category: {}",
            quiz.id,
            category
        );
        Ok(quiz)
    }

    /// Resolves the stored question ids of a quiz into full question bodies.
    /// An absent quiz and a remote resolution that yields no usable data both
    /// come back as `NotFound`; the remote call is skipped entirely when the
    /// quiz does not exist.
    pub async fn get_quiz_question(&self, id: i64) -> AppResult<Vec<QuestionWrapper>> {
        let Some(quiz) = self.repository.find_by_id(id).await? else {
            log::warn!("Quiz with id {} not found", id);
            return Err(AppError::NotFound(format!("Quiz with id {} not found", id)));
        };

        let remote = self
            .question_service
            .get_questions_from_id(&quiz.question_ids)
            .await?;

        match remote.body {
            Some(questions) if remote.is_success() => {
                log::info!("Fetched {} questions for quiz ID: {}", questions.len(), id);
                Ok(questions)
            }
            _ => {
                log::warn!(
                    "Failed to retrieve question details for quiz ID {}. Status: {}",
                    id,
                    remote.status
                );
                Err(AppError::NotFound(format!(
                    "No question details available for quiz with id {}",
                    id
                )))
            }
        }
    }

    /// Delegates scoring to the question service, passing the submitted
    /// answers through unmodified. `id` is recorded only for logging.
    pub async fn submit_quiz(&self, id: i64, responses: &[AnswerResponse]) -> AppResult<i32> {
        let remote = self.question_service.get_score(responses).await?;

        match remote.body {
            Some(score) if remote.is_success() => {
                log::info!("Scored quiz ID: {} with {} responses", id, responses.len());
                Ok(score)
            }
            _ => Err(AppError::RemoteService(format!(
                "question service returned status {} scoring quiz {}",
                remote.status, id
            ))),
        }
    }
}
