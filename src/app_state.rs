use std::sync::Arc;

use crate::{
    clients::HttpQuestionServiceClient,
    config::{Config, IdStrategy},
    db::Database,
    errors::AppResult,
    repositories::MongoQuizRepository,
    services::{ClockIdGenerator, QuizIdGenerator, QuizService, SequenceIdGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, db: &Database) -> AppResult<Self> {
        let quiz_repository = Arc::new(MongoQuizRepository::new(db, &config));
        quiz_repository.ensure_indexes().await?;

        let question_service = Arc::new(HttpQuestionServiceClient::new(&config));

        let id_generator: Arc<dyn QuizIdGenerator> = match config.id_strategy {
            IdStrategy::Clock => Arc::new(ClockIdGenerator),
            IdStrategy::Sequence => Arc::new(SequenceIdGenerator::new()),
        };

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            question_service,
            id_generator,
        ));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
