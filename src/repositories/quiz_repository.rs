use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Quiz};

/// Keyed storage for quiz records. `save` has upsert semantics: a record
/// sharing the same id is overwritten. Absence on lookup is a normal
/// outcome, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn save(&self, quiz: &Quiz) -> AppResult<()>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.quizzes_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn save(&self, quiz: &Quiz) -> AppResult<()> {
        self.collection
            .replace_one(doc! { "id": quiz.id }, quiz)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }
}
