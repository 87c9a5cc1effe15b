pub mod quiz_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};

#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
