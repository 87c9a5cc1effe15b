pub mod question_service;

pub use question_service::{HttpQuestionServiceClient, QuestionServiceClient, RemoteResponse};

#[cfg(test)]
pub use question_service::MockQuestionServiceClient;
