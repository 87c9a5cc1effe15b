pub mod request;
pub mod response;

pub use request::{AnswerResponse, CreateQuizParams};
pub use response::QuestionWrapper;
