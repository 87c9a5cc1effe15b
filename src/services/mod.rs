pub mod id_generator;
pub mod quiz_service;

pub use id_generator::{ClockIdGenerator, QuizIdGenerator, SequenceIdGenerator};
pub use quiz_service::QuizService;
