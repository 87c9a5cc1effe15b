pub mod quiz_handler;

pub use quiz_handler::{
    create_quiz, get_quiz_question, health_check, health_check_ready, submit_quiz,
};
