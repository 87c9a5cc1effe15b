use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `POST /quiz/create`. Field names follow the wire
/// contract of the original endpoint (`numQ`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizParams {
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[serde(rename = "numQ")]
    #[validate(range(min = 1))]
    pub num_q: i32,

    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

/// A single submitted answer. Opaque to this service: it is forwarded to the
/// scoring call unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub response: String,
}
