use serde::{Deserialize, Serialize};

/// Display-safe question representation returned by the question service.
/// Carries the prompt and the four options but no correct-answer field, so it
/// can be handed straight to a quiz taker. Never persisted; resolved fresh
/// from the remote service on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionWrapper {
    pub id: i64,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}
