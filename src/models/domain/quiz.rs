use serde::{Deserialize, Serialize};

/// A persisted quiz: a title plus the ordered question ids handed out by the
/// question service at creation time. The id list is recorded verbatim and
/// never re-validated against the remote corpus afterwards, so a later fetch
/// may resolve fewer questions than were originally requested.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub question_ids: Vec<i64>,
}

impl Quiz {
    pub fn new(id: i64, title: &str, question_ids: Vec<i64>) -> Self {
        Quiz {
            id,
            title: title.to_string(),
            question_ids,
        }
    }
}
