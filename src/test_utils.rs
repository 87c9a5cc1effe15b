use crate::models::{
    domain::Quiz,
    dto::{AnswerResponse, QuestionWrapper},
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a standard persisted quiz
    pub fn test_quiz() -> Quiz {
        Quiz::new(5, "Science Quiz", vec![10, 11, 12])
    }

    /// Creates a resolved question for the given id
    pub fn test_question(id: i64, title: &str) -> QuestionWrapper {
        QuestionWrapper {
            id,
            question_title: title.to_string(),
            option1: "Earth".to_string(),
            option2: "Jupiter".to_string(),
            option3: "Mars".to_string(),
            option4: "Venus".to_string(),
        }
    }

    /// Creates resolved questions matching the ids of `test_quiz`
    pub fn test_questions() -> Vec<QuestionWrapper> {
        vec![
            test_question(10, "Largest planet?"),
            test_question(11, "Closest planet to the sun?"),
            test_question(12, "Red planet?"),
        ]
    }

    /// Creates submitted answers for the questions of `test_quiz`
    pub fn test_responses() -> Vec<AnswerResponse> {
        vec![
            AnswerResponse {
                id: 10,
                response: "Jupiter".to_string(),
            },
            AnswerResponse {
                id: 11,
                response: "Mercury".to_string(),
            },
            AnswerResponse {
                id: 12,
                response: "Mars".to_string(),
            },
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_quiz() {
        let quiz = test_quiz();
        assert_eq!(quiz.id, 5);
        assert_eq!(quiz.question_ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_fixtures_match_quiz_ids() {
        let quiz = test_quiz();
        let questions = test_questions();
        let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, quiz.question_ids);
    }

    #[test]
    fn test_fixtures_test_responses() {
        let responses = test_responses();
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].id, 10);
    }
}
