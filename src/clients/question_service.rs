use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    errors::AppResult,
    models::dto::{AnswerResponse, QuestionWrapper},
};

/// Status and optional body of a remote call that completed at the transport
/// level. A transport failure surfaces as an `Err` from the client instead;
/// a non-success status or a null body arrives here as a response that is
/// simply not usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> RemoteResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn with_status(status: u16, body: Option<T>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The question-management service this quiz service orchestrates against.
/// It hands out question ids for a category, resolves ids back into full
/// question bodies, and scores a list of submitted answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionServiceClient: Send + Sync {
    async fn get_questions_for_quiz(
        &self,
        category: &str,
        num_q: i32,
    ) -> AppResult<RemoteResponse<Vec<i64>>>;

    async fn get_questions_from_id(
        &self,
        question_ids: &[i64],
    ) -> AppResult<RemoteResponse<Vec<QuestionWrapper>>>;

    async fn get_score(
        &self,
        responses: &[AnswerResponse],
    ) -> AppResult<RemoteResponse<i32>>;
}

pub struct HttpQuestionServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuestionServiceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            // No per-request timeout: a slow question service blocks the
            // handling task for the duration of the call.
            http: reqwest::Client::new(),
            base_url: config
                .question_service_url
                .trim_end_matches('/')
                .to_string(),
        }
    }

    async fn read_response<T>(response: reqwest::Response) -> AppResult<RemoteResponse<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        // Only success responses are expected to carry a JSON body; a `null`
        // body deserializes to None and is left for the caller to judge.
        let body = if status.is_success() {
            response.json::<Option<T>>().await?
        } else {
            None
        };

        Ok(RemoteResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl QuestionServiceClient for HttpQuestionServiceClient {
    async fn get_questions_for_quiz(
        &self,
        category: &str,
        num_q: i32,
    ) -> AppResult<RemoteResponse<Vec<i64>>> {
        let response = self
            .http
            .get(format!("{}/question/generate", self.base_url))
            .query(&[("categoryName", category), ("numQuestions", &num_q.to_string())])
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn get_questions_from_id(
        &self,
        question_ids: &[i64],
    ) -> AppResult<RemoteResponse<Vec<QuestionWrapper>>> {
        let response = self
            .http
            .post(format!("{}/question/getQuestions", self.base_url))
            .json(&question_ids)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn get_score(
        &self,
        responses: &[AnswerResponse],
    ) -> AppResult<RemoteResponse<i32>> {
        let response = self
            .http
            .post(format!("{}/question/getScore", self.base_url))
            .json(&responses)
            .send()
            .await?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_remote_response_success_range() {
        assert!(RemoteResponse::ok(vec![1i64]).is_success());
        assert!(RemoteResponse::<i32>::with_status(204, None).is_success());
        assert!(!RemoteResponse::<i32>::with_status(404, None).is_success());
        assert!(!RemoteResponse::<i32>::with_status(500, None).is_success());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut config = Config::test_config();
        config.question_service_url = "http://localhost:8081/".to_string();

        let client = HttpQuestionServiceClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:8081");
    }
}
