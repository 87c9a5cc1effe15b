use std::env;

/// Which quiz id strategy the service runs with. `Clock` is the legacy
/// placeholder (wall-clock derived, collision-prone); `Sequence` is the
/// default counter-based strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    Clock,
    Sequence,
}

impl IdStrategy {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "clock" => IdStrategy::Clock,
            _ => IdStrategy::Sequence,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub quizzes_collection: String,
    pub question_service_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub id_strategy: IdStrategy,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quiz-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            question_service_url: env::var("QUESTION_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            id_strategy: env::var("QUIZ_ID_STRATEGY")
                .map(|s| IdStrategy::parse(&s))
                .unwrap_or(IdStrategy::Sequence),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quiz-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            question_service_url: "http://localhost:8081".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            id_strategy: IdStrategy::Sequence,
        }
    }
}
