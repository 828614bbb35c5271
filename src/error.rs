use thiserror::Error;

/// A question record that breaks the answer-key invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question has no options")]
    NoOptions,
    #[error("question has an empty answer key")]
    NoAnswer,
    #[error("answer {answer} is outside 1..={options}")]
    AnswerOutOfRange { answer: usize, options: usize },
}

/// Failure to obtain a question resource. Surfaced as a stuck loading screen.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResourceLoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("question resource is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Failure of the explanation request. Only ever shown inside the dialog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExplainError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("network error: {0}")]
    Network(String),
    #[error("service error: {0}")]
    Service(String),
    #[error("unexpected response payload")]
    Malformed,
}

impl ExplainError {
    pub fn user_message(&self) -> String {
        match self {
            ExplainError::MissingCredential => "Enter a Gemini API key to continue.".into(),
            ExplainError::Network(_) => "Failed to fetch from Gemini API.".into(),
            ExplainError::Service(message) => message.clone(),
            ExplainError::Malformed => "Unexpected response from Gemini API.".into(),
        }
    }
}
