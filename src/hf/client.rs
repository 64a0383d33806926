use std::env;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::types::{ApiErrorBody, QaInputs, QaRequest, QaResponse};

const API_BASE: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "deepset/roberta-base-squad2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("HF_API_TOKEN not set. Get one at https://huggingface.co/settings/tokens")]
    TokenNotSet,

    #[error("API rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("model is still loading, try again in ~{estimated_time:.0}s")]
    ModelLoading { estimated_time: f64 },

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("model response is missing an answer span")]
    MalformedResponse,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction over the extractive question-answering backend.
/// Implemented by `HfClient` for production; mock implementations used in tests.
pub trait QaClient {
    async fn answer(&self, question: &str, context: &str) -> Result<String, QaError>;
}

#[derive(Clone)]
struct ApiToken(String);

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Clone)]
pub struct HfClient {
    http: Client,
    token: ApiToken,
    model: String,
    base_url: String,
}

impl HfClient {
    pub fn from_env(http: Client) -> Result<Self, QaError> {
        let token = env::var("HF_API_TOKEN").map_err(|_| QaError::TokenNotSet)?;
        if token.trim().is_empty() {
            return Err(QaError::TokenNotSet);
        }
        let model = env::var("SEHAT_QA_MODEL")
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            http,
            token: ApiToken(token.trim().to_string()),
            model,
            base_url: API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            token: ApiToken("test-token".to_string()),
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.to_string(),
        }
    }
}

impl QaClient for HfClient {
    /// One request per call. Failures are classified and returned — there is
    /// no retry here; callers see every error.
    async fn answer(&self, question: &str, context: &str) -> Result<String, QaError> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let request = QaRequest {
            inputs: QaInputs {
                question: question.to_string(),
                context: context.to_string(),
            },
        };

        debug_assert!(
            url.starts_with("https://") || cfg!(test),
            "API token must only be sent over HTTPS"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token.0)
            .header("User-Agent", crate::USER_AGENT)
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let classified = classify_api_error(status.as_u16(), &text);
            warn!(error = %classified, "inference API error");
            return Err(classified);
        }

        let body: QaResponse = response.json().await?;
        debug!(
            model = %self.model,
            score = body.score,
            start = body.start,
            end = body.end,
            "inference complete"
        );

        match body.answer.filter(|a| !a.is_empty()) {
            Some(answer) => Ok(answer),
            None => {
                warn!("inference API returned no answer span");
                Err(QaError::MalformedResponse)
            }
        }
    }
}

fn classify_api_error(code: u16, body: &str) -> QaError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();

    if code == 429 {
        return QaError::RateLimited;
    }
    if code == 503
        && let Some(estimated_time) = parsed.as_ref().and_then(|b| b.estimated_time)
    {
        return QaError::ModelLoading { estimated_time };
    }

    let message = parsed.and_then(|b| b.error).unwrap_or_else(|| {
        let snippet: String = body.chars().take(200).collect();
        format!("HTTP {code}: {snippet}")
    });
    QaError::Api { code, message }
}
