use tracing::{debug, info};

use crate::hf::client::{QaClient, QaError};

use super::{Lang, responses};

/// Context handed to the extractive QA model for every fallback query.
const QA_CONTEXT: &str = "This is a healthcare chatbot providing medical advice.";

/// Answers a single query: lowercase it, detect the language, try the canned
/// table, and otherwise ask the model once. Canned hits never touch the
/// network; a model failure propagates to the caller as-is.
///
/// The fallback path ignores the detected language — the model answers in
/// its own language regardless of the query script.
pub async fn resolve(client: &impl QaClient, input: &str) -> Result<String, QaError> {
    let normalized = input.to_lowercase();
    let lang = Lang::detect(&normalized);

    if let Some(answer) = responses::lookup(&normalized, lang) {
        debug!(?lang, "canned response hit");
        return Ok(answer.to_string());
    }

    info!(?lang, "no canned match, querying model");
    client.answer(&normalized, QA_CONTEXT).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockQa {
        responses: Mutex<VecDeque<Result<String, QaError>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockQa {
        fn with_answers(answers: Vec<&str>) -> Self {
            Self {
                responses: Mutex::new(answers.into_iter().map(|a| Ok(a.to_string())).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: QaError) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([Err(error)])),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn captured_calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl QaClient for MockQa {
        async fn answer(&self, question: &str, context: &str) -> Result<String, QaError> {
            self.calls
                .lock()
                .unwrap()
                .push((question.to_string(), context.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(QaError::RateLimited))
        }
    }

    #[tokio::test]
    async fn canned_hit_skips_model() {
        let mock = MockQa::with_answers(vec![]);

        let answer = resolve(&mock, "hello there").await.unwrap();

        assert_eq!(answer, "Namaste!! How can I assist you today?");
        assert!(mock.captured_calls().is_empty());
    }

    #[tokio::test]
    async fn uppercase_input_is_folded_before_lookup() {
        let mock = MockQa::with_answers(vec![]);

        let answer = resolve(&mock, "HELLO!").await.unwrap();

        assert_eq!(answer, "Namaste!! How can I assist you today?");
    }

    #[tokio::test]
    async fn hindi_query_gets_hindi_canned_answer() {
        let mock = MockQa::with_answers(vec![]);

        let answer = resolve(&mock, "नमस्ते, hello").await.unwrap();

        assert_eq!(answer, "नमस्ते!! मैं आज आपकी कैसे मदद कर सकता हूँ?");
        assert!(mock.captured_calls().is_empty());
    }

    #[tokio::test]
    async fn first_defined_trigger_wins_end_to_end() {
        let mock = MockQa::with_answers(vec![]);

        let answer = resolve(&mock, "I need to book appointment please")
            .await
            .unwrap();

        // "appointment" is defined before "book appointment" and must win.
        assert!(answer.starts_with("You can book an appointment"));
        assert!(mock.captured_calls().is_empty());
    }

    #[tokio::test]
    async fn miss_queries_model_once_with_fixed_context() {
        let mock = MockQa::with_answers(vec!["an extracted span"]);

        let answer = resolve(&mock, "What Is Diabetes").await.unwrap();

        assert_eq!(answer, "an extracted span");
        let calls = mock.captured_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "what is diabetes");
        assert_eq!(
            calls[0].1,
            "This is a healthcare chatbot providing medical advice."
        );
    }

    #[tokio::test]
    async fn devanagari_query_without_trigger_falls_through() {
        let mock = MockQa::with_answers(vec!["उत्तर"]);

        let answer = resolve(&mock, "नमस्ते").await.unwrap();

        // Detected as Hindi, but no canned key is Devanagari, so the model
        // is asked with the query itself.
        assert_eq!(answer, "उत्तर");
        let calls = mock.captured_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "नमस्ते");
    }

    #[tokio::test]
    async fn resolution_is_idempotent_under_deterministic_model() {
        let mock = MockQa::with_answers(vec!["same answer", "same answer"]);

        let first = resolve(&mock, "what is diabetes").await.unwrap();
        let second = resolve(&mock, "what is diabetes").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(mock.captured_calls().len(), 2);
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let mock = MockQa::failing(QaError::RateLimited);

        let err = resolve(&mock, "what is diabetes").await.unwrap_err();

        assert!(matches!(err, QaError::RateLimited));
    }
}
