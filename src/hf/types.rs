use serde::{Deserialize, Serialize};

/// Request body for the hosted question-answering task.
#[derive(Debug, Serialize)]
pub struct QaRequest {
    pub inputs: QaInputs,
}

#[derive(Debug, Serialize)]
pub struct QaInputs {
    pub question: String,
    pub context: String,
}

/// Extracted answer span with confidence and character offsets.
#[derive(Debug, Deserialize)]
pub struct QaResponse {
    pub answer: Option<String>,
    pub score: Option<f64>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// Error body the API returns on non-2xx statuses. `estimated_time`
/// accompanies 503 while the model is still being loaded onto a worker.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub estimated_time: Option<f64>,
}
