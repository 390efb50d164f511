use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    // Option so that an absent field and an explicit null are rejected
    // identically by the handler.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
