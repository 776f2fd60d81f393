use serde::Serialize;
use serde_json::Value;

/// Success shape of the relay endpoint: the extracted document text plus the
/// verbatim upstream payload.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
    pub raw: Value,
}

/// Success shape of the offline endpoint.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
