use serde::{Deserialize, Serialize};

/// Тело ответа сервера при ошибке.
///
/// The server answers failures either as `{"error": "..."}`, as
/// `{"message": "..."}` or as a bare text body; both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extract a human readable reason from a raw response body.
    pub fn reason_from_body(body: &str) -> Option<String> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed
                .error
                .or(parsed.message)
                .filter(|s| !s.trim().is_empty()),
            // Spring returns "Error: ..." as text/plain from the save endpoints
            Err(_) if !body.starts_with('{') && !body.starts_with('<') => Some(body.to_string()),
            Err(_) => None,
        }
    }
}
