//! Route contract error types.

/// Errors from the itinerary request contract.
///
/// Every failure path inside the contract is re-raised as exactly one of
/// these variants before crossing the module boundary; callers never see a
/// raw transport error. `Display` is the diagnostic form for logs.
/// [`RouteError::user_message`] is the text shown to the user and never
/// contains raw model output.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// API key missing or blank at call time.
    #[error("API key not configured: {0}")]
    NotConfigured(String),

    /// The model reply carried no text at all.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Text was present but did not decode as a route set.
    ///
    /// `body` holds the raw model text for the error log; it is never
    /// included in the user-facing message.
    #[error("malformed model response: {message}")]
    MalformedResponse { message: String, body: String },

    /// Credential rejected by the service.
    #[error("unauthorized (credential rejected)")]
    Unauthorized,

    /// Rate limited by the service.
    #[error("rate limited by the generative model service")]
    RateLimited,

    /// Service temporarily unavailable.
    #[error("generative model service unavailable")]
    Unavailable,

    /// Low-level connection failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Any other request failure, with the underlying message.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl RouteError {
    /// Map an HTTP error status to a contract error.
    ///
    /// 403 also covers 401: both mean the credential was rejected.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => RouteError::Unauthorized,
            429 => RouteError::RateLimited,
            503 => RouteError::Unavailable,
            _ => RouteError::Api { status, message },
        }
    }

    /// Classify a transport-layer failure.
    ///
    /// Prefers reqwest's typed signals (connect/timeout flags, attached
    /// status) and only falls back to scanning the error text when the
    /// failure is described as nothing but a string.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return RouteError::Network(err.to_string());
        }
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), err.to_string());
        }
        Self::from_message(err.to_string())
    }

    /// Substring fallback for unstructured error text.
    ///
    /// Each status substring is checked on its own, so extra text around
    /// the code does not change the classification.
    pub fn from_message(message: String) -> Self {
        if message.contains("403") {
            return RouteError::Unauthorized;
        }
        if message.contains("429") {
            return RouteError::RateLimited;
        }
        if message.contains("503") {
            return RouteError::Unavailable;
        }
        if message.contains("Failed to fetch") || message.contains("connection") {
            return RouteError::Network(message);
        }
        RouteError::Api { status: 0, message }
    }

    /// The Traditional-Chinese message shown to the user.
    ///
    /// Raw model text never appears here; it only goes to the error log.
    pub fn user_message(&self) -> String {
        match self {
            RouteError::NotConfigured(_) => {
                "尚未設定 API 金鑰，請聯絡管理員設定 GEMINI_API_KEY。".to_string()
            }
            RouteError::EmptyResponse => "無法從 AI 獲取回應，請稍後再試。".to_string(),
            RouteError::MalformedResponse { .. } => "無法生成有效路線，請稍後再試。".to_string(),
            RouteError::Unauthorized => "API 金鑰無效或權限不足。".to_string(),
            RouteError::RateLimited => "請求太頻繁，請稍後再試。".to_string(),
            RouteError::Unavailable => "服務暫時無法使用，請稍後再試。".to_string(),
            RouteError::Network(_) => "網絡錯誤，請檢查連線後再試。".to_string(),
            RouteError::Api { message, .. } => {
                format!("規劃路線時發生錯誤：{message}")
            }
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::from_transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            RouteError::from_status(403, String::new()),
            RouteError::Unauthorized
        ));
        assert!(matches!(
            RouteError::from_status(401, String::new()),
            RouteError::Unauthorized
        ));
        assert!(matches!(
            RouteError::from_status(429, String::new()),
            RouteError::RateLimited
        ));
        assert!(matches!(
            RouteError::from_status(503, String::new()),
            RouteError::Unavailable
        ));
        assert!(matches!(
            RouteError::from_status(500, "boom".to_string()),
            RouteError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn message_fallback_ignores_surrounding_text() {
        // Each status substring classifies on its own, whatever else the
        // message says.
        assert!(matches!(
            RouteError::from_message("upstream said 429 Too Many Requests (zone hk)".into()),
            RouteError::RateLimited
        ));
        assert!(matches!(
            RouteError::from_message("got 503 from gateway at 10:00".into()),
            RouteError::Unavailable
        ));
        assert!(matches!(
            RouteError::from_message("HTTP 403: key was revoked yesterday".into()),
            RouteError::Unauthorized
        ));
    }

    #[test]
    fn fetch_failure_maps_to_network() {
        let err = RouteError::from_message("TypeError: Failed to fetch".into());
        assert!(matches!(err, RouteError::Network(_)));
        assert!(err.user_message().contains("網絡"));
    }

    #[test]
    fn unmatched_message_becomes_api_error() {
        let err = RouteError::from_message("something odd happened".into());
        match err {
            RouteError::Api { status, message } => {
                assert_eq!(status, 0);
                assert_eq!(message, "something odd happened");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn malformed_user_message_hides_raw_body() {
        let err = RouteError::MalformedResponse {
            message: "expected value at line 1".to_string(),
            body: "not json at all".to_string(),
        };
        assert!(!err.user_message().contains("not json at all"));
        // The diagnostic Display carries the parser message for logs
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn unknown_error_appends_underlying_message() {
        let err = RouteError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert!(err.user_message().contains("internal"));
    }
}
