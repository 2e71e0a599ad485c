//! HTTP client for the poem analysis endpoint.
//!
//! [`AnalysisClient`] is the seam the controller depends on;
//! [`HttpAnalysisClient`] is the browser implementation on top of
//! `gloo-net`. Response interpretation is a pure function so it can be
//! tested without a network.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::config::AppConfig;
use crate::types::{
    AnalysisResponse, AnalysisResult, AppError, AppResult, CompositionHandle, SubmissionRequest,
};

/// Something that can analyze a poem.
#[allow(async_fn_in_trait)]
pub trait AnalysisClient {
    /// Send one request and classify the outcome.
    ///
    /// `Err(AppError::Application)` for failures the server reported,
    /// `Err(AppError::Transport)` for everything that never produced a
    /// readable answer.
    async fn analyze(&self, request: &SubmissionRequest) -> AppResult<AnalysisResponse>;
}

/// `POST /analyze` over `fetch`, bounded by the configured timeout.
#[derive(Clone, Debug)]
pub struct HttpAnalysisClient {
    config: AppConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn post(&self, request: &SubmissionRequest) -> AppResult<AnalysisResponse> {
        let url = self.config.analyze_url();

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            log::warn!("⚠️ Analysis endpoint answered {}", response.status());
        }

        interpret_response(response.ok(), &body)
    }
}

impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, request: &SubmissionRequest) -> AppResult<AnalysisResponse> {
        let timeout_ms = self.config.request_timeout_ms;
        let request = self.post(request);
        let timeout = TimeoutFuture::new(timeout_ms);
        futures::pin_mut!(request, timeout);

        match future::select(request, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(AppError::Transport(format!(
                "No response after {} ms",
                timeout_ms
            ))),
        }
    }
}

/// Classify a response from its status and body.
///
/// - readable body, `ok` status, `success: true` -> analysis
/// - readable body otherwise -> application error with the server's `error`
/// - unreadable body, whatever the status -> transport error
pub fn interpret_response(ok: bool, body: &str) -> AppResult<AnalysisResponse> {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return Err(AppError::Transport(format!(
            "Failed to parse response (ok: {})",
            ok
        )));
    };

    let success = payload
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !ok || !success {
        let message = payload
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string);
        return Err(AppError::Application(message));
    }

    Ok(AnalysisResponse {
        analysis: AnalysisResult::from_value(payload.get("analysis").unwrap_or(&Value::Null)),
        composition: composition_handle(&payload),
    })
}

/// Composition ids arrive as integers from the reference service but may be strings.
///
/// String ids end up as a URL path segment, so only ASCII alphanumerics,
/// `-`, `_` and `.` are accepted.
fn composition_handle(payload: &Value) -> Option<CompositionHandle> {
    let composition_id = match payload.get("composition_id")? {
        Value::String(id) if is_path_safe(id.trim()) => id.trim().to_string(),
        Value::String(id) => {
            log::warn!("⚠️ Ignoring composition id not usable in a URL: {:?}", id);
            return None;
        }
        Value::Number(id) => id.to_string(),
        _ => return None,
    };

    Some(CompositionHandle {
        composition_id,
        midi_filename: payload
            .get("midi_filename")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn is_path_safe(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NETWORK_ERROR_MESSAGE;

    #[test]
    fn test_success_response() {
        let body = r#"{
            "success": true,
            "composition_id": 17,
            "midi_filename": "untitled_poem_1700000000.mid",
            "message": "Poem analyzed and music generated successfully!",
            "analysis": {
                "line_count": 2,
                "syllable_counts": [4, 3],
                "sentiment": {"mood": "positive", "polarity": 0.5, "subjectivity": 0.6},
                "tempo_suggestion": 140
            }
        }"#;

        let response = interpret_response(true, body).unwrap();
        assert_eq!(response.analysis.line_count, Some(2));
        assert_eq!(response.analysis.tempo_suggestion, Some(140));

        let composition = response.composition.unwrap();
        assert_eq!(composition.composition_id, "17");
        assert_eq!(
            composition.midi_filename.as_deref(),
            Some("untitled_poem_1700000000.mid")
        );
    }

    #[test]
    fn test_string_composition_id() {
        let body = r#"{"success": true, "analysis": {}, "composition_id": "abc-1"}"#;
        let response = interpret_response(true, body).unwrap();
        assert_eq!(response.composition.unwrap().composition_id, "abc-1");
    }

    #[test]
    fn test_success_without_composition_id() {
        let body = r#"{"success": true, "analysis": {"meter": "iambic"}}"#;
        let response = interpret_response(true, body).unwrap();
        assert!(response.composition.is_none());
        assert_eq!(response.analysis.meter.as_deref(), Some("iambic"));
    }

    #[test]
    fn test_success_without_analysis() {
        let response = interpret_response(true, r#"{"success": true, "composition_id": 1}"#).unwrap();
        assert_eq!(response.analysis, AnalysisResult::default());
    }

    #[test]
    fn test_application_failure_with_message() {
        let err = interpret_response(true, r#"{"success": false, "error": "poem too short"}"#)
            .unwrap_err();
        assert_eq!(err, AppError::Application(Some("poem too short".to_string())));
        assert_eq!(err.user_message(), "poem too short");
    }

    #[test]
    fn test_application_failure_without_message() {
        let err = interpret_response(true, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err, AppError::Application(None));

        let err = interpret_response(true, r#"{"success": false, "error": ""}"#).unwrap_err();
        assert_eq!(err, AppError::Application(None));
    }

    #[test]
    fn test_error_status_uses_server_message() {
        // The reference service answers 400 with only an "error" field
        let err = interpret_response(false, r#"{"error": "Please provide poem text"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Please provide poem text");

        // Even a body claiming success is a failure on an error status
        let err = interpret_response(false, r#"{"success": true, "analysis": {}}"#).unwrap_err();
        assert_eq!(err, AppError::Application(None));
    }

    #[test]
    fn test_unreadable_bodies() {
        let err = interpret_response(false, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);

        let err = interpret_response(false, "<html>500 Internal Server Error</html>").unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));

        let err = interpret_response(true, "not json").unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[test]
    fn test_composition_id_must_be_path_safe() {
        for id in ["../etc", "a/b", "x?y=1", "a b", "..", ""] {
            let body = serde_json::json!({"success": true, "composition_id": id}).to_string();
            let response = interpret_response(true, &body).unwrap();
            assert!(response.composition.is_none(), "accepted {:?}", id);
        }

        let body = r#"{"success": true, "composition_id": " poem_1.v2 "}"#;
        let response = interpret_response(true, body).unwrap();
        assert_eq!(response.composition.unwrap().composition_id, "poem_1.v2");
    }
}
