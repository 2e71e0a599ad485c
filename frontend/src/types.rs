//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency between the controller, the renderer and
//! the components.
//!
//! # Categories
//!
//! - **Request Types** - What the form sends to `/analyze`
//! - **Analysis Types** - The loosely typed analysis document, normalized
//! - **Composition Types** - Handle to the generated MIDI file
//! - **Notice Types** - Transient page notices
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Request Types
// =============================================================================

/// Body of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Trimmed poem text, never blank
    pub poem_text: String,
    /// Trimmed title, defaulted when blank
    pub title: String,
    /// Selected instruments, never empty
    pub instruments: Vec<String>,
}

// =============================================================================
// Analysis Types
// =============================================================================

/// Sentiment block of the analysis document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sentiment {
    /// "positive", "negative", "neutral" or anything else the server invents
    pub mood: Option<String>,
    /// In [-1, 1]
    pub polarity: Option<f64>,
    /// In [0, 1]
    pub subjectivity: Option<f64>,
}

/// One literary device entry.
///
/// The service emits either a bare boolean or an object with
/// explanation text; both normalize to this shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiteraryDevice {
    pub detected: bool,
    pub explanation: Option<String>,
    pub musical_impact: Option<String>,
}

impl LiteraryDevice {
    /// Normalize a raw device value. `None` for values that carry no
    /// detection information at all (null, numbers, arrays...).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(detected) => Some(Self {
                detected: *detected,
                ..Self::default()
            }),
            Value::Object(_) => Some(Self {
                detected: value.get("detected").and_then(Value::as_bool).unwrap_or(false),
                explanation: text_field(value, "explanation"),
                musical_impact: text_field(value, "musical_impact"),
            }),
            _ => None,
        }
    }
}

/// Analysis document returned by the service.
///
/// Every field is optional. Normalization happens once, in
/// [`AnalysisResult::from_value`]: a field with the wrong JSON type is
/// treated as absent instead of rejecting the whole payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
    pub line_count: Option<u64>,
    pub total_syllables: Option<u64>,
    /// One entry per line, in poem order
    pub syllable_counts: Vec<u64>,
    pub meter: Option<String>,
    pub rhyme_scheme: Option<String>,
    pub sentiment: Sentiment,
    pub key_suggestion: Option<String>,
    /// Beats per minute
    pub tempo_suggestion: Option<i64>,
    pub time_signature: Option<String>,
    /// Devices in the order the server listed them
    pub literary_devices: Vec<(String, LiteraryDevice)>,
}

impl AnalysisResult {
    /// Build from the raw `analysis` value of a response.
    pub fn from_value(value: &Value) -> Self {
        let sentiment = value.get("sentiment");

        Self {
            line_count: value.get("line_count").and_then(as_count),
            total_syllables: value.get("total_syllables").and_then(as_count),
            syllable_counts: value
                .get("syllable_counts")
                .and_then(Value::as_array)
                .map(|counts| counts.iter().filter_map(as_count).collect())
                .unwrap_or_default(),
            meter: text_field(value, "meter"),
            rhyme_scheme: text_field(value, "rhyme_scheme"),
            sentiment: Sentiment {
                mood: sentiment.and_then(|s| text_field(s, "mood")),
                polarity: sentiment.and_then(|s| s.get("polarity")).and_then(Value::as_f64),
                subjectivity: sentiment
                    .and_then(|s| s.get("subjectivity"))
                    .and_then(Value::as_f64),
            },
            key_suggestion: text_field(value, "key_suggestion"),
            tempo_suggestion: value.get("tempo_suggestion").and_then(|tempo| {
                tempo
                    .as_i64()
                    .or_else(|| tempo.as_f64().map(|bpm| bpm.round() as i64))
            }),
            time_signature: text_field(value, "time_signature"),
            literary_devices: value
                .get("literary_devices")
                .and_then(Value::as_object)
                .map(|devices| {
                    devices
                        .iter()
                        .filter_map(|(key, raw)| {
                            LiteraryDevice::from_value(raw).map(|device| (key.clone(), device))
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Non-blank, trimmed string field.
fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Non-negative integer, accepting floats the way JSON encoders sometimes emit them.
fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|count| *count >= 0.0)
            .map(|count| count.round() as u64)
    })
}

// =============================================================================
// Composition Types
// =============================================================================

/// Reference to the MIDI file produced by one successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionHandle {
    /// Server identifier (integers are stringified)
    pub composition_id: String,
    /// Generated file name, if the server reported one
    pub midi_filename: Option<String>,
}

/// Successful outcome of an analysis request.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,
    /// `None` when the success payload carried no composition id
    pub composition: Option<CompositionHandle>,
}

// =============================================================================
// Notice Types
// =============================================================================

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Warning => "alert-warning",
            NoticeLevel::Error => "alert-danger",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Shown when the poem field is blank at submit time.
pub const EMPTY_POEM_MESSAGE: &str = "Please enter poem text.";

/// Shown when the server fails without saying why.
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred while analyzing your poem.";

/// Shown for every transport failure; the cause only goes to the console.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred. Please try again.";

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Local form validation failed; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered but reported a failure.
    #[error("Analysis failed: {}", .0.as_deref().unwrap_or("no message from server"))]
    Application(Option<String>),

    /// Network, timeout or unreadable response.
    #[error("Network error: {0}")]
    Transport(String),
}

impl AppError {
    /// Text for the error surface. Transport details never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Application(Some(message)) => message.clone(),
            AppError::Application(None) => GENERIC_ANALYSIS_ERROR.to_string(),
            AppError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_analysis_document() {
        let raw = json!({
            "line_count": 4,
            "total_syllables": 28,
            "syllable_counts": [8, 6, 8, 6],
            "meter": "iambic",
            "rhyme_scheme": "ABAB",
            "sentiment": {"mood": "positive", "polarity": 0.45, "subjectivity": 0.6},
            "key_suggestion": "C",
            "tempo_suggestion": 139,
            "time_signature": "4/4",
            "literary_devices": {
                "repetition": {"detected": true, "explanation": "Words recur", "musical_impact": "Motifs recur"},
                "alliteration": {"detected": false, "explanation": "x", "musical_impact": "y"}
            }
        });

        let analysis = AnalysisResult::from_value(&raw);
        assert_eq!(analysis.line_count, Some(4));
        assert_eq!(analysis.syllable_counts, vec![8, 6, 8, 6]);
        assert_eq!(analysis.meter.as_deref(), Some("iambic"));
        assert_eq!(analysis.sentiment.polarity, Some(0.45));
        assert_eq!(analysis.tempo_suggestion, Some(139));
        // Server order survives normalization
        assert_eq!(analysis.literary_devices[0].0, "repetition");
        assert_eq!(analysis.literary_devices[1].0, "alliteration");
        assert!(!analysis.literary_devices[1].1.detected);
    }

    #[test]
    fn test_every_field_absent() {
        let analysis = AnalysisResult::from_value(&json!({}));
        assert_eq!(analysis, AnalysisResult::default());

        let analysis = AnalysisResult::from_value(&Value::Null);
        assert_eq!(analysis, AnalysisResult::default());
    }

    #[test]
    fn test_wrong_types_are_treated_as_absent() {
        let raw = json!({
            "line_count": "four",
            "syllable_counts": [8, "six", null, 7.0],
            "meter": 12,
            "rhyme_scheme": "   ",
            "sentiment": "happy",
            "tempo_suggestion": 131.6,
            "literary_devices": ["alliteration"]
        });

        let analysis = AnalysisResult::from_value(&raw);
        assert_eq!(analysis.line_count, None);
        assert_eq!(analysis.syllable_counts, vec![8, 7]);
        assert_eq!(analysis.meter, None);
        assert_eq!(analysis.rhyme_scheme, None);
        assert_eq!(analysis.sentiment, Sentiment::default());
        assert_eq!(analysis.tempo_suggestion, Some(132));
        assert!(analysis.literary_devices.is_empty());
    }

    #[test]
    fn test_boolean_literary_devices() {
        // Shape the reference analysis service actually emits
        let raw = json!({
            "literary_devices": {"alliteration": true, "repetition": false, "metaphor_simile": null}
        });

        let analysis = AnalysisResult::from_value(&raw);
        assert_eq!(analysis.literary_devices.len(), 2);
        assert_eq!(
            analysis.literary_devices[0],
            (
                "alliteration".to_string(),
                LiteraryDevice { detected: true, explanation: None, musical_impact: None }
            )
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::Validation(EMPTY_POEM_MESSAGE.into()).user_message(),
            "Please enter poem text."
        );
        assert_eq!(
            AppError::Application(Some("poem too short".into())).user_message(),
            "poem too short"
        );
        assert_eq!(AppError::Application(None).user_message(), GENERIC_ANALYSIS_ERROR);

        let transport = AppError::Transport("connection refused".into());
        assert_eq!(transport.user_message(), NETWORK_ERROR_MESSAGE);
        assert!(transport.to_string().contains("connection refused"));
    }

    #[test]
    fn test_request_serialization() {
        let request = SubmissionRequest {
            poem_text: "Roses are red".into(),
            title: "Untitled Poem".into(),
            instruments: vec!["piano".into()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"poem_text": "Roses are red", "title": "Untitled Poem", "instruments": ["piano"]})
        );
    }
}
