//! Application configuration.
//!
//! Centralized configuration for the Poetry to Music frontend.
//! These are compile-time defaults; [`AppConfig`] carries them into the
//! controller and the HTTP client so tests can substitute their own.

/// Backend API base URL.
///
/// Empty means "same origin as the page", which is how the analysis
/// service serves this frontend.
pub const BACKEND_URL: &str = "";

/// Path of the analysis endpoint, relative to [`BACKEND_URL`].
pub const ANALYZE_PATH: &str = "/analyze";

/// Path prefix of the MIDI download endpoint.
pub const DOWNLOAD_PATH: &str = "/download";

/// Upper bound on a single analysis request (in milliseconds).
pub const REQUEST_TIMEOUT_MS: u32 = 120_000;

/// Lifetime of a transient notice before it removes itself.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Instrument used when the user leaves every checkbox empty.
pub const DEFAULT_INSTRUMENT: &str = "piano";

/// Title sent when the title field is blank.
pub const DEFAULT_TITLE: &str = "Untitled Poem";

/// Instruments accepted by the composition service, in display order.
pub const INSTRUMENTS: &[&str] = &[
    "piano",
    "acoustic_guitar",
    "electric_guitar",
    "strings",
    "violin",
    "cello",
    "flute",
    "clarinet",
    "drums",
];

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Generate Music";

/// Submit button label while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";

/// Runtime configuration injected into the controller and the client.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL prepended to every endpoint path.
    pub backend_url: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.backend_url, ANALYZE_PATH)
    }

    /// Full URL that downloads the MIDI file of a composition.
    pub fn download_url(&self, composition_id: &str) -> String {
        format!("{}{}/{}", self.backend_url, DOWNLOAD_PATH, composition_id)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            request_timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_are_same_origin() {
        let config = AppConfig::default();
        assert_eq!(config.analyze_url(), "/analyze");
        assert_eq!(config.download_url("42"), "/download/42");
    }

    #[test]
    fn test_custom_backend_url() {
        let config = AppConfig {
            backend_url: "http://localhost:5000".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.analyze_url(), "http://localhost:5000/analyze");
        assert_eq!(config.download_url("7"), "http://localhost:5000/download/7");
    }

    #[test]
    fn test_default_instrument_is_offered() {
        assert!(INSTRUMENTS.contains(&DEFAULT_INSTRUMENT));
    }
}
