//! Poem form model.
//!
//! A typed snapshot of what the user entered, and the rules that turn it
//! into a [`SubmissionRequest`].

use crate::config::{DEFAULT_INSTRUMENT, DEFAULT_TITLE, INSTRUMENTS};
use crate::types::{AppError, AppResult, SubmissionRequest, EMPTY_POEM_MESSAGE};

/// One instrument checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstrumentChoice {
    /// Value sent to the server (e.g. "acoustic_guitar")
    pub value: String,
    pub checked: bool,
}

impl InstrumentChoice {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }

    /// Human label, e.g. "Acoustic Guitar".
    pub fn label(&self) -> String {
        crate::render::title_case(&self.value)
    }
}

/// The instrument list shown on page load: every offered instrument,
/// with only the default one checked.
pub fn default_instruments() -> Vec<InstrumentChoice> {
    INSTRUMENTS
        .iter()
        .map(|value| InstrumentChoice::new(*value, *value == DEFAULT_INSTRUMENT))
        .collect()
}

/// Raw form state at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub poem_text: String,
    /// `None` when the page has no title field
    pub title: Option<String>,
    pub instruments: Vec<InstrumentChoice>,
}

impl FormSnapshot {
    /// Values of the checked instruments, in form order.
    pub fn selected_instruments(&self) -> Vec<String> {
        self.instruments
            .iter()
            .filter(|choice| choice.checked)
            .map(|choice| choice.value.clone())
            .collect()
    }

    /// Assemble the request body.
    ///
    /// Fails only on blank poem text. Title and instruments fall back to
    /// their defaults.
    pub fn to_request(&self) -> AppResult<SubmissionRequest> {
        let poem_text = self.poem_text.trim();
        if poem_text.is_empty() {
            return Err(AppError::Validation(EMPTY_POEM_MESSAGE.to_string()));
        }

        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE);

        let mut instruments = self.selected_instruments();
        if instruments.is_empty() {
            instruments.push(DEFAULT_INSTRUMENT.to_string());
        }

        Ok(SubmissionRequest {
            poem_text: poem_text.to_string(),
            title: title.to_string(),
            instruments,
        })
    }
}
