//! Submission lifecycle.
//!
//! [`SubmissionController`] owns the request state machine:
//!
//! ```text
//!   idle ──submit──▶ loading ──ok──────▶ results shown ─┐
//!    ▲                  │                                │
//!    │                  ├──app error──▶ error shown ─────┤
//!    │                  └──network────▶ error shown ─────┤
//!    └──────────────── loading cleared (always) ◀────────┘
//! ```
//!
//! It never touches the DOM. Every visible effect goes through a
//! [`SubmissionView`], and the request goes through an
//! [`AnalysisClient`], so both can be replaced in tests.

use std::cell::{Cell, RefCell};

use crate::config::{AppConfig, DEFAULT_INSTRUMENT};
use crate::form::{FormSnapshot, InstrumentChoice};
use crate::render::{render_analysis, AnalysisReport};
use crate::services::AnalysisClient;
use crate::types::{AppError, CompositionHandle, NoticeLevel};

/// Shown when the user asks to play the generated file.
pub const PLAYBACK_NOTICE: &str = "MIDI playback in browser is limited. \
Please download the file to play in your preferred music software.";

/// Everything the controller can do to the page.
pub trait SubmissionView {
    fn set_submit_enabled(&self, enabled: bool);
    /// Spinner visibility and submit button label.
    fn set_loading(&self, loading: bool);
    /// Tick an instrument checkbox. Ignored when no such checkbox exists.
    fn check_instrument(&self, instrument: &str);
    /// Display a report and bring it into view.
    fn show_results(&self, report: AnalysisReport);
    fn hide_results(&self);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    /// Leave the page for `url` (used for downloads).
    fn navigate(&self, url: &str);
    /// Add a notice that removes itself after a delay.
    fn push_notice(&self, message: &str, level: NoticeLevel);
}

/// The page's single controller, built once with its collaborators.
pub struct SubmissionController<C, V> {
    client: C,
    view: V,
    config: AppConfig,
    is_analyzing: Cell<bool>,
    poem_present: Cell<bool>,
    current_composition: RefCell<Option<CompositionHandle>>,
}

impl<C, V> SubmissionController<C, V>
where
    C: AnalysisClient,
    V: SubmissionView,
{
    pub fn new(client: C, view: V, config: AppConfig) -> Self {
        Self {
            client,
            view,
            config,
            is_analyzing: Cell::new(false),
            poem_present: Cell::new(false),
            current_composition: RefCell::new(None),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing.get()
    }

    pub fn current_composition(&self) -> Option<CompositionHandle> {
        self.current_composition.borrow().clone()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Recompute submit enablement. Safe to call on every keystroke.
    pub fn validate_form(&self, poem_text: &str) {
        self.poem_present.set(!poem_text.trim().is_empty());
        self.refresh_submit();
    }

    /// Never leave the user with zero instruments selected.
    pub fn normalize_instrument_selection(&self, choices: &[InstrumentChoice]) {
        if !choices.iter().any(|choice| choice.checked) {
            log::debug!("No instrument selected, falling back to {}", DEFAULT_INSTRUMENT);
            self.view.check_instrument(DEFAULT_INSTRUMENT);
        }
    }

    /// Run one submission to completion.
    ///
    /// Returns immediately if a request is already in flight.
    pub async fn submit(&self, form: FormSnapshot) {
        if self.is_analyzing.get() {
            log::debug!("Submit ignored: analysis already in progress");
            return;
        }

        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                log::warn!("⚠️ {}", err);
                self.view.show_error(&err.user_message());
                return;
            }
        };

        self.poem_present.set(true);
        self.start_loading();
        self.view.hide_results();
        self.view.hide_error();

        log::info!(
            "📤 Analyzing \"{}\" ({} lines) with {}",
            request.title,
            request.poem_text.lines().count(),
            request.instruments.join(", ")
        );

        match self.client.analyze(&request).await {
            Ok(response) => {
                log::info!("✅ Analysis received");
                let report = render_analysis(&response.analysis);
                *self.current_composition.borrow_mut() = response.composition;
                self.view.show_results(report);
            }
            Err(err) => {
                match &err {
                    AppError::Transport(cause) => log::error!("❌ Analysis request failed: {}", cause),
                    other => log::warn!("⚠️ {}", other),
                }
                self.view.show_error(&err.user_message());
            }
        }

        self.finish_loading();
    }

    /// Navigate to the MIDI download of the last successful result.
    pub fn download_current(&self) {
        let Some(composition) = self.current_composition() else {
            return;
        };
        log::info!("⬇️ Downloading composition {}", composition.composition_id);
        self.view
            .navigate(&self.config.download_url(&composition.composition_id));
    }

    /// In-browser playback is not supported; point the user at the download.
    pub fn play_current(&self) {
        if self.current_composition.borrow().is_none() {
            return;
        }
        self.show_transient_notice(PLAYBACK_NOTICE, NoticeLevel::Info);
    }

    pub fn show_transient_notice(&self, message: &str, level: NoticeLevel) {
        self.view.push_notice(message, level);
    }

    fn start_loading(&self) {
        self.is_analyzing.set(true);
        self.view.set_loading(true);
        self.refresh_submit();
    }

    fn finish_loading(&self) {
        self.is_analyzing.set(false);
        self.view.set_loading(false);
        self.refresh_submit();
    }

    fn refresh_submit(&self) {
        self.view
            .set_submit_enabled(self.poem_present.get() && !self.is_analyzing.get());
    }
}
