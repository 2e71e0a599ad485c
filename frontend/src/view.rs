//! Leptos-backed [`SubmissionView`].
//!
//! The page state lives in [`UiState`], a bundle of `RwSignal`s the
//! components read from. [`SignalView`] writes those signals on behalf of
//! the controller and performs the few effects that need the browser
//! directly (scrolling, navigation, notice timers).

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::NOTICE_DISMISS_MS;
use crate::controller::SubmissionView;
use crate::form::{default_instruments, FormSnapshot, InstrumentChoice};
use crate::notices::NoticeBoard;
use crate::render::AnalysisReport;
use crate::types::NoticeLevel;

/// Element id of the results container.
pub const RESULTS_ID: &str = "results";

/// Element id of the error container.
pub const ERROR_ID: &str = "errorDisplay";

/// Reactive page state shared by every component.
#[derive(Clone, Copy)]
pub struct UiState {
    pub poem_text: RwSignal<String>,
    pub title: RwSignal<String>,
    pub instruments: RwSignal<Vec<InstrumentChoice>>,
    pub submit_enabled: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub results: RwSignal<Option<AnalysisReport>>,
    pub error: RwSignal<Option<String>>,
    pub notices: RwSignal<NoticeBoard>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            poem_text: create_rw_signal(String::new()),
            title: create_rw_signal(String::new()),
            instruments: create_rw_signal(default_instruments()),
            submit_enabled: create_rw_signal(false),
            loading: create_rw_signal(false),
            results: create_rw_signal(None),
            error: create_rw_signal(None),
            notices: create_rw_signal(NoticeBoard::new()),
        }
    }

    /// Current form contents, read without tracking.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            poem_text: self.poem_text.get_untracked(),
            title: Some(self.title.get_untracked()),
            instruments: self.instruments.get_untracked(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes controller effects into [`UiState`].
#[derive(Clone, Copy)]
pub struct SignalView {
    ui: UiState,
}

impl SignalView {
    pub fn new(ui: UiState) -> Self {
        Self { ui }
    }
}

impl SubmissionView for SignalView {
    fn set_submit_enabled(&self, enabled: bool) {
        self.ui.submit_enabled.set(enabled);
    }

    fn set_loading(&self, loading: bool) {
        self.ui.loading.set(loading);
    }

    fn check_instrument(&self, instrument: &str) {
        self.ui.instruments.update(|choices| {
            if let Some(choice) = choices.iter_mut().find(|c| c.value == instrument) {
                choice.checked = true;
            }
        });
    }

    fn show_results(&self, report: AnalysisReport) {
        self.ui.results.set(Some(report));
        scroll_into_view(RESULTS_ID);
    }

    fn hide_results(&self) {
        self.ui.results.set(None);
    }

    fn show_error(&self, message: &str) {
        self.ui.error.set(Some(message.to_string()));
        scroll_into_view(ERROR_ID);
    }

    fn hide_error(&self) {
        self.ui.error.set(None);
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }

    fn push_notice(&self, message: &str, level: NoticeLevel) {
        let mut id = None;
        self.ui.notices.update(|board| id = Some(board.push(message, level)));

        if let Some(id) = id {
            let notices = self.ui.notices;
            // Fire and forget: dismissing an already closed notice is a no-op
            Timeout::new(NOTICE_DISMISS_MS, move || {
                notices.update(|board| {
                    board.dismiss(id);
                });
            })
            .forget();
        }
    }
}

/// Scroll an element into view once the DOM has caught up with the signals.
fn scroll_into_view(element_id: &'static str) {
    request_animation_frame(move || {
        if let Some(element) = gloo_utils::document().get_element_by_id(element_id) {
            element.scroll_into_view();
        }
    });
}

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    let requested = web_sys::window()
        .map(|window| window.request_animation_frame(closure.as_ref().unchecked_ref()));
    if let Some(Err(e)) = requested {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}
