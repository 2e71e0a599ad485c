//! Error surface shared by validation, server and network failures.

use leptos::*;

use crate::view::{UiState, ERROR_ID};

#[component]
pub fn ErrorPanel(ui: UiState) -> impl IntoView {
    view! {
        <div
            id=ERROR_ID
            class="alert alert-danger error-display"
            class:show=move || ui.error.with(Option::is_some)
            role="alert"
        >
            <i class="fas fa-exclamation-triangle me-2"></i>
            <span id="errorMessage">{move || ui.error.get().unwrap_or_default()}</span>
        </div>
    }
}
