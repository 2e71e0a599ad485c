//! Top navigation bar.

use leptos::*;

use crate::view::UiState;

#[component]
pub fn Header(ui: UiState) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"POETRY ✦ MUSIC"</a>
            </div>
            <div class="header-right">
                <span class="badge" class:busy=move || ui.loading.get()>
                    {move || if ui.loading.get() {
                        "Composing..."
                    } else if ui.results.with(Option::is_some) {
                        "Composition ready"
                    } else {
                        "Ready"
                    }}
                </span>
            </div>
        </header>
    }
}
