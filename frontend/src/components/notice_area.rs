//! Stack of transient notices at the top of the page.

use leptos::*;

use crate::view::UiState;

#[component]
pub fn NoticeArea(ui: UiState) -> impl IntoView {
    view! {
        <div class="notice-area">
            <For
                each=move || ui.notices.with(|board| board.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let dismiss = move |_| {
                        ui.notices.update(|board| {
                            board.dismiss(id);
                        });
                    };
                    view! {
                        <div class=format!("alert {} alert-dismissible fade show", notice.level.css_class()) role="alert">
                            <span class="notice-time">"[" {notice.timestamp} "] "</span>
                            {notice.message}
                            <button type="button" class="btn-close" aria-label="Close" on:click=dismiss></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
