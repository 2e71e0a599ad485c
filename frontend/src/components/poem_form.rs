//! Poem entry form.
//!
//! Text, optional title and instrument checkboxes. Input events feed the
//! controller so the submit button and the instrument selection stay valid.

use std::rc::Rc;

use leptos::*;

use crate::config::{SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
use crate::view::UiState;
use crate::AppController;

#[component]
pub fn PoemForm(ui: UiState, controller: Rc<AppController>) -> impl IntoView {
    let on_input = {
        let controller = controller.clone();
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            controller.validate_form(&text);
            ui.poem_text.set(text);
        }
    };

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let form = ui.snapshot();
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit(form).await;
            });
        }
    };

    view! {
        <form id="poemForm" class="poem-form" on:submit=on_submit>
            <div class="mb-3">
                <label for="poemTitle" class="form-label">"Title (optional)"</label>
                <input
                    type="text"
                    id="poemTitle"
                    class="form-control"
                    placeholder="Untitled Poem"
                    prop:value=move || ui.title.get()
                    on:input=move |ev| ui.title.set(event_target_value(&ev))
                />
            </div>

            <div class="mb-3">
                <label for="poemText" class="form-label">"Your poem"</label>
                <textarea
                    id="poemText"
                    class="form-control"
                    rows="10"
                    placeholder="Roses are red..."
                    prop:value=move || ui.poem_text.get()
                    on:input=on_input
                ></textarea>
            </div>

            <div class="mb-3">
                <div class="form-label">"Instruments"</div>
                <div class="instrument-grid">
                    <For
                        each=move || ui.instruments.get()
                        key=|choice| (choice.value.clone(), choice.checked)
                        children=move |choice| {
                            let controller = controller.clone();
                            let value = choice.value.clone();
                            let id = format!("inst_{}", choice.value);
                            let on_change = move |ev: ev::Event| {
                                let checked = event_target_checked(&ev);
                                ui.instruments.update(|choices| {
                                    if let Some(c) = choices.iter_mut().find(|c| c.value == value) {
                                        c.checked = checked;
                                    }
                                });
                                controller.normalize_instrument_selection(&ui.instruments.get_untracked());
                            };
                            view! {
                                <div class="form-check">
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        id=id.clone()
                                        value=choice.value.clone()
                                        prop:checked=choice.checked
                                        on:change=on_change
                                    />
                                    <label class="form-check-label" for=id>{choice.label()}</label>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <button
                type="submit"
                class="btn btn-primary btn-lg"
                disabled=move || !ui.submit_enabled.get()
            >
                {move || if ui.loading.get() {
                    view! { <i class="fas fa-spinner fa-spin me-2"></i> {SUBMIT_BUSY_LABEL} }.into_view()
                } else {
                    view! { <i class="fas fa-magic me-2"></i> {SUBMIT_LABEL} }.into_view()
                }}
            </button>

            <div
                id="loadingSpinner"
                class="loading-spinner"
                class:show=move || ui.loading.get()
            >
                <div class="spinner-border text-primary" role="status"></div>
                <span class="ms-2">"Reading your poem and composing..."</span>
            </div>
        </form>
    }
}
