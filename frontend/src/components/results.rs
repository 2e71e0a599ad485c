//! Results surface: the analysis report plus download and play actions.

use std::rc::Rc;

use leptos::*;

use crate::components::AnalysisReportView;
use crate::view::{UiState, RESULTS_ID};
use crate::AppController;

#[component]
pub fn ResultsPanel(ui: UiState, controller: Rc<AppController>) -> impl IntoView {
    let on_download = {
        let controller = controller.clone();
        move |_| controller.download_current()
    };
    let on_play = move |_| controller.play_current();

    view! {
        <div id=RESULTS_ID class="results-section" class:show=move || ui.results.with(Option::is_some)>
            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h4 class="mb-0"><i class="fas fa-music me-2"></i>"Your Composition"</h4>
                    <div class="btn-group">
                        <button id="playBtn" type="button" class="btn btn-outline-primary" on:click=on_play>
                            <i class="fas fa-play me-1"></i>"Play"
                        </button>
                        <button id="downloadBtn" type="button" class="btn btn-success" on:click=on_download>
                            <i class="fas fa-download me-1"></i>"Download MIDI"
                        </button>
                    </div>
                </div>
                <div id="analysisResults" class="card-body">
                    {move || ui.results.get().map(|report| view! { <AnalysisReportView report=report/> })}
                </div>
            </div>
        </div>
    }
}
