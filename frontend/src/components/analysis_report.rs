//! Detailed view of one analysis report.
//!
//! Draws an [`AnalysisReport`] already resolved by the renderer; this
//! component makes no decisions about labels or fallbacks.

use leptos::*;

use crate::render::{AnalysisReport, DeviceSummary, Explained};

/// One labelled value with its explanation underneath.
#[component]
fn AnalysisItem(title: &'static str, item: Explained, #[prop(optional)] musical: bool) -> impl IntoView {
    let value_class = if musical { "musical-info" } else { "" };

    view! {
        <div class="analysis-item">
            <strong>{title} ":"</strong> " "
            <span class=value_class>{item.label}</span>
            <small class="text-muted d-block">{item.explanation}</small>
        </div>
    }
}

#[component]
pub fn AnalysisReportView(report: AnalysisReport) -> impl IntoView {
    let mood = report.mood;

    view! {
        <div class="analysis-report">
            <div class="row">
                <div class="col-md-6">
                    <h5><i class="fas fa-chart-line me-2"></i>"Poem Analysis"</h5>
                    <div class="analysis-item">
                        <strong>"Lines:"</strong> " " {report.line_count}
                        <small class="text-muted d-block">"Each line becomes a musical phrase"</small>
                    </div>
                    <div class="analysis-item">
                        <strong>"Total Syllables:"</strong> " " {report.total_syllables}
                        <small class="text-muted d-block">"Determines overall composition length"</small>
                    </div>
                    <AnalysisItem title="Meter" item=report.meter/>
                    <AnalysisItem title="Rhyme Scheme" item=report.rhyme/>
                </div>
                <div class="col-md-6">
                    <h5><i class="fas fa-music me-2"></i>"Musical Translation"</h5>
                    <div class="analysis-item">
                        <strong>"Mood:"</strong> " "
                        <span class=format!("text-{}", mood.color)>
                            <i class=format!("{} me-1", mood.icon)></i>
                            {mood.label}
                        </span>
                        <small class="text-muted d-block">{mood.explanation}</small>
                    </div>
                    <AnalysisItem title="Key" item=report.key musical=true/>
                    <AnalysisItem title="Tempo" item=report.tempo musical=true/>
                    <AnalysisItem title="Time Signature" item=report.time_signature musical=true/>
                </div>
            </div>

            {(!report.devices.is_empty()).then(|| view! { <LiteraryDevices devices=report.devices/> })}

            <div class="mt-4">
                <h5><i class="fas fa-microscope me-2"></i>"Detailed Analysis"</h5>
                <div class="row">
                    <div class="col-md-6">
                        <div class="card">
                            <div class="card-header"><h6 class="mb-0">"Syllable Distribution"</h6></div>
                            <div class="card-body">
                                <p><strong>"Average syllables per line:"</strong> " " {report.average_syllables}</p>
                                <p><strong>"Line lengths:"</strong> " " {report.line_lengths}</p>
                                <small class="text-muted">
                                    "Each syllable becomes a musical note, creating phrases of varying lengths"
                                </small>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-6">
                        <div class="card">
                            <div class="card-header"><h6 class="mb-0">"Sentiment Analysis"</h6></div>
                            <div class="card-body">
                                <p><strong>"Emotional polarity:"</strong> " " {report.polarity}</p>
                                <p><strong>"Subjectivity:"</strong> " " {report.subjectivity}</p>
                                <small class="text-muted">
                                    "These values determine musical key choices and dynamic expression"
                                </small>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Accordion of detected devices, first one open.
#[component]
fn LiteraryDevices(devices: Vec<DeviceSummary>) -> impl IntoView {
    let (expanded_index, set_expanded_index) = create_signal(Some(0usize));

    view! {
        <div class="mt-4">
            <h5><i class="fas fa-palette me-2"></i>"Literary Devices & Musical Impact"</h5>
            <div class="accordion" id="literaryDevicesAccordion">
                {devices.into_iter().enumerate().map(|(idx, device)| {
                    let is_expanded = move || expanded_index.get() == Some(idx);
                    let toggle = move |_| {
                        set_expanded_index.update(|open| {
                            *open = if *open == Some(idx) { None } else { Some(idx) };
                        });
                    };
                    view! {
                        <div class="accordion-item">
                            <h2 class="accordion-header">
                                <button
                                    class="accordion-button"
                                    class:collapsed=move || !is_expanded()
                                    type="button"
                                    on:click=toggle
                                >
                                    <span class="badge bg-info me-2">{device.name}</span>
                                    "Literary Device Detected"
                                </button>
                            </h2>
                            <div class="accordion-collapse collapse" class:show=is_expanded>
                                <div class="accordion-body">
                                    <p><strong>"What it is:"</strong> " " {device.explanation}</p>
                                    <p class="text-info mb-0">
                                        <strong>"Musical Translation:"</strong> " " {device.musical_impact}
                                    </p>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
