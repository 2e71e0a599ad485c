//! Poetry to Music - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that sends a poem to the analysis service and
//! explains how its structure and mood were translated into music.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (composition status)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── NoticeArea (transient notices)                          │
//! │  ├── Hero (title, description)                              │
//! │  ├── PoemForm ──submit──▶ SubmissionController              │
//! │  ├── ErrorPanel            │  ├── AnalysisClient (HTTP)     │
//! │  └── ResultsPanel ◀────────┘  └── render_analysis (tables)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Request, analysis, composition and error types
//! - [`form`] - Form snapshot and request assembly
//! - [`render`] - Analysis to explanation rendering and lookup tables
//! - [`controller`] - Submission lifecycle state machine
//! - [`notices`] - Transient notice stack
//! - [`view`] - Signal-backed view used by the controller
//! - [`components`] - UI components (form, results, notices...)
//! - [`services`] - Backend communication (analysis)

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod form;
pub mod render;
pub mod controller;
pub mod notices;
pub mod view;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Request
    SubmissionRequest,
    // Analysis
    AnalysisResult, Sentiment, LiteraryDevice, AnalysisResponse,
    // Composition
    CompositionHandle,
    // Notices
    NoticeLevel,
    // Errors
    AppError, AppResult,
};

// Lifecycle
pub use controller::{SubmissionController, SubmissionView};
pub use form::{FormSnapshot, InstrumentChoice};
pub use render::{render_analysis, AnalysisReport};
pub use view::{SignalView, UiState};

// Components
pub use components::*;

// Services
pub use services::*;

/// The controller wired to the browser: `fetch` client and signal view.
pub type AppController = SubmissionController<HttpAnalysisClient, SignalView>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic and logging hooks, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Poetry to Music - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Poetry to Music"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Page state and its single controller
    let ui = UiState::new();
    let config = AppConfig::default();
    let controller: Rc<AppController> = Rc::new(SubmissionController::new(
        HttpAnalysisClient::new(config.clone()),
        SignalView::new(ui),
        config,
    ));

    // Initial submit state for the (empty) form
    controller.validate_form(&ui.poem_text.get_untracked());

    view! {
        <Header ui=ui/>

        <div class="container">
            <NoticeArea ui=ui/>
            <Hero/>
            <PoemForm ui=ui controller=controller.clone()/>
            <ErrorPanel ui=ui/>
            <ResultsPanel ui=ui controller=controller/>
        </div>

        <Footer/>
    }
}
