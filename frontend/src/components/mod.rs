//! UI Components for the Poetry to Music application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with composition status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`PoemForm`] - Poem text, title and instrument selection
//! - [`ErrorPanel`] - Validation, server and network errors
//! - [`ResultsPanel`] - Analysis results with download and play actions
//! - [`AnalysisReportView`] - Detailed view of one analysis report
//! - [`NoticeArea`] - Transient, auto-dismissing notices

mod header;
mod hero;
mod poem_form;
mod error_panel;
mod results;
mod analysis_report;
mod notice_area;
mod footer;

pub use header::*;
pub use hero::*;
pub use poem_form::*;
pub use error_panel::*;
pub use results::*;
pub use analysis_report::*;
pub use notice_area::*;
pub use footer::*;
