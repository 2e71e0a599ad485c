//! Analysis rendering.
//!
//! Turns an [`AnalysisResult`] into an [`AnalysisReport`]: plain display
//! data with every label and explanation already resolved. The report is
//! what the components draw; nothing here touches the DOM.
//!
//! Central defaults for absent values live in this module only:
//!
//! | Field            | Default   |
//! |------------------|-----------|
//! | mood             | neutral   |
//! | meter            | free verse|
//! | rhyme scheme     | free      |
//! | key              | C         |
//! | tempo            | 120 BPM   |
//! | time signature   | 4/4       |

pub mod tables;

use crate::types::AnalysisResult;
use tables::Mood;

const DEFAULT_MOOD: &str = "neutral";
const DEFAULT_METER: &str = "free_verse";
const DEFAULT_RHYME: &str = "free";
const DEFAULT_KEY: &str = "C";
const DEFAULT_TEMPO: i64 = 120;
const DEFAULT_TIME_SIGNATURE: &str = "4/4";

/// A value plus the sentence explaining its musical effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Explained {
    pub label: String,
    pub explanation: &'static str,
}

/// Mood display: label, icon and color.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodSummary {
    pub label: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub explanation: &'static str,
}

/// A detected literary device.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSummary {
    pub name: String,
    pub explanation: String,
    pub musical_impact: String,
}

/// Everything the results panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    pub line_count: u64,
    pub total_syllables: u64,
    pub meter: Explained,
    pub rhyme: Explained,
    pub mood: MoodSummary,
    pub key: Explained,
    pub tempo: Explained,
    pub time_signature: Explained,
    /// Detected devices only; empty means the section is omitted
    pub devices: Vec<DeviceSummary>,
    pub average_syllables: String,
    pub line_lengths: String,
    pub polarity: String,
    pub subjectivity: String,
}

/// Build the report for one analysis document.
pub fn render_analysis(analysis: &AnalysisResult) -> AnalysisReport {
    let mood_label = analysis.sentiment.mood.as_deref().unwrap_or(DEFAULT_MOOD);
    let mood = Mood::from_label(mood_label);

    let key = analysis.key_suggestion.as_deref().unwrap_or(DEFAULT_KEY);
    let tempo = analysis.tempo_suggestion.unwrap_or(DEFAULT_TEMPO);
    let rhyme = analysis.rhyme_scheme.as_deref();
    let meter = analysis.meter.as_deref();

    AnalysisReport {
        line_count: analysis.line_count.unwrap_or(0),
        total_syllables: analysis.total_syllables.unwrap_or(0),
        meter: Explained {
            label: format_meter(meter),
            explanation: tables::meter_explanation(meter.unwrap_or(DEFAULT_METER)),
        },
        rhyme: Explained {
            label: rhyme.unwrap_or("Free").to_string(),
            explanation: tables::rhyme_explanation(rhyme.unwrap_or(DEFAULT_RHYME)),
        },
        mood: MoodSummary {
            label: capitalize(mood_label),
            icon: mood.icon(),
            color: mood.color(),
            explanation: mood.explanation(),
        },
        key: Explained {
            label: key.to_string(),
            explanation: tables::key_explanation(key),
        },
        tempo: Explained {
            label: format!("{} BPM", tempo),
            explanation: tables::tempo_explanation(tempo),
        },
        time_signature: Explained {
            label: analysis
                .time_signature
                .clone()
                .unwrap_or_else(|| DEFAULT_TIME_SIGNATURE.to_string()),
            explanation: "Sets the rhythmic foundation",
        },
        devices: detected_devices(analysis),
        average_syllables: average_syllables(&analysis.syllable_counts),
        line_lengths: analysis
            .syllable_counts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        polarity: format_polarity(analysis.sentiment.polarity),
        subjectivity: format_subjectivity(analysis.sentiment.subjectivity),
    }
}

fn detected_devices(analysis: &AnalysisResult) -> Vec<DeviceSummary> {
    analysis
        .literary_devices
        .iter()
        .filter(|(_, device)| device.detected)
        .map(|(key, device)| {
            let (explanation, impact) = tables::device_defaults(key);
            DeviceSummary {
                name: tables::device_name(key),
                explanation: device
                    .explanation
                    .clone()
                    .unwrap_or_else(|| explanation.to_string()),
                musical_impact: device
                    .musical_impact
                    .clone()
                    .unwrap_or_else(|| impact.to_string()),
            }
        })
        .collect()
}

/// "free_verse" -> "Free Verse"; absent -> "Free verse".
pub fn format_meter(meter: Option<&str>) -> String {
    match meter {
        Some(meter) if !meter.trim().is_empty() => title_case(meter),
        _ => "Free verse".to_string(),
    }
}

/// Underscores become spaces and each word gets an upper-case initial.
pub fn title_case(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Mean syllables per line to one decimal, "0" when there are no lines.
pub fn average_syllables(counts: &[u64]) -> String {
    if counts.is_empty() {
        return "0".to_string();
    }
    let total: f64 = counts.iter().map(|&count| count as f64).sum();
    fixed(total / counts.len() as f64, 1)
}

pub fn format_polarity(polarity: Option<f64>) -> String {
    match polarity {
        Some(value) => format!("{} ({})", tables::polarity_label(value), fixed(value, 2)),
        None => "Neutral".to_string(),
    }
}

pub fn format_subjectivity(subjectivity: Option<f64>) -> String {
    match subjectivity {
        Some(value) => format!("{} ({})", tables::subjectivity_label(value), fixed(value, 2)),
        None => "Balanced".to_string(),
    }
}

/// Fixed-point text, rounding half away from zero.
fn fixed(value: f64, decimals: i32) -> String {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals as usize, rounded)
}
