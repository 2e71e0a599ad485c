//! Fixed explanation tables.
//!
//! Every lookup here is total: listed keys map to their entry, anything
//! else lands on the default arm.

/// Coarse sentiment class driving the mood display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    /// Classify a server mood label, ignoring ASCII case. Unknown labels are neutral.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "positive" => Mood::Positive,
            "negative" => Mood::Negative,
            _ => Mood::Neutral,
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Positive => "fas fa-smile",
            Mood::Negative => "fas fa-frown",
            Mood::Neutral => "fas fa-meh",
        }
    }

    /// Bootstrap contextual color.
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Positive => "success",
            Mood::Negative => "danger",
            Mood::Neutral => "secondary",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Mood::Positive => "Translated to major keys and brighter tempos",
            Mood::Negative => "Expressed through minor keys and slower tempos",
            Mood::Neutral => "Balanced approach with moderate musical elements",
        }
    }
}

pub fn meter_explanation(meter: &str) -> &'static str {
    match meter {
        "iambic" => "Creates steady, marching rhythm (da-DUM da-DUM)",
        "trochaic" => "Creates falling rhythm (DUM-da DUM-da)",
        "free_verse" => "Allows flexible, experimental rhythms",
        "regular" => "Produces consistent, structured musical phrases",
        _ => "Influences rhythmic patterns",
    }
}

pub fn rhyme_explanation(scheme: &str) -> &'static str {
    match scheme {
        "ABAB" => "Creates alternating harmonic patterns",
        "AABB" => "Produces paired harmonic progressions",
        "free" => "Allows varied harmonic exploration",
        "none" => "Focuses on melodic rather than harmonic structure",
        _ => "Affects harmonic structure",
    }
}

pub fn key_explanation(key: &str) -> &'static str {
    match key {
        "C" => "Major key - bright, optimistic sound",
        "Am" => "Minor key - contemplative, melancholic sound",
        "G" => "Major key - warm, uplifting character",
        "Em" => "Minor key - gentle, introspective mood",
        "F" => "Major key - peaceful, stable feeling",
        "Dm" => "Minor key - serious, dramatic tone",
        _ => "Sets the emotional foundation",
    }
}

/// Tempo band. Inclusive lower bounds, checked from fastest down.
pub fn tempo_explanation(bpm: i64) -> &'static str {
    match bpm {
        140.. => "Fast tempo - energetic, exciting feel",
        120.. => "Moderate tempo - comfortable, steady pace",
        100.. => "Relaxed tempo - calm, thoughtful mood",
        _ => "Slow tempo - contemplative, meditative feel",
    }
}

pub fn polarity_label(polarity: f64) -> &'static str {
    if polarity > 0.3 {
        "Positive"
    } else if polarity < -0.3 {
        "Negative"
    } else {
        "Neutral"
    }
}

pub fn subjectivity_label(subjectivity: f64) -> &'static str {
    if subjectivity > 0.7 {
        "Highly subjective"
    } else if subjectivity < 0.3 {
        "Objective"
    } else {
        "Moderately subjective"
    }
}

/// Display name of a literary device, falling back to the raw key.
pub fn device_name(key: &str) -> String {
    let name = match key {
        "alliteration" => "Alliteration",
        "repetition" => "Repetition",
        "metaphor_simile" => "Metaphor/Simile",
        "imagery" => "Imagery",
        "assonance" => "Assonance",
        _ => return key.to_string(),
    };
    name.to_string()
}

/// Explanation and musical impact used when the server sends only a flag.
pub fn device_defaults(key: &str) -> (&'static str, &'static str) {
    match key {
        "alliteration" => (
            "Repeated initial consonant sounds across nearby words",
            "Becomes repeated rhythmic motifs with accented attacks",
        ),
        "repetition" => (
            "Significant words that recur through the poem",
            "Returns as a recurring melodic theme",
        ),
        "metaphor_simile" => (
            "Comparisons that link one image to another",
            "Shifts harmonic color between contrasting phrases",
        ),
        "imagery" => (
            "Vivid sensory description",
            "Expressed through instrument timbre and dynamics",
        ),
        "assonance" => (
            "Repeated vowel sounds within lines",
            "Smooths the melody into legato phrasing",
        ),
        _ => (
            "A recurring pattern in the poem's language",
            "Influences melodic phrasing",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_mapping() {
        assert_eq!(Mood::from_label("positive").icon(), "fas fa-smile");
        assert_eq!(Mood::from_label("positive").color(), "success");
        assert_eq!(Mood::from_label("negative").icon(), "fas fa-frown");
        assert_eq!(Mood::from_label("negative").color(), "danger");
        assert_eq!(Mood::from_label("neutral").color(), "secondary");
        assert_eq!(Mood::from_label("ecstatic"), Mood::Neutral);
        assert_eq!(Mood::from_label(""), Mood::Neutral);
    }

    #[test]
    fn test_mood_label_case_is_ignored() {
        assert_eq!(Mood::from_label("Positive").icon(), "fas fa-smile");
        assert_eq!(Mood::from_label("NEGATIVE").icon(), "fas fa-frown");
        assert_eq!(Mood::from_label("Neutral"), Mood::Neutral);
    }

    #[test]
    fn test_tables_are_total() {
        for odd in ["", "undefined", "spondaic", "ABCB", "C#m", "🎵"] {
            assert!(!meter_explanation(odd).is_empty());
            assert!(!rhyme_explanation(odd).is_empty());
            assert!(!key_explanation(odd).is_empty());
            assert!(!Mood::from_label(odd).explanation().is_empty());
            let (explanation, impact) = device_defaults(odd);
            assert!(!explanation.is_empty() && !impact.is_empty());
        }
        assert_eq!(meter_explanation("spondaic"), "Influences rhythmic patterns");
        assert_eq!(rhyme_explanation("ABCB"), "Affects harmonic structure");
        assert_eq!(key_explanation("C#m"), "Sets the emotional foundation");
    }

    #[test]
    fn test_known_entries() {
        assert!(meter_explanation("iambic").contains("da-DUM"));
        assert!(rhyme_explanation("AABB").contains("paired"));
        assert!(key_explanation("C").contains("bright"));
        assert!(key_explanation("Am").contains("contemplative"));
    }

    #[test]
    fn test_tempo_boundaries() {
        assert!(tempo_explanation(140).contains("energetic"));
        assert!(tempo_explanation(139).contains("steady"));
        assert!(tempo_explanation(120).contains("steady"));
        assert!(tempo_explanation(100).contains("calm"));
        assert!(tempo_explanation(99).contains("contemplative"));
        assert!(tempo_explanation(-5).contains("contemplative"));
    }

    #[test]
    fn test_polarity_and_subjectivity_boundaries() {
        assert_eq!(polarity_label(0.3), "Neutral");
        assert_eq!(polarity_label(0.31), "Positive");
        assert_eq!(polarity_label(-0.3), "Neutral");
        assert_eq!(polarity_label(-0.31), "Negative");
        assert_eq!(subjectivity_label(0.7), "Moderately subjective");
        assert_eq!(subjectivity_label(0.71), "Highly subjective");
        assert_eq!(subjectivity_label(0.29), "Objective");
    }

    #[test]
    fn test_device_names() {
        assert_eq!(device_name("metaphor_simile"), "Metaphor/Simile");
        assert_eq!(device_name("alliteration"), "Alliteration");
        assert_eq!(device_name("onomatopoeia"), "onomatopoeia");
    }
}
