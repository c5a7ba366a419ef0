//! Canned question-answering for the chat assistant
//!
//! Replies are chosen from a fixed rule table keyed by mode and keyword.
//! Nothing here inspects a real document; the "sources" attached to a reply
//! are placeholders that depend only on the mode.

use serde::Serialize;
use std::time::Duration;

/// Delay before a reply (or the post-upload tab switch) becomes visible
pub const RESPONSE_LATENCY: Duration = Duration::from_millis(1500);

pub const WELCOME_MESSAGE: &str = "Hello! I'm your MedEase AI assistant. I can help you understand medical terms, explain your documents, or answer health-related questions. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QaMode {
    Grounded,
    Related,
    #[default]
    Hybrid,
}

impl QaMode {
    pub fn all() -> [QaMode; 3] {
        [QaMode::Grounded, QaMode::Related, QaMode::Hybrid]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QaMode::Grounded => "grounded",
            QaMode::Related => "related",
            QaMode::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QaMode::Grounded => "Grounded",
            QaMode::Related => "Related",
            QaMode::Hybrid => "Hybrid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QaMode::Grounded => "Answers only from your document",
            QaMode::Related => "General medical knowledge",
            QaMode::Hybrid => "Document first, then general",
        }
    }

    /// Next mode in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            QaMode::Grounded => QaMode::Related,
            QaMode::Related => QaMode::Hybrid,
            QaMode::Hybrid => QaMode::Grounded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Copd,
    Breathing,
    Pneumonia,
}

impl Keyword {
    pub fn needle(&self) -> &'static str {
        match self {
            Keyword::Copd => "copd",
            Keyword::Breathing => "breathing",
            Keyword::Pneumonia => "pneumonia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Document,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub kind: SourceKind,
}

impl Source {
    fn placeholder(title: &str, kind: SourceKind) -> Self {
        Self {
            title: title.to_string(),
            url: "#".to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub sources: Vec<Source>,
    pub mode: QaMode,
}

const GROUNDED_COPD: &str = "Based on your document: The patient shows signs of COPD with temporary worsening. The document mentions hypoxemia (low oxygen) and recommends bronchodilator therapy along with supplemental oxygen.";
const GROUNDED_FALLBACK: &str = "I couldn't find specific information about that in your uploaded document. Try asking about the conditions, treatments, or terms mentioned in your document.";
const RELATED_COPD: &str = "COPD (Chronic Obstructive Pulmonary Disease) is a chronic lung condition that makes breathing difficult. It includes emphysema and chronic bronchitis. Common treatments include bronchodilators, steroids, and pulmonary rehabilitation.";
const RELATED_PNEUMONIA: &str = "Pneumonia is a lung infection that can be caused by bacteria, viruses, or fungi. Symptoms include cough, fever, and difficulty breathing. Bacterial pneumonia is typically treated with antibiotics.";
const RELATED_FALLBACK: &str = "Based on general medical knowledge: This topic relates to common health conditions. For specific guidance about your situation, please consult with your healthcare provider.";
const HYBRID_COPD: &str = "From your document: Your condition involves COPD with signs of infection (pneumonia). The treatment plan includes antibiotics and breathing support.\n\nAdditional context: COPD is a chronic condition that can have periodic flare-ups. Managing triggers and following your treatment plan helps prevent complications.";
const HYBRID_FALLBACK: &str = "I didn't find direct information in your document, so here's some general guidance: This is a common topic in healthcare. For personalized advice, please consult your doctor.";

struct Rule {
    mode: QaMode,
    keyword: Keyword,
    response: &'static str,
}

/// Evaluated top to bottom; the first rule for the mode whose keyword
/// occurs in the input wins.
const RULES: &[Rule] = &[
    Rule { mode: QaMode::Grounded, keyword: Keyword::Copd, response: GROUNDED_COPD },
    Rule { mode: QaMode::Grounded, keyword: Keyword::Breathing, response: GROUNDED_COPD },
    Rule { mode: QaMode::Related, keyword: Keyword::Copd, response: RELATED_COPD },
    Rule { mode: QaMode::Related, keyword: Keyword::Pneumonia, response: RELATED_PNEUMONIA },
    Rule { mode: QaMode::Hybrid, keyword: Keyword::Copd, response: HYBRID_COPD },
    Rule { mode: QaMode::Hybrid, keyword: Keyword::Breathing, response: HYBRID_COPD },
];

fn fallback(mode: QaMode) -> &'static str {
    match mode {
        QaMode::Grounded => GROUNDED_FALLBACK,
        QaMode::Related => RELATED_FALLBACK,
        QaMode::Hybrid => HYBRID_FALLBACK,
    }
}

/// Pick the canned response text for an input under a mode
pub fn response_text(mode: QaMode, input: &str) -> &'static str {
    let lowered = input.to_lowercase();

    RULES
        .iter()
        .filter(|rule| rule.mode == mode)
        .find(|rule| lowered.contains(rule.keyword.needle()))
        .map(|rule| rule.response)
        .unwrap_or_else(|| fallback(mode))
}

pub fn sources_for(mode: QaMode) -> Vec<Source> {
    let document = [
        Source::placeholder("Your uploaded document", SourceKind::Document),
        Source::placeholder("Document section 2.3", SourceKind::Document),
    ];
    let general = [
        Source::placeholder("Mayo Clinic - Patient Education", SourceKind::General),
        Source::placeholder("NIH Health Information", SourceKind::General),
    ];

    match mode {
        QaMode::Grounded => document.to_vec(),
        QaMode::Related => general.to_vec(),
        QaMode::Hybrid => {
            let [first_doc, _] = document;
            let [first_general, _] = general;
            vec![first_doc, first_general]
        }
    }
}

pub fn respond(mode: QaMode, input: &str) -> Reply {
    Reply {
        content: response_text(mode, input).to_string(),
        sources: sources_for(mode),
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_copd_any_case() {
        for input in ["copd", "What is COPD?", "tell me about CoPd please"] {
            assert_eq!(respond(QaMode::Related, input).content, RELATED_COPD);
        }
    }

    #[test]
    fn test_grounded_copd_uses_document_paragraph() {
        let reply = respond(QaMode::Grounded, "Explain my COPD");
        assert_eq!(reply.content, GROUNDED_COPD);
        assert_eq!(reply.mode, QaMode::Grounded);
    }

    #[test]
    fn test_breathing_matches_grounded_and_hybrid_only() {
        assert_eq!(response_text(QaMode::Grounded, "Breathing trouble"), GROUNDED_COPD);
        assert_eq!(response_text(QaMode::Hybrid, "breathing trouble"), HYBRID_COPD);
        assert_eq!(response_text(QaMode::Related, "breathing trouble"), RELATED_FALLBACK);
    }

    #[test]
    fn test_related_copd_takes_priority_over_pneumonia() {
        assert_eq!(response_text(QaMode::Related, "pneumonia and copd"), RELATED_COPD);
        assert_eq!(response_text(QaMode::Related, "PNEUMONIA?"), RELATED_PNEUMONIA);
    }

    #[test]
    fn test_fallbacks_are_never_empty() {
        for mode in QaMode::all() {
            let reply = respond(mode, "");
            assert!(!reply.content.is_empty());
            assert_eq!(reply.content, fallback(mode));
        }
    }

    #[test]
    fn test_sources_depend_only_on_mode() {
        let grounded = sources_for(QaMode::Grounded);
        assert!(grounded.iter().all(|s| s.kind == SourceKind::Document));
        assert_eq!(grounded.len(), 2);

        let related = sources_for(QaMode::Related);
        assert!(related.iter().all(|s| s.kind == SourceKind::General));
        assert_eq!(related.len(), 2);

        let hybrid = sources_for(QaMode::Hybrid);
        assert_eq!(hybrid[0].title, "Your uploaded document");
        assert_eq!(hybrid[1].title, "Mayo Clinic - Patient Education");

        assert_eq!(
            respond(QaMode::Hybrid, "copd").sources,
            respond(QaMode::Hybrid, "anything else").sources
        );
    }

    #[test]
    fn test_mode_cycle_visits_every_mode() {
        let mut mode = QaMode::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, QaMode::default());
        for m in QaMode::all() {
            assert!(seen.contains(&m));
        }
    }
}
