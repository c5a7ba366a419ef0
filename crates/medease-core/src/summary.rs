#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryKind {
    OneLine,
    #[default]
    Bullets,
    Detailed,
}

/// One of the three fixed renderings of the sample document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryContent {
    Sentence(&'static str),
    Bullets(&'static [&'static str]),
    Paragraphs(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryAudit {
    pub original: &'static str,
    pub simplified: &'static str,
    pub reading_level: &'static str,
    pub accuracy: &'static str,
}

pub const SUMMARY_AUDIT: SummaryAudit = SummaryAudit {
    original: "15 complex medical terms",
    simplified: "Plain language explanation",
    reading_level: "6th grade level",
    accuracy: "Verified by medical AI",
};

const ONE_LINE: &str = "You have a lung infection that's making breathing harder, and we're treating it with antibiotics and breathing support.";

const BULLETS: &[&str] = &[
    "Your COPD symptoms have temporarily worsened",
    "Chest X-ray shows signs of pneumonia in both lungs",
    "Blood oxygen levels are lower than normal",
    "Treatment includes antibiotics and inhaler medications",
    "You'll receive extra oxygen to help you breathe",
    "We'll monitor closely and can provide additional support if needed",
];

const DETAILED: &[&str] = &[
    "Your chronic lung condition (COPD) has experienced what doctors call an \"acute exacerbation\" — essentially a temporary worsening of your symptoms. On top of this, your chest X-ray reveals that you've developed pneumonia, an infection affecting both lungs.",
    "Your blood tests show that your oxygen levels are lower than they should be, and your body is working harder to maintain proper breathing. This is a common response to lung infections and is something we can treat effectively.",
    "We're starting you on a combination of treatments: broad-spectrum antibiotics to fight the infection, bronchodilator medications (delivered through an inhaler) to help open your airways, and supplemental oxygen to ensure your body gets the oxygen it needs. We'll be aiming to keep your oxygen levels between 94-98%.",
    "We'll be monitoring you closely throughout your treatment. If your breathing becomes more difficult despite these treatments, we have additional options available, including a special breathing machine (non-invasive ventilation) that can help support your breathing without requiring a breathing tube.",
];

impl SummaryKind {
    pub fn all() -> [SummaryKind; 3] {
        [SummaryKind::OneLine, SummaryKind::Bullets, SummaryKind::Detailed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SummaryKind::OneLine => "One-line",
            SummaryKind::Bullets => "Bullet Points",
            SummaryKind::Detailed => "Detailed",
        }
    }

    pub fn content(&self) -> SummaryContent {
        match self {
            SummaryKind::OneLine => SummaryContent::Sentence(ONE_LINE),
            SummaryKind::Bullets => SummaryContent::Bullets(BULLETS),
            SummaryKind::Detailed => SummaryContent::Paragraphs(DETAILED),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SummaryKind::OneLine => SummaryKind::Bullets,
            SummaryKind::Bullets => SummaryKind::Detailed,
            SummaryKind::Detailed => SummaryKind::OneLine,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SummaryKind::OneLine => SummaryKind::Detailed,
            SummaryKind::Bullets => SummaryKind::OneLine,
            SummaryKind::Detailed => SummaryKind::Bullets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bullets() {
        assert_eq!(SummaryKind::default(), SummaryKind::Bullets);
        assert!(matches!(SummaryKind::default().content(), SummaryContent::Bullets(b) if b.len() == 6));
    }

    #[test]
    fn test_each_kind_has_distinct_content() {
        let contents: Vec<SummaryContent> = SummaryKind::all().iter().map(|k| k.content()).collect();
        assert!(matches!(contents[0], SummaryContent::Sentence(_)));
        assert!(matches!(contents[1], SummaryContent::Bullets(_)));
        assert!(matches!(contents[2], SummaryContent::Paragraphs(p) if p.len() == 4));
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        for kind in SummaryKind::all() {
            assert_eq!(kind.next().prev(), kind);
        }
    }
}
