#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cardiovascular,
    Respiratory,
    Diagnostic,
    Medication,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cardiovascular => "Cardiovascular",
            Category::Respiratory => "Respiratory",
            Category::Diagnostic => "Diagnostic",
            Category::Medication => "Medication",
            Category::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
    pub category: Category,
}

pub const GLOSSARY: &[GlossaryTerm] = &[
    GlossaryTerm {
        term: "Hypertension",
        definition: "High blood pressure. When the force of blood against your artery walls is consistently too high, which can lead to heart problems over time.",
        category: Category::Cardiovascular,
    },
    GlossaryTerm {
        term: "Hypoxemia",
        definition: "Low oxygen levels in your blood. This can make you feel short of breath or tired, and may require supplemental oxygen.",
        category: Category::Respiratory,
    },
    GlossaryTerm {
        term: "MRI",
        definition: "Magnetic Resonance Imaging. A scan that uses magnets and radio waves to take detailed pictures inside your body without radiation.",
        category: Category::Diagnostic,
    },
    GlossaryTerm {
        term: "Bronchodilator",
        definition: "Medicine that opens up your airways to make breathing easier. Often given through an inhaler for conditions like asthma or COPD.",
        category: Category::Medication,
    },
    GlossaryTerm {
        term: "Bilateral",
        definition: "Affecting both sides. When a doctor says something is bilateral, it means it appears on both sides of your body.",
        category: Category::General,
    },
    GlossaryTerm {
        term: "COPD",
        definition: "Chronic Obstructive Pulmonary Disease. A long-term lung condition that makes it hard to breathe, often caused by smoking.",
        category: Category::Respiratory,
    },
    GlossaryTerm {
        term: "Prognosis",
        definition: "The expected outcome or course of a disease. Your doctor's prediction about how your condition will develop.",
        category: Category::General,
    },
    GlossaryTerm {
        term: "Antibiotic",
        definition: "Medicine that fights bacterial infections. It does not work against viruses like the common cold or flu.",
        category: Category::Medication,
    },
    GlossaryTerm {
        term: "Benign",
        definition: "Not harmful or cancerous. A benign growth or condition is not dangerous and usually doesn't spread.",
        category: Category::General,
    },
    GlossaryTerm {
        term: "Acute",
        definition: "Sudden or severe. An acute condition comes on quickly and may need immediate attention, as opposed to chronic (long-lasting).",
        category: Category::General,
    },
    GlossaryTerm {
        term: "Arrhythmia",
        definition: "Irregular heartbeat. Your heart may beat too fast, too slow, or with an uneven rhythm.",
        category: Category::Cardiovascular,
    },
    GlossaryTerm {
        term: "Biopsy",
        definition: "A test where a small sample of tissue is taken from your body to be examined under a microscope.",
        category: Category::Diagnostic,
    },
];

/// Terms whose name or definition contains `query`, ignoring case.
/// An empty query keeps every term.
pub fn filter(query: &str) -> Vec<&'static GlossaryTerm> {
    let query_lower = query.to_lowercase();

    GLOSSARY
        .iter()
        .filter(|item| {
            item.term.to_lowercase().contains(&query_lower)
                || item.definition.to_lowercase().contains(&query_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter("").len(), GLOSSARY.len());
    }

    #[test]
    fn test_filter_matches_term_or_definition() {
        let terms: Vec<&str> = filter("copd").iter().map(|t| t.term).collect();
        // "COPD" by name, "Bronchodilator" through its definition
        assert_eq!(terms, vec!["Bronchodilator", "COPD"]);
    }

    #[test]
    fn test_filter_is_exact_subset() {
        for query in ["heart", "OXYGEN", "medicine", "x", "zzz", " "] {
            let q = query.to_lowercase();
            let expected: Vec<&str> = GLOSSARY
                .iter()
                .filter(|t| t.term.to_lowercase().contains(&q) || t.definition.to_lowercase().contains(&q))
                .map(|t| t.term)
                .collect();
            let actual: Vec<&str> = filter(query).iter().map(|t| t.term).collect();
            assert_eq!(actual, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter("xylophone").is_empty());
    }
}
