//! Inline highlighting of known medical terms
//!
//! Matching is case-insensitive and done in a single left-to-right pass.
//! At each position the longest matching term wins, with ties going to the
//! term listed first. Matches never overlap, so a term that is a substring of
//! another (e.g. "pneumonia" inside "bronchopneumonia") only matches where the
//! longer term does not.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// Matched text in its original casing, plus the index of the term
    Term { text: &'a str, term_index: usize },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) => text,
            Segment::Term { text, .. } => text,
        }
    }
}

/// Byte length of the prefix of `haystack` matching `needle` ignoring case
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    let mut end = 0;

    for n in needle.chars() {
        let (idx, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        end = idx + h.len_utf8();
    }

    Some(end)
}

/// Split `text` into plain runs and term matches. Concatenating the segment
/// texts reproduces `text` exactly.
pub fn highlight<'a, S: AsRef<str>>(text: &'a str, terms: &[S]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let mut best: Option<(usize, usize)> = None; // (term_index, byte_len)

        for (i, term) in terms.iter().enumerate() {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }
            if let Some(len) = match_len(rest, term) {
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((i, len));
                }
            }
        }

        match best {
            Some((term_index, len)) => {
                if plain_start < pos {
                    segments.push(Segment::Plain(&text[plain_start..pos]));
                }
                segments.push(Segment::Term {
                    text: &text[pos..pos + len],
                    term_index,
                });
                pos += len;
                plain_start = pos;
            }
            None => {
                // Advance by one whole character to stay on a UTF-8 boundary
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text()).collect()
    }

    #[test]
    fn test_preserves_text_exactly() {
        let text = "Chest X-ray reveals bilateral infiltrates  consistent with Pneumonia.";
        let segments = highlight(text, &["pneumonia", "bilateral infiltrates"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_case_insensitive_keeps_original_casing() {
        let segments = highlight("copd and COPD", &["COPD"]);
        assert_eq!(
            segments,
            vec![
                Segment::Term { text: "copd", term_index: 0 },
                Segment::Plain(" and "),
                Segment::Term { text: "COPD", term_index: 0 },
            ]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let terms = ["infiltrates", "bilateral infiltrates", "bilateral"];
        let segments = highlight("bilateral infiltrates", &terms);
        assert_eq!(
            segments,
            vec![Segment::Term { text: "bilateral infiltrates", term_index: 1 }]
        );
    }

    #[test]
    fn test_tie_goes_to_first_term() {
        let segments = highlight("SpO2", &["spo2", "SPO2"]);
        assert_eq!(segments, vec![Segment::Term { text: "SpO2", term_index: 0 }]);
    }

    #[test]
    fn test_no_match_and_empty_terms() {
        let segments = highlight("nothing here", &["", "copd"]);
        assert_eq!(segments, vec![Segment::Plain("nothing here")]);
        assert!(highlight("", &["copd"]).is_empty());
    }

    #[test]
    fn test_non_ascii_text() {
        let text = "Pulmonary — COPD — naïve";
        let segments = highlight(text, &["copd"]);
        assert_eq!(joined(&segments), text);
        assert!(segments.iter().any(|s| matches!(s, Segment::Term { text: "COPD", .. })));
    }
}
