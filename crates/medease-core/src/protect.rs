//! Numeric protection helpers
//!
//! Simplified text must never change a dose, a range, or a lab value. These
//! helpers mask numerals behind `[NUM_i]` placeholders and compare the numeral
//! sequence of two texts.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn numeral_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d[\d.,:/-]*").expect("numeral pattern is valid"))
}

/// All numerals in `text`, in order of appearance
pub fn numerals(text: &str) -> Vec<&str> {
    numeral_re().find_iter(text).map(|m| m.as_str()).collect()
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[NUM_(\d+)\]").expect("placeholder pattern is valid"))
}

/// Replace each numeral with a `[NUM_i]` placeholder in a single pass.
/// Returns the masked text and the placeholder mapping in order.
pub fn mask_numerics(text: &str) -> (String, Vec<(String, String)>) {
    let mut mapping = Vec::new();

    let masked = numeral_re().replace_all(text, |caps: &Captures| {
        let key = format!("[NUM_{}]", mapping.len());
        mapping.push((key.clone(), caps[0].to_string()));
        key
    });

    (masked.into_owned(), mapping)
}

/// Put the original numerals back. Placeholders without a mapping entry are left as they are.
pub fn restore_placeholders(text: &str, mapping: &[(String, String)]) -> String {
    placeholder_re()
        .replace_all(text, |caps: &Captures| {
            mapping
                .iter()
                .find(|(key, _)| key == &caps[0])
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn numerics_unchanged(original: &str, new: &str) -> bool {
    numerals(original) == numerals(new)
}

/// Result of running a rewrite over numerically protected text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded {
    /// The rewrite kept every placeholder in order; numerals restored
    Accepted(String),
    /// The rewrite dropped, reordered or invented a number
    Rejected,
}

impl Guarded {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Guarded::Accepted(_))
    }
}

/// Mask the numerals of `text`, rewrite the masked text, and restore the
/// numerals only if the rewrite left the placeholders untouched.
pub fn guard_rewrite<F>(text: &str, rewrite: F) -> (String, Guarded)
where
    F: FnOnce(&str) -> String,
{
    let (masked, mapping) = mask_numerics(text);
    let rewritten = rewrite(&masked);

    let outcome = if numerics_unchanged(&masked, &rewritten) {
        Guarded::Accepted(restore_placeholders(&rewritten, &mapping))
    } else {
        Guarded::Rejected
    };

    (masked, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numerals_found_in_order() {
        assert_eq!(numerals("SpO2 94-98% at 10:30, 2.5 mg"), vec!["2", "94-98", "10:30,", "2.5"]);
        assert!(numerals("no digits").is_empty());
    }

    #[test]
    fn test_mask_and_restore() {
        let text = "Give 5 mg twice, target 94-98%.";
        let (masked, mapping) = mask_numerics(text);
        assert_eq!(masked, "Give [NUM_0] mg twice, target [NUM_1]%.");
        assert_eq!(mapping.len(), 2);
        assert_eq!(restore_placeholders(&masked, &mapping), text);
    }

    #[test]
    fn test_mask_does_not_touch_earlier_placeholders() {
        let text = "Give 5 mg then 0 mg, 1 tablet at 10:00";
        let (masked, mapping) = mask_numerics(text);
        assert_eq!(masked, "Give [NUM_0] mg then [NUM_1] mg, [NUM_2] tablet at [NUM_3]");
        assert_eq!(mapping[1], ("[NUM_1]".to_string(), "0".to_string()));
        assert_eq!(restore_placeholders(&masked, &mapping), text);
    }

    #[test]
    fn test_restore_with_many_placeholders() {
        let text: String = (0..12).map(|i| format!("{} ", i * 7)).collect();
        let (masked, mapping) = mask_numerics(&text);
        assert!(masked.contains("[NUM_11]"));
        assert_eq!(restore_placeholders(&masked, &mapping), text);
        assert_eq!(restore_placeholders("[NUM_99] stays", &mapping), "[NUM_99] stays");
    }

    #[test]
    fn test_guard_rewrite_accepts_rephrasing() {
        let (masked, outcome) = guard_rewrite("Take 2 tablets at 08:00", |m| {
            m.replace("Take", "Swallow").replace("tablets", "pills")
        });
        assert_eq!(masked, "Take [NUM_0] tablets at [NUM_1]");
        assert_eq!(outcome, Guarded::Accepted("Swallow 2 pills at 08:00".to_string()));
    }

    #[test]
    fn test_guard_rewrite_rejects_changed_numbers() {
        let (_, dropped) = guard_rewrite("Take 2 tablets at 08:00", |_| "Take some tablets".to_string());
        assert_eq!(dropped, Guarded::Rejected);

        let (_, invented) = guard_rewrite("Take 2 tablets", |m| format!("{} and 3 more", m));
        assert!(!invented.is_accepted());

        let (_, swapped) = guard_rewrite("2 then 3", |_| "[NUM_1] then [NUM_0]".to_string());
        assert_eq!(swapped, Guarded::Rejected);
    }

    #[test]
    fn test_numerics_unchanged() {
        assert!(numerics_unchanged("take 2 pills", "swallow 2 tablets"));
        assert!(!numerics_unchanged("take 2 pills", "take 3 pills"));
        assert!(!numerics_unchanged("94-98%", "94%"));
    }
}
