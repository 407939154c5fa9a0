//! Condition records and keyword rules.
//!
//! Records are pre-authored disclosure templates. They are usually built from
//! `'static` text (see [`crate::domain::rules`]) and cloned into results, so
//! every text field is a `Cow<'static, _>`: borrowed for the fixed table,
//! owned after deserialization.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A static, pre-authored condition template shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Short title, e.g. "Possible tension headache".
    pub name: Cow<'static, str>,

    /// One-sentence explanation.
    pub description: Cow<'static, str>,

    /// Suggested actions in display order.
    pub recommendations: Cow<'static, [Cow<'static, str>]>,
}

impl ConditionRecord {
    /// Builds a record from borrowed `'static` text. Usable in `const`/`static` items.
    pub const fn from_static(
        name: &'static str,
        description: &'static str,
        recommendations: &'static [Cow<'static, str>],
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
            recommendations: Cow::Borrowed(recommendations),
        }
    }
}

/// A keyword set mapped to the record it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Lowercase trigger substrings.
    pub keywords: &'static [&'static str],
    pub produces: ConditionRecord,
}

impl Rule {
    pub const fn new(keywords: &'static [&'static str], produces: ConditionRecord) -> Self {
        Self { keywords, produces }
    }

    /// `lowered` must already be lowercased by the caller.
    pub fn fires(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RECS: &[Cow<'static, str>] = &[Cow::Borrowed("a"), Cow::Borrowed("b")];
    const SAMPLE: ConditionRecord = ConditionRecord::from_static("n", "d", SAMPLE_RECS);

    #[test]
    fn rule_fires_on_any_keyword() {
        let rule = Rule::new(&["alpha", "beta"], SAMPLE);
        assert!(rule.fires("xx beta yy"));
        assert!(rule.fires("alphabet"));
        assert!(!rule.fires("gamma"));
    }

    #[test]
    fn rule_with_no_keywords_never_fires() {
        let rule = Rule::new(&[], SAMPLE);
        assert!(!rule.fires(""));
        assert!(!rule.fires("anything"));
    }

    #[test]
    fn record_serializes_as_plain_strings() {
        let v = serde_json::to_value(&SAMPLE).unwrap();
        assert_eq!(v["name"], "n");
        assert_eq!(v["recommendations"], serde_json::json!(["a", "b"]));

        let back: ConditionRecord = serde_json::from_value(v).unwrap();
        assert_eq!(back, SAMPLE);
    }
}
