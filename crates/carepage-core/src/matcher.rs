//! ConditionMatcher - 症状テキストから ConditionRecord を引く
//!
//! 純粋関数として設計されます（副作用なし、内部状態なし）。
//! 同じ入力には常に同じ出力を返します。

use tracing::debug;

use crate::domain::condition::{ConditionRecord, Rule};
use crate::domain::rules::{DEFAULT_RULES, GENERAL_SYMPTOMS};

/// Maps free text to condition records with case-insensitive substring tests.
///
/// Rules are tried in declaration order. Every rule that fires contributes its
/// record (no de-duplication); if none fires, the fallback record is returned
/// alone. The result is never empty.
#[derive(Debug, Clone, Copy)]
pub struct ConditionMatcher {
    rules: &'static [Rule],
    fallback: &'static ConditionRecord,
}

impl ConditionMatcher {
    pub const fn new(rules: &'static [Rule], fallback: &'static ConditionRecord) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Empty input is accepted and yields the fallback; rejecting blank text is
    /// the caller's job.
    pub fn match_symptoms(&self, input: &str) -> Vec<ConditionRecord> {
        let lowered = input.to_lowercase();

        let mut conditions: Vec<ConditionRecord> = self
            .rules
            .iter()
            .filter(|rule| rule.fires(&lowered))
            .map(|rule| rule.produces.clone())
            .collect();

        if conditions.is_empty() {
            conditions.push(self.fallback.clone());
        }

        debug!(
            matched = conditions.len(),
            first = %conditions[0].name,
            "symptom rules evaluated"
        );
        conditions
    }
}

impl Default for ConditionMatcher {
    fn default() -> Self {
        Self::new(&DEFAULT_RULES, &GENERAL_SYMPTOMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::{RESPIRATORY_INFECTION, TENSION_HEADACHE, VIRAL_INFECTION};
    use rstest::rstest;

    fn names(records: &[ConditionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_ref()).collect()
    }

    #[rstest]
    #[case("headache")]
    #[case("HeadAche")]
    #[case("my HEAD hurts")]
    #[case("forehead pain")]
    fn head_keywords_include_tension_headache(#[case] input: &str) {
        let out = ConditionMatcher::default().match_symptoms(input);
        assert!(out.contains(&TENSION_HEADACHE));
    }

    #[test]
    fn fever_and_headache_keeps_declaration_order() {
        let out = ConditionMatcher::default().match_symptoms("I have a fever and a headache");
        assert_eq!(out, vec![TENSION_HEADACHE, VIRAL_INFECTION]);
    }

    #[test]
    fn unmatched_input_falls_back_to_general() {
        let out = ConditionMatcher::default().match_symptoms("I feel fine but tired");
        assert_eq!(names(&out), vec!["General symptoms analysis"]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn empty_input_still_yields_one_record() {
        let out = ConditionMatcher::default().match_symptoms("");
        assert_eq!(out, vec![GENERAL_SYMPTOMS.clone()]);
    }

    #[test]
    fn all_three_rules_can_fire_together() {
        let out = ConditionMatcher::default()
            .match_symptoms("sore throat, high temperature and a pounding head");
        assert_eq!(out, vec![TENSION_HEADACHE, VIRAL_INFECTION, RESPIRATORY_INFECTION]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = ConditionMatcher::default();
        assert_eq!(m.match_symptoms("COUGH"), m.match_symptoms("cough"));
        assert_eq!(m.match_symptoms("COUGH"), vec![RESPIRATORY_INFECTION]);
    }

    #[test]
    fn matching_is_idempotent() {
        let m = ConditionMatcher::default();
        let s = "fever, cough";
        assert_eq!(m.match_symptoms(s), m.match_symptoms(s));
    }

    #[test]
    fn one_rule_contributes_once_even_with_several_keywords() {
        let out = ConditionMatcher::default().match_symptoms("headache in my head");
        assert_eq!(out, vec![TENSION_HEADACHE]);
    }

    #[test]
    fn custom_rule_table() {
        static RULES: [Rule; 1] = [Rule::new(&["rash"], RESPIRATORY_INFECTION)];
        let m = ConditionMatcher::new(&RULES, &GENERAL_SYMPTOMS);
        assert_eq!(m.rules().len(), 1);
        assert_eq!(m.match_symptoms("a RASH"), vec![RESPIRATORY_INFECTION]);
        assert_eq!(m.match_symptoms("headache"), vec![GENERAL_SYMPTOMS.clone()]);
    }
}
