//! AnalysisReport - 解析結果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::condition::ConditionRecord;
use super::ids::AnalysisId;

/// Fixed notice attached to every report.
pub const DISCLAIMER: &str = "This analysis is for informational purposes only and does not \
replace professional medical advice. Please consult a healthcare provider for proper diagnosis \
and treatment.";

/// The typed result of one completed analysis.
///
/// `conditions` is never empty: the matcher falls back to a default record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: AnalysisId,
    pub analyzed_at: DateTime<Utc>,
    pub conditions: Vec<ConditionRecord>,
    pub disclaimer: String,
}

impl AnalysisReport {
    pub fn new(conditions: Vec<ConditionRecord>) -> Self {
        Self {
            id: AnalysisId::generate(),
            analyzed_at: Utc::now(),
            conditions,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    pub fn condition_names(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.name.as_ref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::TENSION_HEADACHE;

    #[test]
    fn report_carries_disclaimer() {
        let r = AnalysisReport::new(vec![TENSION_HEADACHE]);
        assert!(r.disclaimer.contains("informational purposes only"));
        assert!(r.disclaimer.contains("consult a healthcare provider"));
        assert_eq!(r.condition_names(), vec!["Possible tension headache"]);
    }

    #[test]
    fn report_roundtrip_json() {
        let r = AnalysisReport::new(vec![TENSION_HEADACHE]);
        let s = serde_json::to_string(&r).unwrap();
        let back: AnalysisReport = serde_json::from_str(&s).unwrap();
        assert_eq!(back, r);
    }
}
