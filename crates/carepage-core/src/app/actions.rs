//! Page actions: one typed action per interactive region.

use serde::{Deserialize, Serialize};

use super::nav::HeroButton;
use crate::typed::Action;

/// "Analyze" button of the symptom checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSymptoms {
    pub symptoms: String,
}

impl Action for AnalyzeSymptoms {
    const TYPE: &'static str = "symptoms.analyze.v1";
}

/// "Start New Analysis" control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetAnalysis {}

impl Action for ResetAnalysis {
    const TYPE: &'static str = "symptoms.reset.v1";
}

/// "Find providers" button. An unselected specialty is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindProviders {
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub location: String,
}

impl Action for FindProviders {
    const TYPE: &'static str = "providers.search.v1";
}

/// "Use my location" button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLocation {}

impl Action for RequestLocation {
    const TYPE: &'static str = "providers.locate.v1";
}

/// Any form on the page being submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitForm {
    pub form: String,
}

impl Action for SubmitForm {
    const TYPE: &'static str = "forms.submit.v1";
}

/// Navigation interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavEvent {
    /// Mobile menu toggle button.
    Toggle,
    /// A click anywhere outside the nav container.
    ClickOutside,
    /// A nav link to a section whose top edge is at `section_top` px.
    Navigate { section_top: u32 },
    /// One of the hero call-to-action buttons.
    Hero { button: HeroButton },
}

impl Action for NavEvent {
    const TYPE: &'static str = "nav.event.v1";
}

/// Window scroll position changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScrolled {
    pub y: u32,
}

impl Action for PageScrolled {
    const TYPE: &'static str = "page.scroll.v1";
}

/// A section intersected the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisible {
    pub section: String,
}

impl Action for SectionVisible {
    const TYPE: &'static str = "page.reveal.v1";
}

/// Every action type `init_app` must wire up.
pub const ALL_ACTION_TYPES: &[&str] = &[
    AnalyzeSymptoms::TYPE,
    ResetAnalysis::TYPE,
    FindProviders::TYPE,
    RequestLocation::TYPE,
    SubmitForm::TYPE,
    NavEvent::TYPE,
    PageScrolled::TYPE,
    SectionVisible::TYPE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_decodes_unit_like_actions() {
        let _: ResetAnalysis = serde_json::from_value(json!({})).unwrap();
        let _: RequestLocation = serde_json::from_value(json!({})).unwrap();
    }

    #[test]
    fn find_providers_fields_default_to_empty() {
        let a: FindProviders = serde_json::from_value(json!({ "location": "Boston" })).unwrap();
        assert_eq!(a.specialty, "");
        assert_eq!(a.location, "Boston");
    }

    #[test]
    fn nav_event_is_tagged_by_event() {
        let e: NavEvent =
            serde_json::from_value(json!({ "event": "navigate", "section_top": 640 })).unwrap();
        assert_eq!(e, NavEvent::Navigate { section_top: 640 });

        let e: NavEvent =
            serde_json::from_value(json!({ "event": "hero", "button": "secondary" })).unwrap();
        assert_eq!(
            e,
            NavEvent::Hero {
                button: HeroButton::Secondary
            }
        );
    }

    #[test]
    fn action_types_are_unique() {
        let mut types = ALL_ACTION_TYPES.to_vec();
        types.sort();
        types.dedup();
        assert_eq!(types.len(), ALL_ACTION_TYPES.len());
    }
}
