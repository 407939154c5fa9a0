//! Page - 起動時の一回限りの初期化
//!
//! 各インタラクティブ領域の Handler をまとめて登録し、
//! 期待される action_type が全て揃っていることを起動時に検証します。

use std::sync::{Arc, Mutex};

use tracing::info;

use super::actions::{
    ALL_ACTION_TYPES, AnalyzeSymptoms, FindProviders, NavEvent, PageScrolled, RequestLocation,
    ResetAnalysis, SectionVisible, SubmitForm,
};
use super::builder::{App, AppBuilder, BuildError};
use super::forms::FormInterceptor;
use super::lock;
use super::nav::NavMenu;
use super::providers::ProviderSearch;
use super::scroll::{NavbarEffects, RevealTracker};
use super::symptoms::SymptomChecker;
use crate::config::PageConfig;
use crate::domain::errors::CarepageError;
use crate::domain::outcome::Outcome;
use crate::domain::state::{MenuState, ResultView};
use crate::matcher::ConditionMatcher;
use crate::typed::Action;

/// An initialized page: the dispatcher plus handles to region state.
pub struct Page {
    app: App,
    symptoms: Arc<SymptomChecker>,
    menu: Arc<Mutex<NavMenu>>,
    reveal: Arc<Mutex<RevealTracker>>,
}

/// Wires every interactive region. Call once at startup.
pub fn init_app(config: &PageConfig) -> Result<Page, BuildError> {
    let symptoms = Arc::new(SymptomChecker::new(
        ConditionMatcher::default(),
        config.analysis_delay(),
    ));
    let menu = Arc::new(Mutex::new(NavMenu::new(config.nav_offset_px)));
    let navbar = Arc::new(Mutex::new(NavbarEffects::new(
        config.shadow_threshold_px,
        config.hide_threshold_px,
    )));
    let reveal = Arc::new(Mutex::new(RevealTracker::new()));

    let app = AppBuilder::new()
        .register::<AnalyzeSymptoms, _>(symptoms.clone())?
        .register::<ResetAnalysis, _>(symptoms.clone())?
        .register::<FindProviders, _>(ProviderSearch)?
        .register::<RequestLocation, _>(ProviderSearch)?
        .register::<SubmitForm, _>(FormInterceptor)?
        .register::<NavEvent, _>(menu.clone())?
        .register::<PageScrolled, _>(navbar)?
        .register::<SectionVisible, _>(reveal.clone())?
        .expect_actions(ALL_ACTION_TYPES)
        .build()?;

    info!(
        session = %symptoms.id(),
        actions = app.registry().len(),
        "page initialized"
    );
    Ok(Page {
        app,
        symptoms,
        menu,
        reveal,
    })
}

impl Page {
    pub fn app(&self) -> &App {
        &self.app
    }

    pub async fn dispatch(
        &self,
        action_type: &str,
        payload: serde_json::Value,
    ) -> Result<Outcome, CarepageError> {
        self.app.dispatch(action_type, payload).await
    }

    pub async fn perform<A: Action>(&self, action: A) -> Result<Outcome, CarepageError> {
        self.app.perform(action).await
    }

    pub fn symptoms(&self) -> &Arc<SymptomChecker> {
        &self.symptoms
    }

    pub fn result_view(&self) -> ResultView {
        self.symptoms.view()
    }

    pub fn menu_state(&self) -> MenuState {
        lock(&self.menu).state()
    }

    pub fn is_revealed(&self, section: &str) -> bool {
        lock(&self.reveal).is_revealed(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::InputError;
    use crate::domain::outcome::Notice;
    use crate::domain::state::NavbarStyle;
    use serde_json::json;

    fn page() -> Page {
        init_app(&PageConfig::default().with_analysis_delay_ms(0)).unwrap()
    }

    #[test]
    fn init_registers_every_region() {
        let page = page();
        let mut expected: Vec<String> = ALL_ACTION_TYPES.iter().map(|t| t.to_string()).collect();
        expected.sort();
        assert_eq!(page.app().registry().registered_types(), expected);
    }

    #[tokio::test]
    async fn blank_symptoms_surface_user_error() {
        let page = page();
        let err = page
            .perform(AnalyzeSymptoms {
                symptoms: "  ".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CarepageError::Input(InputError::EmptySymptoms)));
        assert!(matches!(page.result_view(), ResultView::Error { .. }));
    }

    #[tokio::test]
    async fn analyze_then_reset_via_dispatch() {
        let page = page();
        let out = page
            .dispatch(AnalyzeSymptoms::TYPE, json!({ "symptoms": "sore throat" }))
            .await
            .unwrap();
        let report = out.as_view().and_then(|v| v.report()).unwrap();
        assert_eq!(report.condition_names(), vec!["Possible respiratory infection"]);

        let out = page.dispatch(ResetAnalysis::TYPE, json!({})).await.unwrap();
        assert_eq!(out, Outcome::View(ResultView::Placeholder));
        assert_eq!(page.symptoms().input(), "");
    }

    #[tokio::test]
    async fn provider_search_requires_location() {
        let page = page();
        let err = page
            .perform(FindProviders {
                specialty: "Pediatrics".into(),
                location: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message().as_deref(),
            Some("Please enter a location to find healthcare providers.")
        );

        let out = page
            .perform(FindProviders {
                specialty: String::new(),
                location: "Denver".into(),
            })
            .await
            .unwrap();
        assert!(out.as_notice().unwrap().as_str().contains("near Denver"));
    }

    #[tokio::test]
    async fn form_submit_and_locate_return_notices() {
        let page = page();
        let out = page
            .perform(SubmitForm {
                form: "contact".into(),
            })
            .await
            .unwrap();
        assert_eq!(
            out,
            Outcome::Notice(Notice::new(
                "Form submission would be handled here in a real application."
            ))
        );

        let out = page.perform(RequestLocation {}).await.unwrap();
        assert!(out.as_notice().is_some());
    }

    #[tokio::test]
    async fn nav_and_scroll_events_update_region_state() {
        let page = page();
        page.perform(NavEvent::Toggle).await.unwrap();
        assert_eq!(page.menu_state(), MenuState::Expanded);
        page.perform(NavEvent::ClickOutside).await.unwrap();
        assert_eq!(page.menu_state(), MenuState::Collapsed);

        let out = page.perform(PageScrolled { y: 250 }).await.unwrap();
        assert_eq!(
            out,
            Outcome::Navbar(NavbarStyle {
                shadow: true,
                hidden: true
            })
        );

        page.perform(SectionVisible {
            section: "features".into(),
        })
        .await
        .unwrap();
        assert!(page.is_revealed("features"));
    }
}
