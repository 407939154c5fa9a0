//! Scroll effects - navbar の影・表示切り替えとセクションの出現

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use super::actions::{PageScrolled, SectionVisible};
use super::lock;
use crate::domain::errors::CarepageError;
use crate::domain::outcome::Outcome;
use crate::domain::state::NavbarStyle;
use crate::typed::Handler;

/// Derives the navbar style from consecutive scroll positions.
#[derive(Debug, Clone)]
pub struct NavbarEffects {
    last_y: u32,
    shadow_threshold: u32,
    hide_threshold: u32,
}

impl NavbarEffects {
    pub fn new(shadow_threshold: u32, hide_threshold: u32) -> Self {
        Self {
            last_y: 0,
            shadow_threshold,
            hide_threshold,
        }
    }

    /// Shadow once past the shadow threshold; hidden only while scrolling
    /// down past the hide threshold.
    pub fn on_scroll(&mut self, y: u32) -> NavbarStyle {
        let style = NavbarStyle {
            shadow: y > self.shadow_threshold,
            hidden: y > self.last_y && y > self.hide_threshold,
        };
        self.last_y = y;
        style
    }
}

/// One-shot reveal of page sections.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `section` is seen.
    pub fn observe(&mut self, section: &str) -> bool {
        if self.revealed.contains(section) {
            return false;
        }
        self.revealed.insert(section.to_string())
    }

    pub fn is_revealed(&self, section: &str) -> bool {
        self.revealed.contains(section)
    }
}

#[async_trait]
impl Handler<PageScrolled> for Arc<Mutex<NavbarEffects>> {
    async fn handle(&self, action: PageScrolled) -> Result<Outcome, CarepageError> {
        let style = lock(self).on_scroll(action.y);
        Ok(Outcome::Navbar(style))
    }
}

#[async_trait]
impl Handler<SectionVisible> for Arc<Mutex<RevealTracker>> {
    async fn handle(&self, action: SectionVisible) -> Result<Outcome, CarepageError> {
        let first_time = lock(self).observe(&action.section);
        debug!(section = %action.section, first_time, "section visible");
        Ok(Outcome::Reveal {
            section: action.section,
            first_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, false, false)]
    #[case(0, 11, true, false)]
    #[case(50, 150, true, true)]
    #[case(200, 150, true, false)]
    #[case(90, 100, true, false)]
    fn navbar_style_from_positions(
        #[case] from: u32,
        #[case] to: u32,
        #[case] shadow: bool,
        #[case] hidden: bool,
    ) {
        let mut fx = NavbarEffects::new(10, 100);
        fx.on_scroll(from);
        assert_eq!(fx.on_scroll(to), NavbarStyle { shadow, hidden });
    }

    #[test]
    fn scrolling_back_up_shows_navbar() {
        let mut fx = NavbarEffects::new(10, 100);
        assert!(fx.on_scroll(400).hidden);
        assert!(!fx.on_scroll(380).hidden);
    }

    #[test]
    fn sections_reveal_once() {
        let mut r = RevealTracker::new();
        assert!(r.observe("features"));
        assert!(!r.observe("features"));
        assert!(r.is_revealed("features"));
        assert!(!r.is_revealed("providers"));
    }
}
