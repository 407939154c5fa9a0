//! Navigation - モバイルメニューとアンカースクロール

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::actions::NavEvent;
use super::lock;
use crate::domain::errors::CarepageError;
use crate::domain::outcome::Outcome;
use crate::domain::state::MenuState;
use crate::typed::Handler;

/// Hero call-to-action buttons and the section each one scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroButton {
    Primary,
    Secondary,
}

impl HeroButton {
    pub fn target_section(&self) -> &'static str {
        match self {
            HeroButton::Primary => "symptom-checker",
            HeroButton::Secondary => "providers",
        }
    }
}

/// Mobile menu state machine.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    state: MenuState,
    nav_offset: u32,
}

impl NavMenu {
    pub fn new(nav_offset: u32) -> Self {
        Self {
            state: MenuState::Collapsed,
            nav_offset,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        };
        self.state
    }

    /// Clicks inside the nav container or on the toggle never reach here.
    pub fn click_outside(&mut self) -> MenuState {
        self.state = MenuState::Collapsed;
        self.state
    }

    /// Collapses the menu and returns the window offset that puts the section
    /// just below the fixed navbar.
    pub fn navigate(&mut self, section_top: u32) -> u32 {
        self.state = MenuState::Collapsed;
        section_top.saturating_sub(self.nav_offset)
    }
}

#[async_trait]
impl Handler<NavEvent> for Arc<Mutex<NavMenu>> {
    async fn handle(&self, event: NavEvent) -> Result<Outcome, CarepageError> {
        debug!(?event, "nav event");
        let mut menu = lock(self);
        let outcome = match event {
            NavEvent::Toggle => Outcome::Menu(menu.toggle()),
            NavEvent::ClickOutside => Outcome::Menu(menu.click_outside()),
            NavEvent::Navigate { section_top } => {
                let top = menu.navigate(section_top);
                Outcome::Scroll {
                    top,
                    menu: menu.state(),
                }
            }
            NavEvent::Hero { button } => Outcome::Section(button.target_section().to_string()),
        };
        Ok(outcome)
    }
}
