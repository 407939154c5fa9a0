//! Outcome model: what a page action hands back to the surface.
//!
//! The surface (CLI, tests) decides how to present it. Outcomes carry typed
//! data only; turning them into text is [`crate::app::render`]'s job.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{MenuState, NavbarStyle, ResultView};

/// A user-visible placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// The results region changed.
    View(ResultView),

    /// A placeholder message should be shown.
    Notice(Notice),

    /// The navigation menu changed.
    Menu(MenuState),

    /// Scroll the window to `top` (px); the menu is left in `menu`.
    Scroll { top: u32, menu: MenuState },

    /// Scroll the section with this id into view.
    Section(String),

    /// The navbar appearance after a scroll event.
    Navbar(NavbarStyle),

    /// A section intersected the viewport. `first_time` is false once it has
    /// already been revealed.
    Reveal { section: String, first_time: bool },
}

impl Outcome {
    pub fn notice(message: impl Into<String>) -> Self {
        Outcome::Notice(Notice::new(message))
    }

    pub fn as_view(&self) -> Option<&ResultView> {
        match self {
            Outcome::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Notice(n) => Some(n),
            _ => None,
        }
    }
}
