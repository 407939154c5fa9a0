//! Domain model (records, rules, reports, view state, errors).

pub mod condition;
pub mod errors;
pub mod ids;
pub mod outcome;
pub mod report;
pub mod rules;
pub mod state;

pub use condition::{ConditionRecord, Rule};
pub use errors::{CarepageError, InputError};
pub use ids::{AnalysisId, SessionId};
pub use outcome::{Notice, Outcome};
pub use report::{AnalysisReport, DISCLAIMER};
pub use rules::{DEFAULT_RULES, GENERAL_SYMPTOMS};
pub use state::{MenuState, NavbarStyle, ResultView};
