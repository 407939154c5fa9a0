//! The fixed symptom rule table.
//!
//! Order matters: the matcher evaluates rules in declaration order and
//! returns every record whose rule fires.

use std::borrow::Cow::{self, Borrowed};

use super::condition::{ConditionRecord, Rule};

const TENSION_HEADACHE_RECS: &[Cow<'static, str>] = &[
    Borrowed("Rest in a quiet room"),
    Borrowed("Apply cold compress"),
    Borrowed("Stay hydrated"),
    Borrowed("Consider over-the-counter pain relief"),
];

const VIRAL_INFECTION_RECS: &[Cow<'static, str>] = &[
    Borrowed("Rest and stay hydrated"),
    Borrowed("Monitor temperature"),
    Borrowed("Consider fever-reducing medication"),
    Borrowed("Contact doctor if fever persists"),
];

const RESPIRATORY_INFECTION_RECS: &[Cow<'static, str>] = &[
    Borrowed("Stay hydrated"),
    Borrowed("Use throat lozenges"),
    Borrowed("Avoid irritants"),
    Borrowed("Consider cough suppressants if needed"),
];

const GENERAL_SYMPTOMS_RECS: &[Cow<'static, str>] = &[
    Borrowed("Rest and monitor symptoms"),
    Borrowed("Stay hydrated"),
    Borrowed("Contact healthcare provider if symptoms worsen"),
];

pub const TENSION_HEADACHE: ConditionRecord = ConditionRecord::from_static(
    "Possible tension headache",
    "Common condition often related to stress, muscle tension, or dehydration.",
    TENSION_HEADACHE_RECS,
);

pub const VIRAL_INFECTION: ConditionRecord = ConditionRecord::from_static(
    "Possible viral infection",
    "Fever is often a sign of viral or bacterial infection.",
    VIRAL_INFECTION_RECS,
);

pub const RESPIRATORY_INFECTION: ConditionRecord = ConditionRecord::from_static(
    "Possible respiratory infection",
    "Cough and throat symptoms can indicate respiratory issues.",
    RESPIRATORY_INFECTION_RECS,
);

/// Returned alone when no rule fires.
pub static GENERAL_SYMPTOMS: ConditionRecord = ConditionRecord::from_static(
    "General symptoms analysis",
    "Based on your description, it appears to be a mild condition.",
    GENERAL_SYMPTOMS_RECS,
);

pub static DEFAULT_RULES: [Rule; 3] = [
    Rule::new(&["headache", "head"], TENSION_HEADACHE),
    Rule::new(&["fever", "temperature"], VIRAL_INFECTION),
    Rule::new(&["cough", "throat"], RESPIRATORY_INFECTION),
];
