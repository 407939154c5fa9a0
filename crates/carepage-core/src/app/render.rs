//! Text rendering of typed results.
//!
//! Computation (matcher, session) never formats anything; this module turns
//! the typed view state into display text for a terminal surface.

use crate::domain::outcome::Outcome;
use crate::domain::report::AnalysisReport;
use crate::domain::state::ResultView;

pub const PLACEHOLDER_TEXT: &str = "Enter your symptoms to get AI-powered analysis";
pub const LOADING_TEXT: &str = "Analyzing your symptoms with AI...";
pub const RESET_LABEL: &str = "Start New Analysis";

pub fn render_view(view: &ResultView) -> String {
    match view {
        ResultView::Placeholder => PLACEHOLDER_TEXT.to_string(),
        ResultView::Loading => LOADING_TEXT.to_string(),
        ResultView::Error { message } => format!("! {message}"),
        ResultView::Ready { report } => render_report(report),
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = vec![
        "AI Analysis Complete".into(),
        "Based on your symptoms description".into(),
        String::new(),
        "Possible Conditions:".into(),
    ];
    for condition in &report.conditions {
        lines.push(String::new());
        lines.push(format!("  {}", condition.name));
        lines.push(format!("    {}", condition.description));
        lines.push("    Recommended:".into());
        lines.extend(
            condition
                .recommendations
                .iter()
                .map(|rec| format!("      • {rec}")),
        );
    }
    lines.push(String::new());
    lines.push("Important Notice".into());
    lines.push(report.disclaimer.clone());
    lines.push(String::new());
    lines.push(format!("[{RESET_LABEL}]"));
    lines.join("\n")
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::View(view) => render_view(view),
        Outcome::Notice(notice) => notice.to_string(),
        Outcome::Menu(state) => format!("menu: {state:?} [{}]", state.icon()),
        Outcome::Scroll { top, menu } => format!("scroll to {top}px (menu: {menu:?})"),
        Outcome::Section(id) => format!("scroll into view: #{id}"),
        Outcome::Navbar(style) => format!(
            "navbar: shadow={} hidden={}",
            style.shadow, style.hidden
        ),
        Outcome::Reveal {
            section,
            first_time,
        } => {
            if *first_time {
                format!("fade in: #{section}")
            } else {
                format!("already visible: #{section}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::{TENSION_HEADACHE, VIRAL_INFECTION};

    #[test]
    fn report_lists_conditions_in_order_with_disclaimer() {
        let report = AnalysisReport::new(vec![TENSION_HEADACHE, VIRAL_INFECTION]);
        let text = render_report(&report);

        let headache = text.find("Possible tension headache").unwrap();
        let viral = text.find("Possible viral infection").unwrap();
        assert!(headache < viral);

        assert!(text.contains("      • Rest in a quiet room\n"));
        assert!(text.contains("      • Contact doctor if fever persists\n"));
        assert!(text.contains("Important Notice"));
        assert!(text.contains("for informational purposes only"));
        assert!(text.ends_with("[Start New Analysis]"));
    }

    #[test]
    fn non_ready_views_render_fixed_text() {
        assert_eq!(render_view(&ResultView::Placeholder), PLACEHOLDER_TEXT);
        assert_eq!(render_view(&ResultView::Loading), LOADING_TEXT);
        assert_eq!(
            render_view(&ResultView::Error {
                message: "Please describe your symptoms first.".into()
            }),
            "! Please describe your symptoms first."
        );
    }

    #[test]
    fn notice_outcome_renders_message() {
        assert_eq!(render_outcome(&Outcome::notice("hello")), "hello");
    }
}
