use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carepage_core::app::render::{render_outcome, render_view};
use carepage_core::app::{
    AnalyzeSymptoms, FindProviders, HeroButton, NavEvent, PageScrolled, RequestLocation,
    ResetAnalysis, SectionVisible, SubmitForm,
};
use carepage_core::domain::{CarepageError, Outcome};
use carepage_core::{Page, PageConfig, init_app};

#[derive(Debug, Parser)]
#[command(name = "carepage", about = "Symptom checker and page interactions from the terminal")]
struct Cli {
    /// TOML file with page settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated analysis delay.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match a symptom description against the rule table.
    Analyze {
        /// Free-text symptom description.
        text: Vec<String>,

        /// Print the outcome as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Search for healthcare providers (placeholder).
    Providers {
        #[arg(long)]
        location: String,

        #[arg(long, default_value = "")]
        specialty: String,
    },
    /// Request the current location (placeholder).
    Locate,
    /// Submit a form (placeholder).
    Submit { form: String },
    /// Walk through a scripted session.
    Demo,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<PageConfig> {
    let mut config = match &cli.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PageConfig::default(),
    };
    if let Some(ms) = cli.delay_ms {
        config = config.with_analysis_delay_ms(ms);
    }
    Ok(config)
}

/// Exit status for input the page refused (blank symptoms, missing location).
const INPUT_REJECTED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shown {
    Outcome,
    Rejected,
}

impl Shown {
    fn exit_code(self) -> ExitCode {
        match self {
            Shown::Outcome => ExitCode::SUCCESS,
            Shown::Rejected => ExitCode::from(INPUT_REJECTED),
        }
    }
}

/// Prints the outcome, or the user-facing message for rejected input.
fn show(result: Result<Outcome, CarepageError>, json: bool) -> anyhow::Result<Shown> {
    match result {
        Ok(outcome) if json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Ok(outcome) => println!("{}", render_outcome(&outcome)),
        Err(e) => match e.user_message() {
            Some(message) => {
                eprintln!("{message}");
                return Ok(Shown::Rejected);
            }
            None => return Err(e.into()),
        },
    }
    Ok(Shown::Outcome)
}

async fn demo(page: &Page) -> anyhow::Result<()> {
    println!("{}", render_view(&page.result_view()));
    show(page.perform(NavEvent::Toggle).await, false)?;
    show(
        page.perform(NavEvent::Hero {
            button: HeroButton::Primary,
        })
        .await,
        false,
    )?;
    show(page.perform(NavEvent::Navigate { section_top: 720 }).await, false)?;
    show(page.perform(PageScrolled { y: 640 }).await, false)?;
    show(
        page.perform(SectionVisible {
            section: "symptom-checker".into(),
        })
        .await,
        false,
    )?;
    show(
        page.perform(AnalyzeSymptoms {
            symptoms: String::new(),
        })
        .await,
        false,
    )?;
    show(
        page.perform(AnalyzeSymptoms {
            symptoms: "I have a fever and a headache".into(),
        })
        .await,
        false,
    )?;
    show(page.perform(ResetAnalysis {}).await, false)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");
    let page = init_app(&config)?;

    let shown = match cli.command {
        Command::Analyze { text, json } => {
            let symptoms = text.join(" ");
            show(page.perform(AnalyzeSymptoms { symptoms }).await, json)?
        }
        Command::Providers {
            location,
            specialty,
        } => show(
            page.perform(FindProviders {
                specialty,
                location,
            })
            .await,
            false,
        )?,
        Command::Locate => show(page.perform(RequestLocation {}).await, false)?,
        Command::Submit { form } => show(page.perform(SubmitForm { form }).await, false)?,
        Command::Demo => {
            demo(&page).await?;
            Shown::Outcome
        }
    };
    Ok(shown.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepage_core::domain::InputError;

    #[test]
    fn rejected_input_is_reported_not_propagated() {
        let shown = show(Err(InputError::MissingLocation.into()), false).unwrap();
        assert_eq!(shown, Shown::Rejected);

        let shown = show(Err(InputError::EmptySymptoms.into()), true).unwrap();
        assert_eq!(shown, Shown::Rejected);
    }

    #[test]
    fn outcomes_are_shown() {
        let shown = show(Ok(Outcome::notice("ok")), false).unwrap();
        assert_eq!(shown, Shown::Outcome);
    }

    #[test]
    fn internal_errors_propagate() {
        let err = show(Err(CarepageError::UnknownAction("x.v1".into())), false).unwrap_err();
        assert!(err.to_string().contains("x.v1"));
    }

    #[test]
    fn analyze_without_text_parses() {
        let cli = Cli::try_parse_from(["carepage", "analyze"]).unwrap();
        assert!(matches!(cli.command, Command::Analyze { ref text, .. } if text.is_empty()));
    }
}
