//! SymptomChecker - 症状チェッカーのセッション
//!
//! 入力検証 → Loading → 人工的な遅延 → ConditionMatcher → Ready、という流れで
//! 結果表示領域 (`ResultView`) を更新します。
//!
//! # 並行性
//! - 解析中の二重起動は `AnalysisInProgress` で拒否（ボタン無効化の代わり）
//! - 状態は std の Mutex で保持し、`.await` をまたいでロックを保持しない
//! - reset と空入力は世代を進める。古い世代の解析は結果を反映せず、
//!   新しい解析もブロックしない

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::actions::{AnalyzeSymptoms, ResetAnalysis};
use super::lock;
use crate::domain::errors::{CarepageError, InputError};
use crate::domain::ids::SessionId;
use crate::domain::outcome::Outcome;
use crate::domain::report::AnalysisReport;
use crate::domain::state::ResultView;
use crate::matcher::ConditionMatcher;
use crate::typed::Handler;

#[derive(Debug, Default)]
struct CheckerState {
    input: String,
    view: ResultView,
    /// Bumped by reset and by rejected blank input; an analysis only
    /// publishes if the generation it started in is still current.
    generation: u64,
    /// Generation of the analysis in flight, if any.
    pending: Option<u64>,
}

impl CheckerState {
    fn is_pending(&self) -> bool {
        self.pending == Some(self.generation)
    }
}

pub struct SymptomChecker {
    id: SessionId,
    matcher: ConditionMatcher,
    delay: Duration,
    state: Mutex<CheckerState>,
}

/// Clears the in-flight marker even if the analysis future is dropped.
struct PendingGuard<'a> {
    state: &'a Mutex<CheckerState>,
    generation: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        if state.pending == Some(self.generation) {
            state.pending = None;
        }
    }
}

impl SymptomChecker {
    pub fn new(matcher: ConditionMatcher, delay: Duration) -> Self {
        Self {
            id: SessionId::generate(),
            matcher,
            delay,
            state: Mutex::new(CheckerState::default()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn view(&self) -> ResultView {
        lock(&self.state).view.clone()
    }

    /// The symptom text currently held by the input field.
    pub fn input(&self) -> String {
        lock(&self.state).input.clone()
    }

    /// True while an analysis of the current generation is in flight.
    pub fn is_pending(&self) -> bool {
        lock(&self.state).is_pending()
    }

    /// Validates `input`, waits the configured delay, then matches and publishes.
    ///
    /// Blank input is rejected without touching the matcher or the delay, and
    /// supersedes any analysis still in flight.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisReport, InputError> {
        let symptoms = input.trim();
        let generation = {
            let mut state = lock(&self.state);
            if symptoms.is_empty() {
                warn!(session = %self.id, "empty symptom description rejected");
                state.generation += 1;
                state.view = ResultView::Error {
                    message: InputError::EmptySymptoms.to_string(),
                };
                return Err(InputError::EmptySymptoms);
            }
            if state.is_pending() {
                warn!(session = %self.id, "analysis already in progress, trigger ignored");
                return Err(InputError::AnalysisInProgress);
            }
            state.input = symptoms.to_string();
            state.view = ResultView::Loading;
            state.pending = Some(state.generation);
            state.generation
        };
        let _pending = PendingGuard {
            state: &self.state,
            generation,
        };
        info!(session = %self.id, delay_ms = self.delay.as_millis() as u64, "analyzing symptoms");

        tokio::time::sleep(self.delay).await;

        let report = AnalysisReport::new(self.matcher.match_symptoms(symptoms));
        {
            let mut state = lock(&self.state);
            if state.generation == generation {
                state.view = ResultView::Ready {
                    report: report.clone(),
                };
            } else {
                info!(session = %self.id, analysis = %report.id, "stale result discarded");
            }
        }
        info!(
            session = %self.id,
            analysis = %report.id,
            conditions = report.conditions.len(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Clears the input and returns the results region to its placeholder.
    /// An analysis still in flight will not publish and no longer blocks.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.input.clear();
        state.view = ResultView::Placeholder;
        state.generation += 1;
    }
}

#[async_trait]
impl Handler<AnalyzeSymptoms> for Arc<SymptomChecker> {
    async fn handle(&self, action: AnalyzeSymptoms) -> Result<Outcome, CarepageError> {
        self.analyze(&action.symptoms).await?;
        Ok(Outcome::View(self.view()))
    }
}

#[async_trait]
impl Handler<ResetAnalysis> for Arc<SymptomChecker> {
    async fn handle(&self, _action: ResetAnalysis) -> Result<Outcome, CarepageError> {
        self.reset();
        Ok(Outcome::View(self.view()))
    }
}
