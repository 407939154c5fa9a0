//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use tracing::debug;

use crate::domain::errors::CarepageError;
use crate::domain::outcome::Outcome;
use crate::typed::{Action, ActionRegistry, Handler, RegistryError};

/// AppBuilder はアプリケーションを構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .register::<FindProviders, _>(ProviderSearch)?
///     .expect_actions(&["providers.search.v1"])
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_actions() で期待される action_type を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
pub struct AppBuilder {
    registry: ActionRegistry,
    expected_actions: Option<Vec<String>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing action types: {0:?}. These actions were expected but not registered.")]
    MissingActionTypes(Vec<String>),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            registry: ActionRegistry::new(),
            expected_actions: None,
        }
    }

    pub fn register<A: Action, H: Handler<A> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<A, H>(handler)?;
        Ok(self)
    }

    pub fn expect_actions(mut self, action_types: &[&str]) -> Self {
        self.expected_actions = Some(action_types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected) = &self.expected_actions {
            let registered = self.registry.registered_types();
            let missing: Vec<String> = expected
                .iter()
                .filter(|t| !registered.contains(t))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingActionTypes(missing));
            }
        }
        Ok(App {
            registry: self.registry,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// App dispatches page actions to their registered handlers.
///
/// The registry is built once during initialization and read-only afterwards.
pub struct App {
    registry: ActionRegistry,
}

impl App {
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Dispatches a JSON payload by action type.
    pub async fn dispatch(
        &self,
        action_type: &str,
        payload: serde_json::Value,
    ) -> Result<Outcome, CarepageError> {
        let handler = self
            .registry
            .get(action_type)
            .ok_or_else(|| CarepageError::UnknownAction(action_type.to_string()))?;
        debug!(action_type, "dispatching page action");
        handler.handle_dyn(payload).await
    }

    /// Typed convenience over [`App::dispatch`].
    pub async fn perform<A: Action>(&self, action: A) -> Result<Outcome, CarepageError> {
        let payload = serde_json::to_value(&action).map_err(|source| CarepageError::Payload {
            action_type: A::TYPE.to_string(),
            source,
        })?;
        self.dispatch(A::TYPE, payload).await
    }
}
