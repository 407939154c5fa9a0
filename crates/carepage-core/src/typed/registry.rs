//! ActionRegistry - Handler の登録と管理
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権

use std::collections::HashMap;
use std::sync::Arc;

use super::action::Action;
use super::handler::{DynHandler, Handler, TypedHandler};

/// ActionRegistry は型付き Handler を登録・管理
///
/// # 使用例
/// ```ignore
/// let mut registry = ActionRegistry::new();
/// registry.register::<FindProviders, _>(ProviderSearch)?;
///
/// let handler = registry.get("providers.search.v1");
/// ```
///
/// # 内部実装
/// - 登録時に TypedHandler でラップして DynHandler に変換
/// - HashMap<String, Arc<dyn DynHandler>> で管理
/// - 初期化時に構築（mutable）、実行時は読み取りのみ
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn DynHandler>>,
}

/// RegistryError は ActionRegistry の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Handler for action type '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<A: Action, H: Handler<A> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        let action_type = A::TYPE.to_string();
        if self.handlers.contains_key(&action_type) {
            return Err(RegistryError::AlreadyRegistered(action_type));
        }
        let typed_handler = TypedHandler::<A, H>::new(handler);
        self.handlers.insert(action_type, Arc::new(typed_handler));
        Ok(())
    }

    pub fn get(&self, action_type: &str) -> Option<Arc<dyn DynHandler>> {
        self.handlers.get(action_type).cloned()
    }

    /// Registered action types, sorted.
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.handlers.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
