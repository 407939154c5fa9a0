//! Handler trait - Action を処理する Handler の定義
//!
//! # 学習ポイント
//! - ジェネリック trait (Handler<A>)
//! - Object-safe trait (DynHandler)
//! - Type erasure パターン (TypedHandler<A, H> → DynHandler)

use std::marker::PhantomData;

use async_trait::async_trait;

use super::action::Action;
use crate::domain::errors::CarepageError;
use crate::domain::outcome::Outcome;

/// Handler は Action を処理して Outcome を返す
///
/// # ジェネリクスによる型安全性
/// - `Handler<FindProviders>` は `FindProviders` しか受け取れない
/// - コンパイル時に Action と Handler の対応が保証される
#[async_trait]
pub trait Handler<A: Action>: Send + Sync {
    async fn handle(&self, action: A) -> Result<Outcome, CarepageError>;
}

/// DynHandler は object-safe な Handler の抽象化
///
/// TypedHandler<A, H> を DynHandler に変換することで、
/// HashMap<String, Arc<dyn DynHandler>> に格納可能にします。
#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_dyn(&self, payload: serde_json::Value) -> Result<Outcome, CarepageError>;
    fn action_type(&self) -> &str;
}

pub struct TypedHandler<A: Action, H: Handler<A>> {
    handler: H,
    _marker: PhantomData<A>,
}

impl<A: Action, H: Handler<A>> TypedHandler<A, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<A: Action, H: Handler<A>> DynHandler for TypedHandler<A, H> {
    async fn handle_dyn(&self, payload: serde_json::Value) -> Result<Outcome, CarepageError> {
        let action: A =
            serde_json::from_value(payload).map_err(|source| CarepageError::Payload {
                action_type: A::TYPE.to_string(),
                source,
            })?;
        self.handler.handle(action).await
    }

    fn action_type(&self) -> &str {
        A::TYPE
    }
}
