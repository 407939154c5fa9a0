//! Typed - 型付きページアクション API
//!
//! このモジュールは action_type の typo を型で排除し、
//! Handler との対応付けを静的に保証します。
//!
//! # 二層構造
//! - **表層（Typed）**: `Action` trait, `Handler<A>` trait - 型安全
//! - **内部（Dyn）**: `DynHandler` trait - object-safe, type erasure

pub mod action;
pub mod handler;
pub mod registry;

pub use self::action::Action;
pub use self::handler::{DynHandler, Handler, TypedHandler};
pub use self::registry::{ActionRegistry, RegistryError};
