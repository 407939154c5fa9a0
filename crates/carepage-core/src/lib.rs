//! carepage-core
//!
//! Headless model of the interactive layer of a healthcare information page.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（condition, rules, report, state, outcome, ids, errors）
//! - **matcher**: ConditionMatcher（キーワードによる純粋なルール照合）
//! - **typed**: 型付きページアクション API（Action trait, Handler trait, ActionRegistry）
//! - **app**: アプリケーション層（init_app, SymptomChecker, スタブ, ナビゲーション, render）
//! - **config**: TOML による設定

pub mod app;
pub mod config;
pub mod domain;
pub mod matcher;
pub mod typed;

pub use app::{Page, init_app};
pub use config::PageConfig;
pub use matcher::ConditionMatcher;
