//! App - アプリケーション層
//!
//! domain と typed を組み合わせて、ページの各インタラクティブ領域を実装します。
//!
//! # 主要コンポーネント
//! - **AppBuilder / App**: Handler の登録と action のディスパッチ
//! - **init_app / Page**: 起動時の一回限りのワイヤリング
//! - **SymptomChecker**: 症状チェッカーのセッション
//! - **ProviderSearch / FormInterceptor**: プレースホルダーを返すスタブ
//! - **NavMenu / NavbarEffects / RevealTracker**: ナビゲーションとスクロールの状態
//! - **render**: 型付きの結果をテキストに変換

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod actions;
pub mod builder;
pub mod forms;
pub mod nav;
pub mod page;
pub mod providers;
pub mod render;
pub mod scroll;
pub mod symptoms;

pub use self::actions::{
    AnalyzeSymptoms, FindProviders, NavEvent, PageScrolled, RequestLocation, ResetAnalysis,
    SectionVisible, SubmitForm,
};
pub use self::builder::{App, AppBuilder, BuildError};
pub use self::forms::FormInterceptor;
pub use self::nav::{HeroButton, NavMenu};
pub use self::page::{Page, init_app};
pub use self::providers::ProviderSearch;
pub use self::scroll::{NavbarEffects, RevealTracker};
pub use self::symptoms::SymptomChecker;

/// Region state is plain data, so a poisoned lock is still usable.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
