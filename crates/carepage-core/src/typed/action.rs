//! Action trait - 型付きページアクションの定義
//!
//! # 学習ポイント
//! - Associated Constants (`const TYPE`)
//! - Trait bounds の組み合わせ (Serialize + DeserializeOwned + Send + Sync + 'static)

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Action は action_type と型を対応付ける
///
/// # 使用例
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct AnalyzeSymptoms {
///     symptoms: String,
/// }
///
/// impl Action for AnalyzeSymptoms {
///     const TYPE: &'static str = "symptoms.analyze.v1";
/// }
/// ```
///
/// # Trait Bounds
/// - `Serialize` / `DeserializeOwned`: JSON payload との相互変換のため
/// - `Send + Sync + 'static`: Arc<dyn DynHandler> に格納できるため
pub trait Action: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// action_type の定義
    ///
    /// # 命名規約
    /// - `{region}.{verb}.v{major}`
    /// - 例: `providers.search.v1`
    const TYPE: &'static str;
}
