//! Errors - エラー型と分類
//!
//! 入力検証エラー（ユーザーに表示するメッセージ）と、
//! ディスパッチの失敗を区別します。設定の読み込みエラーは `config::ConfigError`。

use thiserror::Error;

/// InputError は入力検証の失敗
///
/// `Display` の文字列はそのままユーザーに表示されます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please describe your symptoms first.")]
    EmptySymptoms,

    #[error("Please enter a location to find healthcare providers.")]
    MissingLocation,

    #[error("An analysis is already in progress.")]
    AnalysisInProgress,
}

/// CarepageError はアプリケーション全体のエラー
#[derive(Debug, Error)]
pub enum CarepageError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("no handler registered for action_type={0}")]
    UnknownAction(String),

    #[error("invalid payload for action_type={action_type}: {source}")]
    Payload {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CarepageError {
    /// 入力検証エラーであれば、ユーザーに見せるメッセージを返す
    pub fn user_message(&self) -> Option<String> {
        match self {
            CarepageError::Input(e) => Some(e.to_string()),
            _ => None,
        }
    }
}
