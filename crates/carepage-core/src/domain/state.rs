//! State - 画面領域の状態

use serde::{Deserialize, Serialize};

use super::report::AnalysisReport;

/// ResultView は結果表示領域の状態
///
/// # 遷移
/// - Placeholder → Loading → Ready
/// - Placeholder / Ready → Error（空入力）
/// - 任意 → Placeholder（reset）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultView {
    #[default]
    Placeholder,
    Loading,
    Error {
        message: String,
    },
    Ready {
        report: AnalysisReport,
    },
}

impl ResultView {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResultView::Ready { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            ResultView::Ready { report } => Some(report),
            _ => None,
        }
    }
}

/// MenuState はモバイルナビゲーションの開閉状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    /// Icon name shown on the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            MenuState::Collapsed => "bars",
            MenuState::Expanded => "times",
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, MenuState::Expanded)
    }
}

/// NavbarStyle はスクロール位置から決まる navbar の見た目
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarStyle {
    pub shadow: bool,
    pub hidden: bool,
}
