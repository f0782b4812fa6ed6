//! # Machining History
//!
//! 計算歷史與實驗擬合紀錄（記憶體內，支援 JSON 匯出/匯入）

pub mod entry;
pub mod store;

// Re-export 主要類型
pub use entry::{CalculationEntry, ExperimentalEntry};
pub use store::{HistoryExport, HistoryStore};

/// 歷史紀錄錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("JSON 處理錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("紀錄欄位 {field} 不是有限數值: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("容量必須大於零: {0}")]
    InvalidCapacity(&'static str),
}

/// Result 類型別名
pub type Result<T> = std::result::Result<T, HistoryError>;
