//! # Machining Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod corrections;
pub mod experiment;
pub mod guard;
pub mod materials;
pub mod optimization;
pub mod record;

// Re-export 主要類型
pub use config::SearchConfig;
pub use corrections::{CuttingFluid, KcCorrections, ToolWear};
pub use experiment::{FitModel, KienzlePoint, RegressionResult, TaylorPoint};
pub use materials::{Material, MaterialCatalog, MaterialCoefficients};
pub use optimization::{OptimizationCandidate, OptimizationConstraints, ParameterRange};
pub use record::{ResultRecord, ToRecord};

/// 切削計算錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MachiningError {
    #[error("參數 {field} 超出定義域: {value}（{reason}）")]
    Domain {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("{model} 迴歸至少需要 {required} 個資料點，實際只有 {actual} 個")]
    InsufficientData {
        model: FitModel,
        required: usize,
        actual: usize,
    },

    #[error("{model} 迴歸資料退化：所有 x 值相同，線性系統奇異")]
    DegenerateData { model: FitModel },

    #[error("最佳化範圍設定錯誤 {axis}: [{min}, {max}]（{reason}）")]
    ConstraintConfiguration {
        axis: &'static str,
        min: f64,
        max: f64,
        reason: &'static str,
    },

    #[error("搜尋網格過大: {points} 點，上限 {limit} 點")]
    GridTooLarge { points: usize, limit: usize },

    #[error("找不到材料: {0}")]
    MaterialNotFound(String),

    #[error("配置解析錯誤: {0}")]
    InvalidConfig(String),
}

impl MachiningError {
    /// 建立定義域錯誤
    pub fn domain(field: impl Into<String>, value: f64, reason: &'static str) -> Self {
        MachiningError::Domain {
            field: field.into(),
            value,
            reason,
        }
    }

    /// 出錯的欄位名稱（僅定義域錯誤）
    pub fn field(&self) -> Option<&str> {
        match self {
            MachiningError::Domain { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MachiningError>;
