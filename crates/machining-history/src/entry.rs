//! 歷史紀錄條目

use chrono::{DateTime, Utc};
use machining_core::record::record_from;
use machining_core::{FitModel, RegressionResult, ResultRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單筆計算紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationEntry {
    pub id: Uuid,
    /// 計算器種類，例如 "kienzle"、"spindle_speed"
    pub kind: String,
    pub inputs: ResultRecord,
    pub results: ResultRecord,
    pub timestamp: DateTime<Utc>,
}

impl CalculationEntry {
    /// 創建新紀錄（自動產生 ID 與時間戳）
    pub fn new(kind: impl Into<String>, inputs: ResultRecord, results: ResultRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            inputs,
            results,
            timestamp: Utc::now(),
        }
    }
}

/// 單筆實驗擬合紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalEntry {
    pub id: Uuid,
    pub model: FitModel,
    /// 原始資料點 (x, y)
    pub data_points: Vec<(f64, f64)>,
    /// 擬合係數，鍵為 kc1/m 或 C/n
    pub coefficients: ResultRecord,
    pub r_squared: f64,
    pub timestamp: DateTime<Utc>,
}

impl ExperimentalEntry {
    /// 由迴歸結果建立紀錄
    pub fn from_regression(result: &RegressionResult, data_points: Vec<(f64, f64)>) -> Self {
        let (name_a, name_b) = result.model.coefficient_names();
        Self {
            id: Uuid::new_v4(),
            model: result.model,
            data_points,
            coefficients: record_from([(name_a, result.coefficient_a), (name_b, result.coefficient_b)]),
            r_squared: result.r_squared,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_regression_uses_model_names() {
        let result = RegressionResult {
            model: FitModel::Taylor,
            coefficient_a: 400.0,
            coefficient_b: 0.2,
            r_squared: 0.99,
            point_count: 3,
        };
        let entry = ExperimentalEntry::from_regression(&result, vec![(10.0, 250.0)]);

        assert_eq!(entry.model, FitModel::Taylor);
        assert_eq!(entry.coefficients.get("C"), Some(&400.0));
        assert_eq!(entry.coefficients.get("n"), Some(&0.2));
        assert_eq!(entry.r_squared, 0.99);
    }

    #[test]
    fn test_unique_ids() {
        let a = CalculationEntry::new("rpm", ResultRecord::new(), ResultRecord::new());
        let b = CalculationEntry::new("rpm", ResultRecord::new(), ResultRecord::new());
        assert_ne!(a.id, b.id);
    }
}
