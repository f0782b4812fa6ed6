//! # Machining Optimizer
//!
//! 切削參數最佳化（網格搜尋）

pub mod grid;
pub mod search;

// Re-export 主要類型
pub use grid::Grid;
pub use search::{evaluate_point, GridSearch};

use machining_core::{OptimizationCandidate, OptimizationConstraints, ResultRecord, Result, ToRecord};
use serde::{Deserialize, Serialize};

/// 優化結果
///
/// `candidates` 依 MRR 由大到小排列，包含不可行的組合。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// 所有評估過的組合
    pub candidates: Vec<OptimizationCandidate>,

    /// 優化信息
    pub messages: Vec<String>,
}

impl OptimizationResult {
    /// 由已排序的候選組合建立結果
    pub fn new(candidates: Vec<OptimizationCandidate>) -> Self {
        let mut messages = Vec::new();
        if !candidates.iter().any(|c| c.valid) {
            messages.push("沒有組合同時滿足功率、切削力與粗糙度限制".to_string());
        }

        Self {
            candidates,
            messages,
        }
    }

    /// 是否存在可行組合
    pub fn is_feasible(&self) -> bool {
        self.best().is_some()
    }

    /// MRR 最大的可行組合
    pub fn best(&self) -> Option<&OptimizationCandidate> {
        self.candidates.iter().find(|c| c.valid)
    }

    /// 可行組合（保留排序）
    pub fn valid_candidates(&self) -> impl Iterator<Item = &OptimizationCandidate> {
        self.candidates.iter().filter(|c| c.valid)
    }

    pub fn valid_count(&self) -> usize {
        self.valid_candidates().count()
    }

    /// 前 k 個可行組合
    pub fn top(&self, k: usize) -> Vec<&OptimizationCandidate> {
        self.valid_candidates().take(k).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// 轉為通用結果紀錄
    pub fn to_records(&self) -> Vec<ResultRecord> {
        self.candidates.iter().map(ToRecord::to_record).collect()
    }
}

/// 以預設配置執行網格搜尋
pub fn optimize(constraints: &OptimizationConstraints) -> Result<OptimizationResult> {
    GridSearch::default().run(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mrr: f64, valid: bool) -> OptimizationCandidate {
        OptimizationCandidate {
            vc: 100.0,
            f: 0.1,
            ap: 1.0,
            mrr,
            power: 1.0,
            force: 100.0,
            roughness: 0.5,
            valid,
        }
    }

    #[test]
    fn test_best_skips_invalid() {
        let result = OptimizationResult::new(vec![
            candidate(90.0, false),
            candidate(60.0, true),
            candidate(30.0, true),
        ]);

        assert!(result.is_feasible());
        assert_eq!(result.best().map(|c| c.mrr), Some(60.0));
        assert_eq!(result.valid_count(), 2);
        assert_eq!(result.top(1).len(), 1);
        assert_eq!(result.top(10).len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_infeasible_result() {
        let result = OptimizationResult::new(vec![candidate(90.0, false)]);

        assert!(!result.is_feasible());
        assert!(result.best().is_none());
        assert_eq!(result.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_optimize_default_constraints() {
        let result = optimize(&OptimizationConstraints::default()).unwrap();

        assert_eq!(result.len(), 144);
        assert_eq!(result.to_records().len(), 144);

        let best = result.best().unwrap();
        assert!(best.valid);
        assert!(result.valid_candidates().all(|c| c.mrr <= best.mrr));
    }
}
