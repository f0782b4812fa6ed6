//! # Machining
//!
//! 切削加工計算引擎：公式庫、經驗係數迴歸與切削參數最佳化。
//!
//! ```
//! use machining::calc::force::kienzle_cutting_force;
//!
//! let fc = kienzle_cutting_force(1800.0, 0.25, 0.2, 2.0).unwrap();
//! assert!((fc - 1076.65).abs() < 0.01);
//! ```

pub use machining_calc as calc;
pub use machining_core as model;
pub use machining_history as history;
pub use machining_optimizer as optimizer;

pub use machining_calc::{fit_kienzle, fit_taylor};
pub use machining_core::{
    FitModel, KienzlePoint, MachiningError, Material, MaterialCatalog, OptimizationCandidate,
    OptimizationConstraints, RegressionResult, Result, ResultRecord, SearchConfig, TaylorPoint,
    ToRecord,
};
pub use machining_history::HistoryStore;
pub use machining_optimizer::{optimize, GridSearch, OptimizationResult};
