//! # Machining Calculation Engine
//!
//! 切削公式庫與經驗模型迴歸
//!
//! 所有公式皆為純函數：相同輸入永遠得到相同輸出，
//! 分母可能為零或輸入超出物理定義域時回傳 [`MachiningError::Domain`]，
//! 不會回傳 NaN 或 Infinity。
//!
//! [`MachiningError::Domain`]: machining_core::MachiningError::Domain

pub mod economics;
pub mod force;
pub mod power;
pub mod regression;
pub mod roughness;
pub mod speed;
pub mod time;
pub mod tool_life;

// Re-export 主要類型
pub use economics::EconomicSpeeds;
pub use power::CapacityCheck;
pub use regression::{fit_kienzle, fit_power_law, fit_taylor, LinearFit, LogLinearPoint};
