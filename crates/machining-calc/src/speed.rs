//! 切削速度與轉速換算

use machining_core::{guard, Result};
use std::f64::consts::PI;

/// 1 m = 3.28084 ft
pub const FEET_PER_METER: f64 = 3.28084;

/// 切削速度 Vc = π · d · n / 1000 (m/min)
///
/// # 參數
/// * `d` - 直徑 (mm)，必須大於零
/// * `n` - 主軸轉速 (rpm)
pub fn cutting_speed(d: f64, n: f64) -> Result<f64> {
    guard::positive("d", d)?;
    guard::non_negative("n", n)?;
    guard::finite_result("Vc", PI * d * n / 1000.0)
}

/// 主軸轉速 n = 1000 · Vc / (π · d) (rpm)
pub fn spindle_speed(vc: f64, d: f64) -> Result<f64> {
    guard::non_negative("Vc", vc)?;
    guard::positive("d", d)?;
    guard::finite_result("n", vc * 1000.0 / (PI * d))
}

/// m/min 轉 ft/min
pub fn m_min_to_ft_min(m_min: f64) -> Result<f64> {
    guard::non_negative("Vc", m_min)?;
    guard::finite_result("Vc", m_min * FEET_PER_METER)
}

/// ft/min 轉 m/min
pub fn ft_min_to_m_min(ft_min: f64) -> Result<f64> {
    guard::non_negative("Vc", ft_min)?;
    Ok(ft_min / FEET_PER_METER)
}
