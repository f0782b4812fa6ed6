//! Taylor 刀具壽命

use machining_core::{guard, Result};

/// 刀具壽命 T = (C / V)^(1/n) (min)
///
/// # 參數
/// * `v` - 切削速度 (m/min)
/// * `c` - Taylor 常數（T = 1min 時的切削速度）
/// * `n` - Taylor 指數
pub fn taylor_tool_life(v: f64, c: f64, n: f64) -> Result<f64> {
    guard::positive("V", v)?;
    guard::positive("C", c)?;
    guard::positive("n", n)?;
    guard::finite_result("T", (c / v).powf(1.0 / n))
}

/// 達到指定壽命的切削速度 V = C / T^n (m/min)
pub fn speed_for_tool_life(t: f64, c: f64, n: f64) -> Result<f64> {
    guard::positive("T", t)?;
    guard::positive("C", c)?;
    guard::positive("n", n)?;
    guard::finite_result("V", c / t.powf(n))
}
