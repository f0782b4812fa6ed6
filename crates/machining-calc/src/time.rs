//! 切削時間與進給計算

use machining_core::{guard, Result};

/// 車削進給速度 Vf = f · n (mm/min)
///
/// # 參數
/// * `f` - 每轉進給 (mm/rev)
/// * `n` - 主軸轉速 (rpm)
pub fn feed_rate_turning(f: f64, n: f64) -> Result<f64> {
    guard::non_negative("f", f)?;
    guard::non_negative("n", n)?;
    guard::finite_result("Vf", f * n)
}

/// 銑削進給速度 Vf = fz · z · n (mm/min)
///
/// # 參數
/// * `fz` - 每刃進給 (mm)
/// * `z` - 刃數
/// * `n` - 主軸轉速 (rpm)
pub fn feed_rate_milling(fz: f64, z: u32, n: f64) -> Result<f64> {
    guard::non_negative("fz", fz)?;
    guard::non_negative("n", n)?;
    guard::finite_result("Vf", fz * z as f64 * n)
}

/// 材料移除率 MRR = ap · ae · Vf (mm³/min)
pub fn material_removal_rate(ap: f64, ae: f64, vf: f64) -> Result<f64> {
    guard::non_negative("ap", ap)?;
    guard::non_negative("ae", ae)?;
    guard::non_negative("Vf", vf)?;
    guard::finite_result("MRR", ap * ae * vf)
}

/// 切削時間 t = L / Vf (min)
///
/// 進給速度為零或負值時回傳定義域錯誤。
pub fn machining_time(length: f64, vf: f64) -> Result<f64> {
    guard::non_negative("L", length)?;
    guard::positive("Vf", vf)?;
    guard::finite_result("t", length / vf)
}

/// 車削時間 t = L / (f · n) (min)
pub fn turning_time(length: f64, f: f64, n: f64) -> Result<f64> {
    let vf = feed_rate_turning(f, n)?;
    machining_time(length, vf)
}

/// 銑削時間 t = L / Vf (min)
pub fn milling_time(length: f64, vf: f64) -> Result<f64> {
    machining_time(length, vf)
}

/// 鑽孔時間 t = 深度 / (f · n) (min)
pub fn drilling_time(depth: f64, f: f64, n: f64) -> Result<f64> {
    let vf = feed_rate_turning(f, n)?;
    guard::non_negative("depth", depth)?;
    guard::positive("Vf", vf)?;
    guard::finite_result("t", depth / vf)
}
