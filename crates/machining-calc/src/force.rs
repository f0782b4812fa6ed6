//! Kienzle 切削力計算

use machining_core::{guard, KcCorrections, Result};

/// 比切削力 kc = kc1 · h^(-m) (N/mm²)
///
/// # 參數
/// * `kc1` - h = 1mm 時的比切削力 (N/mm²)
/// * `h` - 切屑厚度 (mm)，必須大於零
/// * `m` - Kienzle 指數，0 < m < 1
pub fn specific_cutting_force(kc1: f64, h: f64, m: f64) -> Result<f64> {
    guard::positive("kc1", kc1)?;
    guard::positive("h", h)?;
    guard::unit_open("m", m)?;
    guard::finite_result("kc", kc1 * h.powf(-m))
}

/// 切削力 Fc = kc · b · h (N)
pub fn cutting_force(kc: f64, b: f64, h: f64) -> Result<f64> {
    guard::non_negative("kc", kc)?;
    guard::non_negative("b", b)?;
    guard::non_negative("h", h)?;
    guard::finite_result("Fc", kc * b * h)
}

/// Kienzle 直接式 Fc = kc1 · h^(1-m) · b (N)
///
/// 先求 kc 再乘 b · h，與 [`specific_cutting_force`] 和
/// [`cutting_force`] 依序計算的結果逐位元相同。
pub fn kienzle_cutting_force(kc1: f64, m: f64, h: f64, b: f64) -> Result<f64> {
    let kc = specific_cutting_force(kc1, h, m)?;
    cutting_force(kc, b, h)
}

/// 含修正係數的比切削力 kc = kc1 · h^(-m) · Kγ · Kλ · Kv · Kwear · Kfluid
pub fn corrected_specific_cutting_force(
    kc1: f64,
    h: f64,
    m: f64,
    corrections: &KcCorrections,
) -> Result<f64> {
    let kc = specific_cutting_force(kc1, h, m)?;
    guard::finite_result("kc", kc * corrections.combined_factor())
}
