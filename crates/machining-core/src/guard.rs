//! 輸入參數檢查
//!
//! 所有公式在計算前先檢查輸入，避免產生 NaN 或 Infinity。

use crate::{MachiningError, Result};

/// 要求數值為有限且嚴格大於零
pub fn positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MachiningError::domain(field, value, "必須為有限數值"));
    }
    if value <= 0.0 {
        return Err(MachiningError::domain(field, value, "必須大於零"));
    }
    Ok(value)
}

/// 要求數值為有限且不小於零
pub fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MachiningError::domain(field, value, "必須為有限數值"));
    }
    if value < 0.0 {
        return Err(MachiningError::domain(field, value, "不可為負值"));
    }
    Ok(value)
}

/// 檢查計算結果，溢位為 Infinity 或 NaN 時回傳定義域錯誤
pub fn finite_result(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MachiningError::domain(field, value, "計算結果溢位，輸入組合超出可表示範圍"));
    }
    Ok(value)
}

/// 要求數值落在開區間 (0, 1)
pub fn unit_open(field: &str, value: f64) -> Result<f64> {
    positive(field, value)?;
    if value >= 1.0 {
        return Err(MachiningError::domain(field, value, "必須小於 1"));
    }
    Ok(value)
}

/// 要求數值落在半開區間 (0, 1]
pub fn efficiency(field: &str, value: f64) -> Result<f64> {
    positive(field, value)?;
    if value > 1.0 {
        return Err(MachiningError::domain(field, value, "不可大於 1"));
    }
    Ok(value)
}
