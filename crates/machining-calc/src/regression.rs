//! 經驗模型迴歸
//!
//! 將冪次律 y = a · x^(-b) 取對數線性化為 ln y = ln a - b · ln x，
//! 以最小平方法閉合解求出斜率與截距，再換回物理係數：
//!
//! | 模型 | ln x | ln y | a | b |
//! |---|---|---|---|---|
//! | Kienzle | ln h | ln(Fc / (b · h)) | kc1 | m |
//! | Taylor | ln T | ln V | C | n |

use machining_core::{
    guard, FitModel, KienzlePoint, MachiningError, RegressionResult, Result, TaylorPoint,
};

/// 迴歸所需最少資料點數
pub const MIN_POINTS: usize = 3;

/// 判定線性系統奇異的相對門檻
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// 可線性化的實驗資料點
pub trait LogLinearPoint {
    /// 所屬模型
    const MODEL: FitModel;

    /// 轉換為 (ln x, ln y)
    ///
    /// 任一座標非正值或非有限值時回傳定義域錯誤，`index` 用於標示出錯的資料點。
    fn linearize(&self, index: usize) -> Result<(f64, f64)>;
}

impl LogLinearPoint for KienzlePoint {
    const MODEL: FitModel = FitModel::Kienzle;

    fn linearize(&self, index: usize) -> Result<(f64, f64)> {
        let h = coordinate(index, "h", self.h)?;
        let fc = coordinate(index, "Fc", self.fc)?;
        let b = coordinate(index, "b", self.b)?;

        // kc = Fc / (b · h)
        let kc = coordinate(index, "kc", fc / (b * h))?;
        Ok((h.ln(), kc.ln()))
    }
}

impl LogLinearPoint for TaylorPoint {
    const MODEL: FitModel = FitModel::Taylor;

    fn linearize(&self, index: usize) -> Result<(f64, f64)> {
        let v = coordinate(index, "V", self.v)?;
        let t = coordinate(index, "T", self.t)?;

        Ok((t.ln(), v.ln()))
    }
}

fn coordinate(index: usize, name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MachiningError::domain(
            format!("points[{}].{}", index, name),
            value,
            "實驗資料必須為正的有限數值",
        ))
    }
}

/// 線性迴歸結果 y = intercept + slope · x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// 普通最小平方法
///
/// 所有 x 相同（或設計矩陣相對於 N·Σx² 近乎奇異）時回傳 None。
pub fn least_squares(points: &[(f64, f64)]) -> Option<LinearFit> {
    let first_x = points.first()?.0;
    if points.iter().all(|&(x, _)| x == first_x) {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom <= SINGULAR_TOLERANCE * n * sum_x2 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let y_mean = sum_y / n;
    let ss_total: f64 = points.iter().map(|(_, y)| (y - y_mean).powi(2)).sum();
    let ss_residual: f64 = points
        .iter()
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();

    // 所有 y 相同時水平線即為精確解
    let r_squared = if ss_total == 0.0 {
        1.0
    } else {
        1.0 - ss_residual / ss_total
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// 擬合冪次律 y = a · x^(-b)
pub fn fit_power_law<P: LogLinearPoint>(points: &[P]) -> Result<RegressionResult> {
    let model = P::MODEL;

    if points.len() < MIN_POINTS {
        return Err(MachiningError::InsufficientData {
            model,
            required: MIN_POINTS,
            actual: points.len(),
        });
    }

    let transformed = points
        .iter()
        .enumerate()
        .map(|(index, point)| point.linearize(index))
        .collect::<Result<Vec<_>>>()?;

    let line = least_squares(&transformed).ok_or(MachiningError::DegenerateData { model })?;

    let (name_a, name_b) = model.coefficient_names();
    let result = RegressionResult {
        model,
        coefficient_a: guard::finite_result(name_a, line.intercept.exp())?,
        coefficient_b: guard::finite_result(name_b, -line.slope)?,
        r_squared: guard::finite_result("r_squared", line.r_squared)?,
        point_count: points.len(),
    };

    tracing::debug!(
        "{} 迴歸完成：{} 點，{} = {:.4}，{} = {:.4}，R² = {:.6}",
        model,
        result.point_count,
        name_a,
        result.coefficient_a,
        name_b,
        result.coefficient_b,
        result.r_squared
    );

    Ok(result)
}

/// 由實驗資料擬合 Kienzle 係數 (kc1, m)
pub fn fit_kienzle(points: &[KienzlePoint]) -> Result<RegressionResult> {
    fit_power_law(points)
}

/// 由實驗資料擬合 Taylor 係數 (C, n)
pub fn fit_taylor(points: &[TaylorPoint]) -> Result<RegressionResult> {
    fit_power_law(points)
}
