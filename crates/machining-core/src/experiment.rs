//! 實驗資料與迴歸結果模型

use serde::{Deserialize, Serialize};

use crate::materials::MaterialCoefficients;
use crate::record::{record_from, ResultRecord, ToRecord};

/// 經驗模型類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitModel {
    /// Kienzle 切削力模型: kc = kc1 · h^(-m)
    Kienzle,
    /// Taylor 刀具壽命模型: V · T^n = C
    Taylor,
}

impl FitModel {
    /// 係數 (a, b) 的名稱
    pub fn coefficient_names(&self) -> (&'static str, &'static str) {
        match self {
            FitModel::Kienzle => ("kc1", "m"),
            FitModel::Taylor => ("C", "n"),
        }
    }
}

impl std::fmt::Display for FitModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitModel::Kienzle => write!(f, "Kienzle"),
            FitModel::Taylor => write!(f, "Taylor"),
        }
    }
}

/// Kienzle 實驗資料點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KienzlePoint {
    /// 切屑厚度 h (mm)
    pub h: f64,
    /// 量測切削力 Fc (N)
    pub fc: f64,
    /// 切屑寬度 b (mm)
    pub b: f64,
}

impl KienzlePoint {
    pub fn new(h: f64, fc: f64, b: f64) -> Self {
        Self { h, fc, b }
    }
}

/// Taylor 實驗資料點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaylorPoint {
    /// 切削速度 V (m/min)
    pub v: f64,
    /// 刀具壽命 T (min)
    pub t: f64,
}

impl TaylorPoint {
    pub fn new(v: f64, t: f64) -> Self {
        Self { v, t }
    }
}

/// 冪次律迴歸結果 y = a · x^(-b)
///
/// Kienzle: (a, b) = (kc1, m)；Taylor: (a, b) = (C, n)。
/// `r_squared` 以線性化後的對數值計算，病態資料下可為負值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// 模型類型
    pub model: FitModel,

    /// 係數 a（kc1 或 C）
    pub coefficient_a: f64,

    /// 係數 b（m 或 n）
    pub coefficient_b: f64,

    /// 決定係數 R²
    pub r_squared: f64,

    /// 參與擬合的資料點數
    pub point_count: usize,
}

impl RegressionResult {
    /// 以擬合係數計算 y = a · x^(-b)
    ///
    /// Kienzle 時 x 為切屑厚度 h，回傳 kc；Taylor 時 x 為壽命 T，回傳 V。
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficient_a * x.powf(-self.coefficient_b)
    }

    /// Kienzle 擬合結果轉為材料係數，Taylor 結果回傳 None
    pub fn material_coefficients(&self) -> Option<MaterialCoefficients> {
        match self.model {
            FitModel::Kienzle => Some(MaterialCoefficients {
                kc1: self.coefficient_a,
                m: self.coefficient_b,
            }),
            FitModel::Taylor => None,
        }
    }
}

impl ToRecord for RegressionResult {
    fn to_record(&self) -> ResultRecord {
        let (a, b) = self.model.coefficient_names();
        record_from([
            (a, self.coefficient_a),
            (b, self.coefficient_b),
            ("r_squared", self.r_squared),
        ])
    }
}
