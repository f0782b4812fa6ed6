//! Kienzle 比切削力修正係數表

use serde::{Deserialize, Serialize};

/// 前角 γ (°) 修正係數
pub const RAKE_ANGLE_FACTORS: &[(i32, f64)] = &[
    (-6, 1.15),
    (0, 1.08),
    (6, 1.00),
    (10, 0.95),
    (15, 0.90),
    (20, 0.85),
];

/// 刃傾角 λ (°) 修正係數
pub const INCLINATION_ANGLE_FACTORS: &[(i32, f64)] = &[
    (-6, 0.96),
    (0, 1.00),
    (6, 1.04),
    (10, 1.08),
];

/// 刀具磨耗程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolWear {
    /// 新刀
    New,
    /// 輕度磨耗 (VB = 0.1mm)
    Light,
    /// 中度磨耗 (VB = 0.2mm)
    Medium,
    /// 重度磨耗 (VB = 0.3mm)
    Heavy,
}

impl ToolWear {
    pub fn factor(&self) -> f64 {
        match self {
            ToolWear::New => 1.00,
            ToolWear::Light => 1.10,
            ToolWear::Medium => 1.25,
            ToolWear::Heavy => 1.40,
        }
    }
}

/// 切削液
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuttingFluid {
    /// 乾切削
    Dry,
    /// 乳化液
    Emulsion,
    /// 純油
    NeatOil,
    /// 微量潤滑
    Mql,
}

impl CuttingFluid {
    pub fn factor(&self) -> f64 {
        match self {
            CuttingFluid::Dry => 1.00,
            CuttingFluid::Emulsion => 0.95,
            CuttingFluid::NeatOil => 0.90,
            CuttingFluid::Mql => 0.92,
        }
    }
}

/// 依前角查表，表中沒有的角度回傳 None
pub fn rake_angle_factor(gamma_deg: i32) -> Option<f64> {
    lookup(RAKE_ANGLE_FACTORS, gamma_deg)
}

/// 依刃傾角查表，表中沒有的角度回傳 None
pub fn inclination_angle_factor(lambda_deg: i32) -> Option<f64> {
    lookup(INCLINATION_ANGLE_FACTORS, lambda_deg)
}

/// 切削速度區間修正係數 (Vc: m/min)
pub fn cutting_speed_factor(vc: f64) -> f64 {
    if vc < 50.0 {
        1.10
    } else if vc <= 100.0 {
        1.00
    } else if vc <= 200.0 {
        0.95
    } else {
        0.90
    }
}

fn lookup(table: &[(i32, f64)], key: i32) -> Option<f64> {
    table
        .iter()
        .find(|(angle, _)| *angle == key)
        .map(|&(_, factor)| factor)
}

/// 比切削力修正條件
///
/// 未設定的項目不修正（係數 1.0）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KcCorrections {
    /// 前角 γ (°)
    pub rake_angle: Option<i32>,
    /// 刃傾角 λ (°)
    pub inclination_angle: Option<i32>,
    /// 切削速度 (m/min)
    pub cutting_speed: Option<f64>,
    /// 刀具磨耗
    pub wear: Option<ToolWear>,
    /// 切削液
    pub fluid: Option<CuttingFluid>,
}

impl KcCorrections {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置前角
    pub fn with_rake_angle(mut self, gamma_deg: i32) -> Self {
        self.rake_angle = Some(gamma_deg);
        self
    }

    /// 建構器模式：設置刃傾角
    pub fn with_inclination_angle(mut self, lambda_deg: i32) -> Self {
        self.inclination_angle = Some(lambda_deg);
        self
    }

    /// 建構器模式：設置切削速度
    pub fn with_cutting_speed(mut self, vc: f64) -> Self {
        self.cutting_speed = Some(vc);
        self
    }

    /// 建構器模式：設置刀具磨耗
    pub fn with_wear(mut self, wear: ToolWear) -> Self {
        self.wear = Some(wear);
        self
    }

    /// 建構器模式：設置切削液
    pub fn with_fluid(mut self, fluid: CuttingFluid) -> Self {
        self.fluid = Some(fluid);
        self
    }

    /// 所有修正係數的乘積
    pub fn combined_factor(&self) -> f64 {
        let mut factor = 1.0;

        if let Some(factor_gamma) = self.rake_angle.and_then(rake_angle_factor) {
            factor *= factor_gamma;
        }
        if let Some(factor_lambda) = self.inclination_angle.and_then(inclination_angle_factor) {
            factor *= factor_lambda;
        }
        if let Some(vc) = self.cutting_speed {
            factor *= cutting_speed_factor(vc);
        }
        if let Some(wear) = self.wear {
            factor *= wear.factor();
        }
        if let Some(fluid) = self.fluid {
            factor *= fluid.factor();
        }

        factor
    }
}
