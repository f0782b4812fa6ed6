//! 參數最佳化模型

use serde::{Deserialize, Serialize};

use crate::materials::MaterialCoefficients;
use crate::record::{record_from, ResultRecord, ToRecord};
use crate::{MachiningError, Result};

/// 參數範圍 [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 範圍寬度
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// min == max 時整個軸只有一個取樣點
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// 檢查範圍：兩端為有限數值且 min ≤ max
    pub fn validate(&self, axis: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(self.invalid(axis, "端點必須為有限數值"));
        }
        if self.min > self.max {
            return Err(self.invalid(axis, "min 大於 max"));
        }
        Ok(())
    }

    fn invalid(&self, axis: &'static str, reason: &'static str) -> MachiningError {
        MachiningError::ConstraintConfiguration {
            axis,
            min: self.min,
            max: self.max,
            reason,
        }
    }
}

/// 最佳化限制條件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    /// 切削速度範圍 (m/min)
    pub vc_range: ParameterRange,

    /// 進給範圍 (mm/rev)
    pub f_range: ParameterRange,

    /// 切深範圍 (mm)
    pub ap_range: ParameterRange,

    /// 機台可用功率上限 (kW)
    pub max_power: f64,

    /// 切削力上限 (N)
    pub max_force: f64,

    /// 表面粗糙度 Ra 上限 (µm)
    pub max_roughness: f64,

    /// 刀尖圓弧半徑 (mm)
    pub tool_nose_radius: f64,

    /// 工件直徑 (mm)
    pub diameter: f64,

    /// 比切削力 kc1.1 (N/mm²)
    pub kc1: f64,

    /// Kienzle 指數
    pub m: f64,
}

impl OptimizationConstraints {
    /// 建構器模式：設置切削速度範圍
    pub fn with_vc_range(mut self, min: f64, max: f64) -> Self {
        self.vc_range = ParameterRange::new(min, max);
        self
    }

    /// 建構器模式：設置進給範圍
    pub fn with_f_range(mut self, min: f64, max: f64) -> Self {
        self.f_range = ParameterRange::new(min, max);
        self
    }

    /// 建構器模式：設置切深範圍
    pub fn with_ap_range(mut self, min: f64, max: f64) -> Self {
        self.ap_range = ParameterRange::new(min, max);
        self
    }

    /// 建構器模式：設置功率、切削力與粗糙度上限
    pub fn with_limits(mut self, max_power: f64, max_force: f64, max_roughness: f64) -> Self {
        self.max_power = max_power;
        self.max_force = max_force;
        self.max_roughness = max_roughness;
        self
    }

    /// 建構器模式：設置刀具與工件幾何
    pub fn with_geometry(mut self, tool_nose_radius: f64, diameter: f64) -> Self {
        self.tool_nose_radius = tool_nose_radius;
        self.diameter = diameter;
        self
    }

    /// 建構器模式：設置材料係數
    pub fn with_material(mut self, coefficients: MaterialCoefficients) -> Self {
        self.kc1 = coefficients.kc1;
        self.m = coefficients.m;
        self
    }

    /// 材料係數
    pub fn coefficients(&self) -> MaterialCoefficients {
        MaterialCoefficients::new(self.kc1, self.m)
    }

    /// 檢查三個參數範圍
    ///
    /// Vc 與 ap 的下限不可為負；進給下限必須大於零，
    /// 因為最佳化時以 h = f 作為切屑厚度。
    pub fn validate_ranges(&self) -> Result<()> {
        self.vc_range.validate("vc_range")?;
        self.f_range.validate("f_range")?;
        self.ap_range.validate("ap_range")?;

        if self.vc_range.min < 0.0 {
            return Err(self.vc_range.invalid("vc_range", "下限不可為負"));
        }
        if self.f_range.min <= 0.0 {
            return Err(self.f_range.invalid("f_range", "下限必須大於零"));
        }
        if self.ap_range.min < 0.0 {
            return Err(self.ap_range.invalid("ap_range", "下限不可為負"));
        }
        Ok(())
    }
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            vc_range: ParameterRange::new(100.0, 300.0),
            f_range: ParameterRange::new(0.1, 0.4),
            ap_range: ParameterRange::new(1.0, 4.0),
            max_power: 10.0,
            max_force: 2000.0,
            max_roughness: 3.2,
            tool_nose_radius: 0.8,
            diameter: 50.0,
            kc1: 1800.0,
            m: 0.25,
        }
    }
}

/// 候選參數組合（每個網格點一筆）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationCandidate {
    /// 切削速度 (m/min)
    pub vc: f64,
    /// 進給 (mm/rev)
    pub f: f64,
    /// 切深 (mm)
    pub ap: f64,
    /// 材料移除率 (mm³/min)
    pub mrr: f64,
    /// 切削功率 (kW)
    pub power: f64,
    /// 切削力 (N)
    pub force: f64,
    /// 理論粗糙度 Ra (µm)
    pub roughness: f64,
    /// 是否滿足所有限制
    pub valid: bool,
}

impl ToRecord for OptimizationCandidate {
    fn to_record(&self) -> ResultRecord {
        record_from([
            ("Vc", self.vc),
            ("f", self.f),
            ("ap", self.ap),
            ("MRR", self.mrr),
            ("power", self.power),
            ("force", self.force),
            ("roughness", self.roughness),
            ("valid", if self.valid { 1.0 } else { 0.0 }),
        ])
    }
}
