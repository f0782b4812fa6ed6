//! 經濟切削條件

use machining_core::record::record_from;
use machining_core::{guard, MachiningError, ResultRecord, Result, ToRecord};
use serde::{Deserialize, Serialize};

/// 最低成本切削速度 Vmc = C / [((1-n)/n) · (Ct/Cm + tt)]^n (m/min)
///
/// # 參數
/// * `c`, `n` - Taylor 係數，0 < n < 1
/// * `cm` - 機台每分鐘成本
/// * `ct` - 每刃刀具成本
/// * `tt` - 換刀時間 (min)
pub fn minimum_cost_speed(c: f64, n: f64, cm: f64, ct: f64, tt: f64) -> Result<f64> {
    guard::positive("C", c)?;
    guard::unit_open("n", n)?;
    guard::positive("Cm", cm)?;
    guard::non_negative("Ct", ct)?;
    guard::non_negative("tt", tt)?;

    let tool_term = ct / cm + tt;
    if tool_term <= 0.0 {
        return Err(MachiningError::domain("Ct/Cm + tt", tool_term, "必須大於零"));
    }

    let term = ((1.0 - n) / n) * tool_term;
    guard::finite_result("Vmc", c / term.powf(n))
}

/// 最大產量切削速度 Vmp = C / [((1-n)/n) · tt]^n (m/min)
pub fn maximum_production_speed(c: f64, n: f64, tt: f64) -> Result<f64> {
    guard::positive("C", c)?;
    guard::unit_open("n", n)?;
    guard::positive("tt", tt)?;

    let term = ((1.0 - n) / n) * tt;
    guard::finite_result("Vmp", c / term.powf(n))
}

/// 每件成本 = tc · Cm + (tc / T) · (Ct + tt · Cm)
///
/// # 參數
/// * `tc` - 切削時間 (min)
/// * `cm` - 機台每分鐘成本
/// * `t` - 刀具壽命 (min)
/// * `ct` - 每刃刀具成本
/// * `tt` - 換刀時間 (min)
pub fn cost_per_piece(tc: f64, cm: f64, t: f64, ct: f64, tt: f64) -> Result<f64> {
    guard::non_negative("tc", tc)?;
    guard::non_negative("Cm", cm)?;
    guard::positive("T", t)?;
    guard::non_negative("Ct", ct)?;
    guard::non_negative("tt", tt)?;

    let machine_cost = tc * cm;
    let tool_cost = (tc / t) * (ct + tt * cm);
    guard::finite_result("cost", machine_cost + tool_cost)
}

/// 經濟速度區間
///
/// 實際切削速度一般選在 Vmc 與 Vmp 之間。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicSpeeds {
    /// 最低成本速度 (m/min)
    pub minimum_cost: f64,
    /// 最大產量速度 (m/min)
    pub maximum_production: f64,
}

impl EconomicSpeeds {
    /// 同時計算 Vmc 與 Vmp
    pub fn calculate(c: f64, n: f64, cm: f64, ct: f64, tt: f64) -> Result<Self> {
        Ok(Self {
            minimum_cost: minimum_cost_speed(c, n, cm, ct, tt)?,
            maximum_production: maximum_production_speed(c, n, tt)?,
        })
    }

    /// Vc 是否落在經濟區間內
    pub fn contains(&self, vc: f64) -> bool {
        let low = self.minimum_cost.min(self.maximum_production);
        let high = self.minimum_cost.max(self.maximum_production);
        vc >= low && vc <= high
    }
}

impl ToRecord for EconomicSpeeds {
    fn to_record(&self) -> ResultRecord {
        record_from([
            ("Vmc", self.minimum_cost),
            ("Vmp", self.maximum_production),
        ])
    }
}
