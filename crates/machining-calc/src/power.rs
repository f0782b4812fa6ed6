//! 切削功率與機台能力檢查

use machining_core::record::record_from;
use machining_core::{guard, ResultRecord, Result, ToRecord};
use serde::{Deserialize, Serialize};

/// 切削功率 Pc = Fc · Vc / 60000 (kW)
///
/// # 參數
/// * `fc` - 切削力 (N)
/// * `vc` - 切削速度 (m/min)
pub fn cutting_power(fc: f64, vc: f64) -> Result<f64> {
    guard::non_negative("Fc", fc)?;
    guard::non_negative("Vc", vc)?;
    guard::finite_result("Pc", fc * vc / 60_000.0)
}

/// 主軸功率 P = Pc / η (kW)，0 < η ≤ 1
pub fn spindle_power(pc: f64, efficiency: f64) -> Result<f64> {
    guard::non_negative("Pc", pc)?;
    guard::efficiency("efficiency", efficiency)?;
    guard::finite_result("P", pc / efficiency)
}

/// 機台能力檢查結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityCheck {
    /// 需求功率 (kW)
    pub required_power: f64,
    /// 機台功率 (kW)
    pub machine_power: f64,
    /// 使用率 (%)
    pub utilization_percent: f64,
    /// 是否超過機台能力
    pub exceeds: bool,
}

impl ToRecord for CapacityCheck {
    fn to_record(&self) -> ResultRecord {
        record_from([
            ("required_power", self.required_power),
            ("machine_power", self.machine_power),
            ("utilization_percent", self.utilization_percent),
            ("exceeds", if self.exceeds { 1.0 } else { 0.0 }),
        ])
    }
}

/// 檢查需求功率是否超過機台功率
pub fn check_machine_capacity(required_power: f64, machine_power: f64) -> Result<CapacityCheck> {
    guard::non_negative("required_power", required_power)?;
    guard::positive("machine_power", machine_power)?;

    let ratio = required_power / machine_power;
    Ok(CapacityCheck {
        required_power,
        machine_power,
        utilization_percent: guard::finite_result("utilization_percent", ratio * 100.0)?,
        exceeds: ratio > 1.0,
    })
}
