//! 歷史紀錄儲存

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use machining_core::{RegressionResult, ResultRecord};
use serde::{Deserialize, Serialize};

use crate::entry::{CalculationEntry, ExperimentalEntry};
use crate::{HistoryError, Result};

/// 預設保留的計算紀錄數
pub const DEFAULT_CALCULATION_CAPACITY: usize = 100;

/// 預設保留的實驗紀錄數
pub const DEFAULT_EXPERIMENT_CAPACITY: usize = 50;

/// JSON 無法表示 NaN 與 Infinity，寫入前先檢查
fn ensure_finite(record: &ResultRecord) -> Result<()> {
    match record.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, &value)) => Err(HistoryError::NonFiniteValue {
            field: field.clone(),
            value,
        }),
        None => Ok(()),
    }
}

/// 匯出格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<CalculationEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Vec<ExperimentalEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

/// 記憶體內歷史紀錄
///
/// 兩個序列都是新的在前，超過容量時捨棄最舊的紀錄。
#[derive(Debug, Clone)]
pub struct HistoryStore {
    calculations: VecDeque<CalculationEntry>,
    experiments: VecDeque<ExperimentalEntry>,
    last_inputs: HashMap<String, ResultRecord>,
    calculation_capacity: usize,
    experiment_capacity: usize,
}

impl HistoryStore {
    /// 創建新的儲存（預設容量 100 / 50）
    pub fn new() -> Self {
        Self {
            calculations: VecDeque::new(),
            experiments: VecDeque::new(),
            last_inputs: HashMap::new(),
            calculation_capacity: DEFAULT_CALCULATION_CAPACITY,
            experiment_capacity: DEFAULT_EXPERIMENT_CAPACITY,
        }
    }

    /// 指定容量
    pub fn with_capacity(calculations: usize, experiments: usize) -> Result<Self> {
        if calculations == 0 {
            return Err(HistoryError::InvalidCapacity("calculations"));
        }
        if experiments == 0 {
            return Err(HistoryError::InvalidCapacity("experiments"));
        }

        Ok(Self {
            calculation_capacity: calculations,
            experiment_capacity: experiments,
            ..Self::new()
        })
    }

    /// 新增計算紀錄，回傳紀錄 ID
    ///
    /// 數值必須為有限值，否則不寫入並回傳錯誤。
    pub fn record_calculation(
        &mut self,
        kind: impl Into<String>,
        inputs: ResultRecord,
        results: ResultRecord,
    ) -> Result<uuid::Uuid> {
        ensure_finite(&inputs)?;
        ensure_finite(&results)?;

        let entry = CalculationEntry::new(kind, inputs, results);
        let id = entry.id;
        self.calculations.push_front(entry);
        self.calculations.truncate(self.calculation_capacity);
        Ok(id)
    }

    /// 新增實驗擬合紀錄，回傳紀錄 ID
    pub fn record_experiment(
        &mut self,
        result: &RegressionResult,
        data_points: Vec<(f64, f64)>,
    ) -> Result<uuid::Uuid> {
        if let Some((index, &(x, y))) = data_points
            .iter()
            .enumerate()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            let (field, value) = if x.is_finite() { ("y", y) } else { ("x", x) };
            return Err(HistoryError::NonFiniteValue {
                field: format!("data_points[{}].{}", index, field),
                value,
            });
        }

        let entry = ExperimentalEntry::from_regression(result, data_points);
        ensure_finite(&entry.coefficients)?;
        if !entry.r_squared.is_finite() {
            return Err(HistoryError::NonFiniteValue {
                field: "r_squared".to_string(),
                value: entry.r_squared,
            });
        }

        let id = entry.id;
        self.experiments.push_front(entry);
        self.experiments.truncate(self.experiment_capacity);
        Ok(id)
    }

    /// 計算紀錄（新的在前）
    pub fn calculations(&self) -> impl Iterator<Item = &CalculationEntry> {
        self.calculations.iter()
    }

    /// 實驗紀錄（新的在前）
    pub fn experiments(&self) -> impl Iterator<Item = &ExperimentalEntry> {
        self.experiments.iter()
    }

    pub fn calculation_count(&self) -> usize {
        self.calculations.len()
    }

    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// 清除計算紀錄（實驗紀錄保留）
    pub fn clear_calculations(&mut self) {
        self.calculations.clear();
    }

    /// 保存某計算器最後一次的輸入
    pub fn save_last_inputs(
        &mut self,
        calculator: impl Into<String>,
        inputs: ResultRecord,
    ) -> Result<()> {
        ensure_finite(&inputs)?;
        self.last_inputs.insert(calculator.into(), inputs);
        Ok(())
    }

    pub fn last_inputs(&self, calculator: &str) -> Option<&ResultRecord> {
        self.last_inputs.get(calculator)
    }

    /// 匯出為格式化 JSON
    pub fn export_json(&self) -> Result<String> {
        let export = HistoryExport {
            history: Some(self.calculations.iter().cloned().collect()),
            experimental: Some(self.experiments.iter().cloned().collect()),
            export_date: Some(Utc::now()),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// 由 JSON 匯入
    ///
    /// 只取代 JSON 中存在的區段，超出容量的部分捨棄。
    /// JSON 格式錯誤時回傳錯誤，儲存內容不變。
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let export: HistoryExport = serde_json::from_str(json)?;

        if let Some(history) = export.history {
            self.calculations = history.into_iter().take(self.calculation_capacity).collect();
        }
        if let Some(experimental) = export.experimental {
            self.experiments = experimental
                .into_iter()
                .take(self.experiment_capacity)
                .collect();
        }
        Ok(())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use machining_core::record::record_from;
    use machining_core::FitModel;
    use rstest::rstest;

    fn regression() -> RegressionResult {
        RegressionResult {
            model: FitModel::Kienzle,
            coefficient_a: 1800.0,
            coefficient_b: 0.25,
            r_squared: 0.98,
            point_count: 3,
        }
    }

    #[test]
    fn test_newest_first() {
        let mut store = HistoryStore::new();
        store.record_calculation("rpm", record_from([("Vc", 100.0)]), ResultRecord::new()).unwrap();
        let latest = store.record_calculation("rpm", record_from([("Vc", 200.0)]), ResultRecord::new()).unwrap();

        let first = store.calculations().next().unwrap();
        assert_eq!(first.id, latest);
        assert_eq!(first.inputs["Vc"], 200.0);
    }

    #[rstest]
    #[case(DEFAULT_CALCULATION_CAPACITY + 1)]
    #[case(250)]
    fn test_calculation_bound(#[case] count: usize) {
        let mut store = HistoryStore::new();
        for i in 0..count {
            store.record_calculation("rpm", record_from([("i", i as f64)]), ResultRecord::new()).unwrap();
        }

        assert_eq!(store.calculation_count(), DEFAULT_CALCULATION_CAPACITY);
        // 最舊的被捨棄
        let oldest = store.calculations().last().unwrap();
        assert_eq!(oldest.inputs["i"], (count - DEFAULT_CALCULATION_CAPACITY) as f64);
    }

    #[test]
    fn test_experiment_bound() {
        let mut store = HistoryStore::new();
        for _ in 0..60 {
            store.record_experiment(&regression(), vec![(0.1, 2500.0)]).unwrap();
        }
        assert_eq!(store.experiment_count(), DEFAULT_EXPERIMENT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            HistoryStore::with_capacity(0, 10),
            Err(HistoryError::InvalidCapacity("calculations"))
        ));
    }

    #[test]
    fn test_clear_keeps_experiments() {
        let mut store = HistoryStore::new();
        store.record_calculation("rpm", ResultRecord::new(), ResultRecord::new()).unwrap();
        store.record_experiment(&regression(), vec![]).unwrap();

        store.clear_calculations();
        assert_eq!(store.calculation_count(), 0);
        assert_eq!(store.experiment_count(), 1);
    }

    #[test]
    fn test_last_inputs() {
        let mut store = HistoryStore::new();
        assert!(store.last_inputs("kienzle").is_none());

        store.save_last_inputs("kienzle", record_from([("kc1", 1800.0)])).unwrap();
        store.save_last_inputs("kienzle", record_from([("kc1", 2100.0)])).unwrap();
        assert_eq!(store.last_inputs("kienzle").unwrap()["kc1"], 2100.0);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = HistoryStore::new();
        store.record_calculation(
            "kienzle",
            record_from([("kc1", 1800.0), ("h", 0.2), ("m", 0.25), ("b", 2.0)]),
            record_from([("Fc", 1076.5)]),
        ).unwrap();
        store.record_experiment(&regression(), vec![(0.1, 2500.0), (0.2, 2100.0)]).unwrap();

        let json = store.export_json().unwrap();
        assert!(json.contains("\"history\""));
        assert!(json.contains("\"experimental\""));
        assert!(json.contains("\"export_date\""));

        let mut restored = HistoryStore::new();
        restored.import_json(&json).unwrap();

        assert!(store.calculations().eq(restored.calculations()));
        assert!(store.experiments().eq(restored.experiments()));
    }

    #[test]
    fn test_import_partial_sections() {
        let mut store = HistoryStore::new();
        store.record_calculation("rpm", ResultRecord::new(), ResultRecord::new()).unwrap();
        store.record_experiment(&regression(), vec![]).unwrap();

        store.import_json(r#"{ "history": [] }"#).unwrap();
        assert_eq!(store.calculation_count(), 0);
        assert_eq!(store.experiment_count(), 1);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut store = HistoryStore::new();

        let err = store
            .record_calculation("rpm", record_from([("Vc", f64::NAN)]), ResultRecord::new())
            .unwrap_err();
        assert!(matches!(err, HistoryError::NonFiniteValue { ref field, .. } if field == "Vc"));

        let err = store
            .record_experiment(&regression(), vec![(0.1, 2500.0), (0.2, f64::INFINITY)])
            .unwrap_err();
        assert!(matches!(
            err,
            HistoryError::NonFiniteValue { ref field, .. } if field == "data_points[1].y"
        ));

        assert!(store
            .save_last_inputs("rpm", record_from([("d", f64::NEG_INFINITY)]))
            .is_err());

        assert_eq!(store.calculation_count(), 0);
        assert_eq!(store.experiment_count(), 0);
        assert!(store.last_inputs("rpm").is_none());
    }

    #[test]
    fn test_import_malformed_json() {
        let mut store = HistoryStore::new();
        store.record_calculation("rpm", ResultRecord::new(), ResultRecord::new()).unwrap();

        assert!(matches!(store.import_json("{ not json"), Err(HistoryError::Json(_))));
        assert_eq!(store.calculation_count(), 1);
    }
}
