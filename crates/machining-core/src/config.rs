//! 網格搜尋配置模型

use serde::{Deserialize, Serialize};

use crate::{MachiningError, Result};

/// 網格搜尋參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 切削速度 Vc 軸取樣數（含兩端點）
    pub vc_samples: usize,

    /// 進給 f 軸取樣數（含兩端點）
    pub f_samples: usize,

    /// 切深 ap 軸取樣數（含兩端點）
    pub ap_samples: usize,

    /// 網格點數上限
    ///
    /// 解析度由呼叫端決定，超過此上限的搜尋直接拒絕，
    /// 以限制最壞情況的計算時間。
    pub max_grid_points: usize,

    /// 是否以 rayon 平行評估網格點
    /// - false: 單執行緒依序評估（預設）
    /// - true: 平行評估後依索引順序合併，輸出與單執行緒完全相同
    pub parallel: bool,
}

impl SearchConfig {
    /// 預設解析度：Vc 與 f 各 6 點（5 個區間），ap 4 點（3 個區間）
    pub const DEFAULT_VC_SAMPLES: usize = 6;
    pub const DEFAULT_F_SAMPLES: usize = 6;
    pub const DEFAULT_AP_SAMPLES: usize = 4;
    pub const DEFAULT_MAX_GRID_POINTS: usize = 10_000;

    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            vc_samples: Self::DEFAULT_VC_SAMPLES,
            f_samples: Self::DEFAULT_F_SAMPLES,
            ap_samples: Self::DEFAULT_AP_SAMPLES,
            max_grid_points: Self::DEFAULT_MAX_GRID_POINTS,
            parallel: false,
        }
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MachiningError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置三軸解析度
    pub fn with_resolution(mut self, vc_samples: usize, f_samples: usize, ap_samples: usize) -> Self {
        self.vc_samples = vc_samples;
        self.f_samples = f_samples;
        self.ap_samples = ap_samples;
        self
    }

    /// 建構器模式：設置網格點數上限
    pub fn with_max_grid_points(mut self, limit: usize) -> Self {
        self.max_grid_points = limit;
        self
    }

    /// 建構器模式：設置是否平行評估
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 檢查配置是否有效（每軸至少 1 個取樣點）
    pub fn validate(&self) -> Result<()> {
        for (name, samples) in [
            ("vc_samples", self.vc_samples),
            ("f_samples", self.f_samples),
            ("ap_samples", self.ap_samples),
        ] {
            if samples == 0 {
                return Err(MachiningError::InvalidConfig(format!(
                    "{} 至少需要 1 個取樣點",
                    name
                )));
            }
        }
        Ok(())
    }

    /// 完整網格點數（不考慮退化軸）
    pub fn grid_points(&self) -> usize {
        self.vc_samples
            .saturating_mul(self.f_samples)
            .saturating_mul(self.ap_samples)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
