//! 搜尋網格
//!
//! 每軸以固定取樣數計算 x_i = min + i · (max - min) / intervals，
//! 不以浮點步長累加，端點一定包含在內且點數可預期。

use machining_core::{OptimizationConstraints, ParameterRange, SearchConfig};

/// 單軸取樣
///
/// - `samples` 為含兩端點的取樣數，最後一點固定為 `max`
/// - 退化範圍 (min == max) 或 `samples <= 1` 時只有 `min` 一點
pub fn axis_samples(range: &ParameterRange, samples: usize) -> Vec<f64> {
    let samples = axis_len(range, samples);
    if samples == 1 {
        return vec![range.min];
    }

    let intervals = samples - 1;
    let span = range.span();
    (0..=intervals)
        .map(|i| {
            if i == intervals {
                range.max
            } else {
                range.min + span * i as f64 / intervals as f64
            }
        })
        .collect()
}

/// 單軸實際取樣數（退化範圍只有一點）
pub fn axis_len(range: &ParameterRange, samples: usize) -> usize {
    if samples <= 1 || range.is_degenerate() {
        1
    } else {
        samples
    }
}

/// 建立網格前先估算點數，乘積溢位時飽和為 `usize::MAX`
pub fn planned_len(constraints: &OptimizationConstraints, config: &SearchConfig) -> usize {
    axis_len(&constraints.vc_range, config.vc_samples)
        .saturating_mul(axis_len(&constraints.f_range, config.f_samples))
        .saturating_mul(axis_len(&constraints.ap_range, config.ap_samples))
}

/// 三維搜尋網格 (Vc, f, ap)
///
/// 列舉順序：Vc 外層、f 中層、ap 內層。
#[derive(Debug, Clone)]
pub struct Grid {
    vc: Vec<f64>,
    f: Vec<f64>,
    ap: Vec<f64>,
}

impl Grid {
    /// 依限制條件與配置建立網格
    pub fn new(constraints: &OptimizationConstraints, config: &SearchConfig) -> Self {
        Self {
            vc: axis_samples(&constraints.vc_range, config.vc_samples),
            f: axis_samples(&constraints.f_range, config.f_samples),
            ap: axis_samples(&constraints.ap_range, config.ap_samples),
        }
    }

    /// 網格點總數
    pub fn len(&self) -> usize {
        self.vc
            .len()
            .saturating_mul(self.f.len())
            .saturating_mul(self.ap.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 依列舉索引取出網格點 (Vc, f, ap)
    pub fn point(&self, index: usize) -> (f64, f64, f64) {
        let ap_index = index % self.ap.len();
        let f_index = (index / self.ap.len()) % self.f.len();
        let vc_index = index / (self.ap.len() * self.f.len());
        (self.vc[vc_index], self.f[f_index], self.ap[ap_index])
    }

    /// 依列舉順序走訪所有網格點
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        (0..self.len()).map(move |index| self.point(index))
    }

    pub fn vc_samples(&self) -> &[f64] {
        &self.vc
    }

    pub fn f_samples(&self) -> &[f64] {
        &self.f
    }

    pub fn ap_samples(&self) -> &[f64] {
        &self.ap
    }
}
