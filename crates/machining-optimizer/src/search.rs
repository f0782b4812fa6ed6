//! 網格搜尋

use machining_calc::force::kienzle_cutting_force;
use machining_calc::power::cutting_power;
use machining_calc::roughness::ra_turning;
use machining_calc::speed::spindle_speed;
use machining_calc::time::{feed_rate_turning, material_removal_rate};
use machining_core::{
    guard, MachiningError, OptimizationCandidate, OptimizationConstraints, Result, SearchConfig,
};
use rayon::prelude::*;

use crate::grid::{self, Grid};
use crate::OptimizationResult;

/// 參數網格搜尋器
///
/// 窮舉 (Vc, f, ap) 網格，每點評估切削力、功率與粗糙度，
/// 依材料移除率由大到小排序。不做剪枝。
#[derive(Debug, Clone, Default)]
pub struct GridSearch {
    config: SearchConfig,
}

impl GridSearch {
    /// 創建新的搜尋器
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 執行網格搜尋
    pub fn run(&self, constraints: &OptimizationConstraints) -> Result<OptimizationResult> {
        tracing::info!(
            "開始參數最佳化：Vc [{}, {}]，f [{}, {}]，ap [{}, {}]",
            constraints.vc_range.min,
            constraints.vc_range.max,
            constraints.f_range.min,
            constraints.f_range.max,
            constraints.ap_range.min,
            constraints.ap_range.max
        );

        let start_time = std::time::Instant::now();

        // Step 1: 檢查配置與限制條件
        tracing::debug!("Step 1: 檢查限制條件");
        self.config.validate()?;
        validate_constraints(constraints)?;

        // Step 2: 檢查點數上限後建立網格
        tracing::debug!("Step 2: 建立網格");
        let points = grid::planned_len(constraints, &self.config);
        if points > self.config.max_grid_points {
            return Err(MachiningError::GridTooLarge {
                points,
                limit: self.config.max_grid_points,
            });
        }
        let grid = Grid::new(constraints, &self.config);
        tracing::debug!("網格點數: {}", grid.len());

        // Step 3: 逐點評估
        tracing::debug!("Step 3: 評估網格點（平行: {}）", self.config.parallel);
        let mut candidates = if self.config.parallel {
            (0..grid.len())
                .into_par_iter()
                .map(|index| {
                    let (vc, f, ap) = grid.point(index);
                    evaluate_point(vc, f, ap, constraints)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            grid.points()
                .map(|(vc, f, ap)| evaluate_point(vc, f, ap, constraints))
                .collect::<Result<Vec<_>>>()?
        };

        // Step 4: 依 MRR 由大到小排序（穩定排序，同值保留列舉順序）
        tracing::debug!("Step 4: 排序");
        candidates.sort_by(|a, b| b.mrr.total_cmp(&a.mrr));

        let result = OptimizationResult::new(candidates);
        if result.best().is_none() {
            tracing::warn!("沒有任何網格點滿足功率、切削力與粗糙度限制");
        }

        tracing::info!("參數最佳化完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "候選組合 {} 筆，可行 {} 筆",
            result.candidates.len(),
            result.valid_count()
        );

        Ok(result)
    }
}

/// 檢查範圍與固定參數
fn validate_constraints(constraints: &OptimizationConstraints) -> Result<()> {
    constraints.validate_ranges()?;

    guard::positive("diameter", constraints.diameter)?;
    guard::positive("tool_nose_radius", constraints.tool_nose_radius)?;
    guard::positive("kc1", constraints.kc1)?;
    guard::unit_open("m", constraints.m)?;
    guard::non_negative("max_power", constraints.max_power)?;
    guard::non_negative("max_force", constraints.max_force)?;
    guard::non_negative("max_roughness", constraints.max_roughness)?;
    Ok(())
}

/// 評估單一網格點
///
/// 車削近似：切屑厚度 h = f，切屑寬度 b = ap（主偏角 90°）。
pub fn evaluate_point(
    vc: f64,
    f: f64,
    ap: f64,
    constraints: &OptimizationConstraints,
) -> Result<OptimizationCandidate> {
    let n = spindle_speed(vc, constraints.diameter)?;
    let vf = feed_rate_turning(f, n)?;
    let mrr = material_removal_rate(ap, f, vf)?;

    let force = kienzle_cutting_force(constraints.kc1, constraints.m, f, ap)?;
    let power = cutting_power(force, vc)?;
    let roughness = ra_turning(f, constraints.tool_nose_radius)?;

    let valid = power <= constraints.max_power
        && force <= constraints.max_force
        && roughness <= constraints.max_roughness;

    Ok(OptimizationCandidate {
        vc,
        f,
        ap,
        mrr,
        power,
        force,
        roughness,
        valid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn recompute_valid(candidate: &OptimizationCandidate, constraints: &OptimizationConstraints) -> bool {
        candidate.power <= constraints.max_power
            && candidate.force <= constraints.max_force
            && candidate.roughness <= constraints.max_roughness
    }

    #[test]
    fn test_default_search() {
        let constraints = OptimizationConstraints::default();
        let result = GridSearch::default().run(&constraints).unwrap();

        assert_eq!(result.candidates.len(), 144);
        assert!(result.candidates.windows(2).all(|w| w[0].mrr >= w[1].mrr));
        for candidate in &result.candidates {
            assert_eq!(candidate.valid, recompute_valid(candidate, &constraints));
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let constraints = OptimizationConstraints::default();
        let search = GridSearch::default();

        let first = search.run(&constraints).unwrap();
        let second = search.run(&constraints).unwrap();
        assert_eq!(first.candidates, second.candidates);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let constraints = OptimizationConstraints::default();
        let config = SearchConfig::new().with_resolution(11, 9, 7);

        let sequential = GridSearch::new(config.clone()).run(&constraints).unwrap();
        let parallel = GridSearch::new(config.with_parallel(true)).run(&constraints).unwrap();

        assert_eq!(sequential.candidates, parallel.candidates);
    }

    #[test]
    fn test_inverted_speed_range() {
        let constraints = OptimizationConstraints::default().with_vc_range(300.0, 100.0);
        let err = GridSearch::default().run(&constraints).unwrap_err();

        assert!(matches!(
            err,
            MachiningError::ConstraintConfiguration { axis: "vc_range", .. }
        ));
    }

    #[test]
    fn test_grid_too_large() {
        let config = SearchConfig::new()
            .with_resolution(100, 100, 100)
            .with_max_grid_points(10_000);
        let err = GridSearch::new(config)
            .run(&OptimizationConstraints::default())
            .unwrap_err();

        assert_eq!(
            err,
            MachiningError::GridTooLarge {
                points: 1_000_000,
                limit: 10_000
            }
        );
    }

    #[test]
    fn test_overflowing_resolution_is_rejected() {
        let config = SearchConfig::new()
            .with_resolution(1 << 22, 1 << 22, 1 << 22)
            .with_max_grid_points(10_000);
        let err = GridSearch::new(config)
            .run(&OptimizationConstraints::default())
            .unwrap_err();

        assert_eq!(
            err,
            MachiningError::GridTooLarge {
                points: usize::MAX,
                limit: 10_000
            }
        );
    }

    #[test]
    fn test_large_resolution_on_degenerate_axis() {
        let constraints = OptimizationConstraints::default().with_ap_range(2.0, 2.0);
        let config = SearchConfig::new().with_resolution(6, 6, usize::MAX);
        let result = GridSearch::new(config).run(&constraints).unwrap();

        assert_eq!(result.len(), 36);
    }

    #[test]
    fn test_zero_diameter() {
        let constraints = OptimizationConstraints::default().with_geometry(0.8, 0.0);
        let err = GridSearch::default().run(&constraints).unwrap_err();
        assert_eq!(err.field(), Some("diameter"));
    }

    #[test]
    fn test_fully_degenerate_grid() {
        let constraints = OptimizationConstraints::default()
            .with_vc_range(150.0, 150.0)
            .with_f_range(0.2, 0.2)
            .with_ap_range(2.0, 2.0);
        let result = GridSearch::default().run(&constraints).unwrap();

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].vc, 150.0);
    }

    #[test]
    fn test_evaluate_point_reference() {
        let constraints = OptimizationConstraints::default();
        let candidate = evaluate_point(200.0, 0.2, 2.0, &constraints).unwrap();

        // Fc = 1800 · 0.2^0.75 · 2 ≈ 1076.65 N
        assert!((candidate.force - 1076.65).abs() < 0.01);
        // Pc = Fc · 200 / 60000
        assert!((candidate.power - candidate.force * 200.0 / 60_000.0).abs() < 1e-12);
        // Ra = 0.04 / 25.6 · 1000
        assert!((candidate.roughness - 1.5625).abs() < 1e-12);
        assert!(candidate.valid);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_ranked_and_classified(
            vc_min in 50.0f64..200.0,
            vc_span in 0.0f64..300.0,
            f_min in 0.05f64..0.3,
            f_span in 0.0f64..0.4,
            max_power in 1.0f64..30.0,
        ) {
            let constraints = OptimizationConstraints::default()
                .with_vc_range(vc_min, vc_min + vc_span)
                .with_f_range(f_min, f_min + f_span)
                .with_limits(max_power, 2500.0, 3.2);

            let result = GridSearch::default().run(&constraints).unwrap();

            prop_assert!(result.candidates.windows(2).all(|w| w[0].mrr >= w[1].mrr));
            for candidate in &result.candidates {
                prop_assert_eq!(candidate.valid, recompute_valid(candidate, &constraints));
            }
        }
    }
}
