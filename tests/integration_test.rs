//! 集成測試

use machining::calc::force::{corrected_specific_cutting_force, kienzle_cutting_force, specific_cutting_force};
use machining::calc::power::{check_machine_capacity, cutting_power, spindle_power};
use machining::calc::speed::spindle_speed;
use machining::calc::time::{feed_rate_turning, turning_time};
use machining::model::{CuttingFluid, KcCorrections, ToolWear};
use machining::*;
use proptest::prelude::*;

#[test]
fn test_turning_setup_from_catalog() {
    // 場景：AISI 1045，Ø50 外徑車削，Vc 200 m/min，f 0.2 mm/rev，ap 2 mm

    // 1. 查材料係數
    let steel = MaterialCatalog::builtin().lookup("steel-1045").unwrap();
    let coefficients = steel.coefficients();

    // 2. 轉速與進給速度
    let n = spindle_speed(200.0, 50.0).unwrap();
    let vf = feed_rate_turning(0.2, n).unwrap();
    assert!((n - 1273.24).abs() < 0.01);

    // 3. 切削力與功率
    let fc = kienzle_cutting_force(coefficients.kc1, coefficients.m, 0.2, 2.0).unwrap();
    let pc = cutting_power(fc, 200.0).unwrap();
    let p_spindle = spindle_power(pc, 0.8).unwrap();
    assert!(p_spindle > pc);

    // 4. 機台負載
    let check = check_machine_capacity(p_spindle, 15.0).unwrap();
    assert!(!check.exceeds);

    // 5. 加工時間
    let tc = turning_time(100.0, 0.2, n).unwrap();
    assert!((tc - 100.0 / vf).abs() < 1e-12);

    println!("n = {:.1} rpm, Fc = {:.1} N, P = {:.2} kW, tc = {:.3} min", n, fc, p_spindle, tc);
}

#[test]
fn test_corrections_increase_force_for_worn_dry_tool() {
    let base = specific_cutting_force(1800.0, 0.2, 0.25).unwrap();
    let corrections = KcCorrections::new()
        .with_rake_angle(0)
        .with_wear(ToolWear::Heavy)
        .with_fluid(CuttingFluid::Dry);

    let corrected = corrected_specific_cutting_force(1800.0, 0.2, 0.25, &corrections).unwrap();
    assert!((corrected - base * 1.08 * 1.40).abs() < 1e-9);
}

#[test]
fn test_fit_then_optimize() {
    // 1. 由實驗資料擬合 Kienzle 係數
    let points: Vec<KienzlePoint> = [0.08f64, 0.12, 0.2, 0.3, 0.45]
        .iter()
        .map(|&h| KienzlePoint::new(h, 2100.0 * h.powf(0.78) * 2.5, 2.5))
        .collect();
    let fit = fit_kienzle(&points).unwrap();
    assert!(((fit.coefficient_a - 2100.0) / 2100.0).abs() < 1e-6);
    assert!((fit.coefficient_b - 0.22).abs() < 1e-6);

    // 2. 以擬合係數搜尋參數
    let constraints = OptimizationConstraints::default()
        .with_material(fit.material_coefficients().unwrap())
        .with_limits(8.0, 1800.0, 2.5);
    let result = optimize(&constraints).unwrap();

    assert_eq!(result.len(), 144);
    let best = result.best().unwrap();
    assert!(best.power <= 8.0);
    assert!(best.force <= 1800.0);
    assert!(best.roughness <= 2.5);

    // 3. 排在最佳解前面的組合必定不可行
    for candidate in result.candidates.iter().take_while(|c| c.mrr > best.mrr) {
        assert!(!candidate.valid);
    }
}

#[test]
fn test_taylor_fit_round_trip_through_history() {
    let points = vec![
        TaylorPoint::new(300.0, 6.0),
        TaylorPoint::new(250.0, 14.0),
        TaylorPoint::new(200.0, 35.0),
        TaylorPoint::new(150.0, 110.0),
    ];
    let fit = fit_taylor(&points).unwrap();
    assert!(fit.r_squared > 0.95);
    assert!(fit.coefficient_b > 0.0 && fit.coefficient_b < 1.0);

    let mut store = HistoryStore::new();
    let data = points.iter().map(|p| (p.t, p.v)).collect();
    store.record_experiment(&fit, data).unwrap();
    store
        .record_calculation("taylor", fit.to_record(), ResultRecord::new())
        .unwrap();

    let json = store.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["export_date"].is_string());
    assert_eq!(value["history"][0]["kind"], "taylor");

    let mut restored = HistoryStore::new();
    restored.import_json(&json).unwrap();

    assert_eq!(restored.experiment_count(), 1);
    assert_eq!(restored.calculation_count(), 1);
    let entry = restored.experiments().next().unwrap();
    assert_eq!(entry.model, FitModel::Taylor);
    assert_eq!(entry.data_points.len(), 4);
}

#[test]
fn test_invalid_range_is_rejected() {
    let constraints = OptimizationConstraints::default().with_vc_range(300.0, 100.0);
    let err = optimize(&constraints).unwrap_err();

    assert!(matches!(err, MachiningError::ConstraintConfiguration { .. }));
}

#[test]
fn test_config_from_json_drives_search() {
    let config = SearchConfig::from_json(
        r#"{ "vc_samples": 3, "f_samples": 2, "ap_samples": 2, "parallel": true }"#,
    )
    .unwrap();
    let result = GridSearch::new(config)
        .run(&OptimizationConstraints::default())
        .unwrap();

    assert_eq!(result.len(), 12);
}

#[test]
fn test_unknown_material() {
    assert_eq!(
        MaterialCatalog::builtin().lookup("unobtainium").unwrap_err(),
        MachiningError::MaterialNotFound("unobtainium".to_string())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_parallel_equals_sequential(
        vc_samples in 1usize..12,
        f_samples in 1usize..8,
        ap_samples in 1usize..6,
    ) {
        let constraints = OptimizationConstraints::default();
        let config = SearchConfig::new().with_resolution(vc_samples, f_samples, ap_samples);

        let sequential = GridSearch::new(config.clone()).run(&constraints).unwrap();
        let parallel = GridSearch::new(config.with_parallel(true)).run(&constraints).unwrap();

        prop_assert_eq!(sequential.len(), vc_samples * f_samples * ap_samples);
        prop_assert_eq!(sequential.candidates, parallel.candidates);
    }
}
