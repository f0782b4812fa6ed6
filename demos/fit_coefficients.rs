//! 實驗資料擬合示例

use machining::{fit_kienzle, fit_taylor, HistoryStore, KienzlePoint, TaylorPoint};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== 實驗資料擬合示例 ===\n");

    // 切削力量測 (h mm, Fc N, b mm)
    let kienzle_points = vec![
        KienzlePoint::new(0.05, 265.0, 2.0),
        KienzlePoint::new(0.10, 452.0, 2.0),
        KienzlePoint::new(0.15, 618.0, 2.0),
        KienzlePoint::new(0.20, 772.0, 2.0),
        KienzlePoint::new(0.30, 1058.0, 2.0),
    ];
    let kienzle = fit_kienzle(&kienzle_points)?;
    println!("Kienzle: kc1 = {:.0} N/mm², m = {:.3}, R² = {:.4}", kienzle.coefficient_a, kienzle.coefficient_b, kienzle.r_squared);

    // 刀具壽命量測 (V m/min, T min)
    let taylor_points = vec![
        TaylorPoint::new(320.0, 5.5),
        TaylorPoint::new(260.0, 15.0),
        TaylorPoint::new(210.0, 38.0),
        TaylorPoint::new(170.0, 95.0),
    ];
    let taylor = fit_taylor(&taylor_points)?;
    println!("Taylor:  C = {:.1} m/min, n = {:.3}, R² = {:.4}", taylor.coefficient_a, taylor.coefficient_b, taylor.r_squared);

    // 保存至歷史紀錄並匯出
    let mut history = HistoryStore::new();
    history.record_experiment(&kienzle, kienzle_points.iter().map(|p| (p.h, p.fc)).collect())?;
    history.record_experiment(&taylor, taylor_points.iter().map(|p| (p.t, p.v)).collect())?;

    println!("\n匯出資料:\n{}", history.export_json()?);

    Ok(())
}
