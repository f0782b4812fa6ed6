//! 切削參數最佳化示例

use machining::{GridSearch, MaterialCatalog, OptimizationConstraints, SearchConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 切削參數最佳化示例 ===\n");

    let material = MaterialCatalog::builtin().lookup("stainless-304")?;
    println!("材料: {}\n", material.name);

    let constraints = OptimizationConstraints::default()
        .with_material(material.coefficients())
        .with_vc_range(80.0, 220.0)
        .with_f_range(0.08, 0.35)
        .with_ap_range(0.5, 3.0)
        .with_limits(7.5, 1500.0, 1.6)
        .with_geometry(0.8, 40.0);

    let config = SearchConfig::new().with_resolution(15, 12, 6).with_parallel(true);
    let result = GridSearch::new(config).run(&constraints)?;
    tracing::info!(best_mrr = ?result.best().map(|c| c.mrr), "搜尋完成");

    println!("評估 {} 組，可行 {} 組", result.len(), result.valid_count());
    for message in &result.messages {
        println!("  ! {}", message);
    }

    println!("\n前 5 名（依 MRR）:");
    for (rank, c) in result.top(5).iter().enumerate() {
        println!(
            "  {}. Vc {:>6.1} m/min  f {:.3} mm/rev  ap {:.2} mm  MRR {:>6.2} cm³/min  P {:.2} kW  Fc {:>6.0} N  Ra {:.2} µm",
            rank + 1,
            c.vc,
            c.f,
            c.ap,
            c.mrr / 1000.0,
            c.power,
            c.force,
            c.roughness
        );
    }

    Ok(())
}
