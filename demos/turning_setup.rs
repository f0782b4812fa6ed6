//! 外徑車削設定示例

use machining::calc::economics::EconomicSpeeds;
use machining::calc::force::kienzle_cutting_force;
use machining::calc::power::{check_machine_capacity, cutting_power, spindle_power};
use machining::calc::roughness::ra_turning;
use machining::calc::speed::{m_min_to_ft_min, spindle_speed};
use machining::calc::time::{feed_rate_turning, material_removal_rate, turning_time};
use machining::calc::tool_life::taylor_tool_life;
use machining::MaterialCatalog;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 外徑車削設定示例 ===\n");

    let catalog = MaterialCatalog::builtin();
    let material = catalog.lookup("steel-4140")?;
    println!("材料: {} ({})", material.name, material.group);
    println!("  kc1 = {} N/mm², m = {}\n", material.kc1, material.m);

    // 加工條件
    let (diameter, vc, f, ap, length) = (60.0, 180.0, 0.25, 2.5, 120.0);

    let n = spindle_speed(vc, diameter)?;
    let vf = feed_rate_turning(f, n)?;
    let mrr = material_removal_rate(ap, f, vf)?;
    println!("切削速度: {} m/min ({:.0} ft/min)", vc, m_min_to_ft_min(vc)?);
    println!("主軸轉速: {:.0} rpm", n);
    println!("進給速度: {:.1} mm/min", vf);
    println!("材料移除率: {:.2} cm³/min", mrr / 1000.0);

    let fc = kienzle_cutting_force(material.kc1, material.m, f, ap)?;
    let pc = cutting_power(fc, vc)?;
    let required = spindle_power(pc, 0.85)?;
    let capacity = check_machine_capacity(required, 11.0)?;
    println!("\n切削力: {:.1} N", fc);
    println!("切削功率: {:.2} kW，主軸功率: {:.2} kW", pc, required);
    println!(
        "機台負載: {:.1}%{}",
        capacity.utilization_percent,
        if capacity.exceeds { "（超出機台功率）" } else { "" }
    );

    println!("\n理論粗糙度 Ra: {:.2} µm", ra_turning(f, 0.8)?);
    println!("加工時間: {:.2} min", turning_time(length, f, n)?);

    let (c, taylor_n) = (350.0, 0.25);
    println!("刀具壽命: {:.1} min", taylor_tool_life(vc, c, taylor_n)?);

    let speeds = EconomicSpeeds::calculate(c, taylor_n, 1.5, 12.0, 2.0)?;
    println!(
        "經濟速度區間: {:.0} ~ {:.0} m/min",
        speeds.minimum_cost, speeds.maximum_production
    );

    Ok(())
}
