//! 理論表面粗糙度

use machining_core::{guard, Result};

/// 車削理論 Ra = f² / (32 · R) · 1000 (µm)
///
/// # 參數
/// * `f` - 每轉進給 (mm/rev)
/// * `r` - 刀尖圓弧半徑 (mm)，必須大於零
pub fn ra_turning(f: f64, r: f64) -> Result<f64> {
    guard::non_negative("f", f)?;
    guard::positive("R", r)?;
    guard::finite_result("Ra", f * f / (32.0 * r) * 1000.0)
}

/// 車削理論 Rt = f² / (8 · R) · 1000 (µm)
pub fn rt_turning(f: f64, r: f64) -> Result<f64> {
    guard::non_negative("f", f)?;
    guard::positive("R", r)?;
    guard::finite_result("Rt", f * f / (8.0 * r) * 1000.0)
}

/// 殘留峰高 = f² / (8 · R) (mm)
pub fn scallop_height(f: f64, r: f64) -> Result<f64> {
    guard::non_negative("f", f)?;
    guard::positive("R", r)?;
    guard::finite_result("scallop_height", f * f / (8.0 * r))
}

/// 端面銑削理論 Ra = fz² / (32 · D/2) · 1000 (µm)
pub fn ra_face_milling(fz: f64, d: f64) -> Result<f64> {
    guard::non_negative("fz", fz)?;
    guard::positive("D", d)?;
    guard::finite_result("Ra", fz * fz / (32.0 * (d / 2.0)) * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ra_turning() {
        // 0.2² / (32 · 0.8) · 1000 = 1.5625 µm
        assert!((ra_turning(0.2, 0.8).unwrap() - 1.5625).abs() < 1e-12);
    }

    #[test]
    fn test_rt_is_four_times_ra() {
        let ra = ra_turning(0.25, 0.4).unwrap();
        let rt = rt_turning(0.25, 0.4).unwrap();
        assert!((rt - 4.0 * ra).abs() < 1e-12);
    }

    #[test]
    fn test_scallop_height_in_mm() {
        let h = scallop_height(0.2, 0.8).unwrap();
        let rt = rt_turning(0.2, 0.8).unwrap();
        assert!((h * 1000.0 - rt).abs() < 1e-12);
    }

    #[test]
    fn test_face_milling() {
        // 0.1² / (32 · 25) · 1000 = 0.0125 µm
        assert!((ra_face_milling(0.1, 50.0).unwrap() - 0.0125).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(ra_turning(0.2, 0.0).unwrap_err().field(), Some("R"));
        assert_eq!(rt_turning(0.2, -0.4).unwrap_err().field(), Some("R"));
        assert_eq!(ra_face_milling(0.1, 0.0).unwrap_err().field(), Some("D"));
    }
}
