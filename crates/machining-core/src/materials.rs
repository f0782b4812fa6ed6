//! 材料資料庫
//!
//! 依 Kienzle 係數表整理的常用材料，核心計算只使用 (kc1, m) 兩個數值，
//! 其餘欄位供介面顯示。

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{MachiningError, Result};

/// Kienzle 材料係數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialCoefficients {
    /// h = b = 1mm 時的比切削力 (N/mm²)
    pub kc1: f64,
    /// Kienzle 指數 (1 - mc)
    pub m: f64,
}

impl MaterialCoefficients {
    pub fn new(kc1: f64, m: f64) -> Self {
        Self { kc1, m }
    }
}

/// 材料資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 材料ID
    pub id: String,
    /// 顯示名稱
    pub name: String,
    /// 材料群組
    pub group: String,
    /// 比切削力 kc1.1 (N/mm²)
    pub kc1: f64,
    /// Kienzle 指數
    pub m: f64,
    /// 硬度
    pub hardness: Option<String>,
    /// 抗拉強度 (MPa)
    pub tensile_strength: Option<String>,
}

impl Material {
    /// 取出 Kienzle 係數
    pub fn coefficients(&self) -> MaterialCoefficients {
        MaterialCoefficients::new(self.kc1, self.m)
    }
}

// (id, 名稱, 群組, kc1, m, 硬度, 抗拉強度)
type MaterialRow = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    &'static str,
    &'static str,
);

const MATERIAL_TABLE: &[MaterialRow] = &[
    // 碳鋼
    ("steel-1020", "AISI 1020 Steel", "Carbon Steels", 1500.0, 0.26, "130-160 HB", "380-450"),
    ("steel-1045", "AISI 1045 Steel", "Carbon Steels", 1700.0, 0.25, "160-200 HB", "570-700"),
    ("steel-1060", "AISI 1060 Steel", "Carbon Steels", 1900.0, 0.24, "180-220 HB", "620-750"),
    ("steel-1080", "AISI 1080 Steel", "Carbon Steels", 2100.0, 0.23, "200-250 HB", "700-850"),
    // 合金鋼
    ("steel-4140", "AISI 4140 Steel", "Alloy Steels", 2000.0, 0.22, "200-280 HB", "650-900"),
    ("steel-4340", "AISI 4340 Steel", "Alloy Steels", 2200.0, 0.21, "250-320 HB", "800-1100"),
    ("steel-8620", "AISI 8620 Steel", "Alloy Steels", 1850.0, 0.24, "170-220 HB", "550-750"),
    ("steel-52100", "AISI 52100 Steel", "Alloy Steels", 2400.0, 0.20, "200-280 HB", "700-950"),
    // 不鏽鋼
    ("stainless-304", "AISI 304 Stainless", "Stainless Steels", 2100.0, 0.21, "150-200 HB", "520-720"),
    ("stainless-316", "AISI 316 Stainless", "Stainless Steels", 2200.0, 0.20, "150-200 HB", "530-680"),
    ("stainless-420", "AISI 420 Stainless", "Stainless Steels", 2000.0, 0.22, "180-240 HB", "600-800"),
    ("stainless-17-4ph", "17-4 PH Stainless", "Stainless Steels", 2500.0, 0.19, "280-350 HB", "900-1200"),
    // 鑄鐵
    ("gray-iron-150", "Gray Cast Iron FC 150", "Cast Irons", 1000.0, 0.28, "150-200 HB", "150-200"),
    ("gray-iron-250", "Gray Cast Iron FC 250", "Cast Irons", 1200.0, 0.26, "180-230 HB", "200-280"),
    ("gray-iron-350", "Gray Cast Iron FC 350", "Cast Irons", 1400.0, 0.24, "200-260 HB", "280-380"),
    ("ductile-iron-40", "Ductile Iron FE 40018", "Cast Irons", 1300.0, 0.25, "140-200 HB", "400-500"),
    ("ductile-iron-60", "Ductile Iron FE 60003", "Cast Irons", 1500.0, 0.23, "200-270 HB", "600-750"),
    // 鋁合金
    ("al-1050", "Aluminum 1050", "Aluminum Alloys", 350.0, 0.30, "20-35 HB", "65-95"),
    ("al-6061", "Aluminum 6061-T6", "Aluminum Alloys", 550.0, 0.28, "95-110 HB", "270-310"),
    ("al-7075", "Aluminum 7075-T6", "Aluminum Alloys", 700.0, 0.26, "150-175 HB", "540-580"),
    ("al-2024", "Aluminum 2024-T4", "Aluminum Alloys", 600.0, 0.27, "120-140 HB", "420-480"),
    ("al-si", "Cast Al-Si Alloy", "Aluminum Alloys", 650.0, 0.27, "80-120 HB", "200-280"),
    // 銅合金
    ("cu-etp", "Electrolytic Copper", "Copper Alloys", 850.0, 0.25, "40-80 HB", "220-300"),
    ("brass-360", "Brass C36000", "Copper Alloys", 700.0, 0.28, "60-100 HB", "280-380"),
    ("bronze-phosphor", "Phosphor Bronze", "Copper Alloys", 900.0, 0.24, "70-120 HB", "320-450"),
    ("bronze-aluminum", "Aluminum Bronze", "Copper Alloys", 1100.0, 0.22, "150-200 HB", "500-700"),
    // 鈦合金
    ("ti-cp2", "Titanium CP Grade 2", "Titanium Alloys", 1400.0, 0.22, "200-250 HB", "350-450"),
    ("ti-6al4v", "Ti-6Al-4V", "Titanium Alloys", 1600.0, 0.20, "320-380 HB", "900-1100"),
    // 超合金
    ("inconel-625", "Inconel 625", "Superalloys", 2800.0, 0.18, "200-280 HB", "850-1000"),
    ("inconel-718", "Inconel 718", "Superalloys", 3200.0, 0.17, "300-400 HB", "1200-1400"),
    ("hastelloy-c276", "Hastelloy C-276", "Superalloys", 3000.0, 0.18, "180-240 HB", "750-900"),
    // 工程塑膠
    ("nylon-66", "Nylon 6/6", "Engineering Plastics", 200.0, 0.35, "85-95 Shore D", "70-85"),
    ("pom", "Polyacetal (POM)", "Engineering Plastics", 180.0, 0.36, "80-90 Shore D", "60-70"),
    ("peek", "PEEK", "Engineering Plastics", 280.0, 0.32, "85-95 Shore D", "90-100"),
    ("ptfe", "PTFE (Teflon)", "Engineering Plastics", 120.0, 0.40, "50-60 Shore D", "20-35"),
];

/// 材料資料庫
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// 載入內建材料表
    pub fn new() -> Self {
        let materials = MATERIAL_TABLE
            .iter()
            .map(|&(id, name, group, kc1, m, hardness, strength)| Material {
                id: id.to_string(),
                name: name.to_string(),
                group: group.to_string(),
                kc1,
                m,
                hardness: Some(hardness.to_string()),
                tensile_strength: Some(strength.to_string()),
            })
            .collect();

        Self { materials }
    }

    /// 以自訂材料清單建立資料庫
    pub fn from_materials(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// 共用的內建資料庫（只建立一次）
    pub fn builtin() -> &'static MaterialCatalog {
        static CATALOG: OnceLock<MaterialCatalog> = OnceLock::new();
        CATALOG.get_or_init(MaterialCatalog::new)
    }

    /// 依ID查詢材料
    pub fn lookup(&self, id: &str) -> Result<&Material> {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| MachiningError::MaterialNotFound(id.to_string()))
    }

    /// 以關鍵字搜尋（不分大小寫，比對ID、名稱與群組）
    pub fn search(&self, term: &str) -> Vec<&Material> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.materials.iter().collect();
        }

        self.materials
            .iter()
            .filter(|m| {
                m.id.to_lowercase().contains(&term)
                    || m.name.to_lowercase().contains(&term)
                    || m.group.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// 列出所有群組（依表格順序，不重複）
    pub fn list_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for material in &self.materials {
            if !groups.contains(&material.group.as_str()) {
                groups.push(&material.group);
            }
        }
        groups
    }

    /// 列出指定群組的材料
    pub fn by_group(&self, group: &str) -> Vec<&Material> {
        self.materials.iter().filter(|m| m.group == group).collect()
    }

    /// 材料總數
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}
