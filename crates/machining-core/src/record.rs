//! 結果記錄
//!
//! 核心只輸出「欄位名稱 → 數值」的純資料記錄，由外部（介面或儲存層）
//! 決定如何顯示與保存。

use std::collections::BTreeMap;

/// 純數值結果記錄
pub type ResultRecord = BTreeMap<String, f64>;

/// 轉換為結果記錄
pub trait ToRecord {
    fn to_record(&self) -> ResultRecord;
}

/// 由 (欄位, 數值) 列表建立記錄
pub fn record_from<'a, I>(fields: I) -> ResultRecord
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
