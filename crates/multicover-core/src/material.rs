//! 素材模型

use serde::Serialize;
use std::num::IntErrorKind;

use crate::universe::{ElementId, Universe};

/// 素材（一段閱讀文本）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    /// 名稱（不要求唯一）
    pub name: String,

    /// 成本（至少為 1）
    pub cost: u64,

    /// 覆蓋的元素索引（遞增、不重複、非空）
    coverage: Vec<ElementId>,

    /// 依首次出現順序保留的覆蓋字元，僅供顯示
    display: String,
}

impl Material {
    /// 創建新的素材
    ///
    /// 覆蓋內容為 `payload` 與字集的交集；交集為空時回傳 `None`，
    /// 成本為 0 時視為 1。
    pub fn new(
        name: impl Into<String>,
        cost: u64,
        payload: &str,
        universe: &Universe,
    ) -> Option<Self> {
        let mut coverage = Vec::new();
        let mut display = String::new();

        for ch in payload.chars() {
            if let Some(id) = universe.id_of(ch) {
                if !coverage.contains(&id) {
                    coverage.push(id);
                    display.push(ch);
                }
            }
        }

        if coverage.is_empty() {
            return None;
        }

        coverage.sort_unstable();

        Some(Self {
            name: name.into(),
            cost: cost.max(1),
            coverage,
            display,
        })
    }

    /// 覆蓋的元素索引
    pub fn coverage(&self) -> &[ElementId] {
        &self.coverage
    }

    /// 覆蓋字元（首次出現順序）
    pub fn display(&self) -> &str {
        &self.display
    }

}

/// 解析成本欄位，回傳 `(成本, 是否改用預設值)`
///
/// 無法解析或不為正數時取 1 並標記為修正；超出範圍的正數取 `u64::MAX`，不算修正。
pub fn parse_cost(raw: &str) -> (u64, bool) {
    match raw.trim().parse::<u64>() {
        Ok(0) => (1, true),
        Ok(cost) => (cost, false),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => (u64::MAX, false),
        Err(_) => (1, true),
    }
}
