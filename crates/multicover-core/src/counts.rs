//! 元素計數表（可用度、需求、覆蓋）

use serde::Serialize;
use std::collections::BTreeMap;

use crate::universe::{ElementId, Universe};

/// 每個字集元素一個計數，依元素索引排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementCounts {
    counts: Vec<u32>,
}

impl ElementCounts {
    /// 創建全零計數表
    pub fn zeros(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 讀取計數（超出範圍視為 0）
    pub fn get(&self, id: ElementId) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: ElementId, value: u32) {
        if let Some(slot) = self.counts.get_mut(id) {
            *slot = value;
        }
    }

    /// 計數加一（飽和）
    pub fn increment(&mut self, id: ElementId) {
        if let Some(slot) = self.counts.get_mut(id) {
            *slot = slot.saturating_add(1);
        }
    }

    /// 計數減一（不低於 0）
    pub fn decrement(&mut self, id: ElementId) {
        if let Some(slot) = self.counts.get_mut(id) {
            *slot = slot.saturating_sub(1);
        }
    }

    /// 是否全為零
    pub fn all_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// 計數總和
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// 非零計數的元素索引
    pub fn nonzero(&self) -> impl Iterator<Item = (ElementId, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(id, &c)| (c > 0).then_some((id, c)))
    }

    /// 轉為以字元為鍵的快照（依標準順序）
    pub fn to_map(&self, universe: &Universe) -> BTreeMap<char, u32> {
        universe
            .iter()
            .zip(self.counts.iter().copied())
            .collect()
    }
}

impl From<Vec<u32>> for ElementCounts {
    fn from(counts: Vec<u32>) -> Self {
        Self { counts }
    }
}
