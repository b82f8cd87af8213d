//! 覆蓋需求模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 覆蓋需求 r(u)
///
/// 全域預設次數，可對個別元素覆寫。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    /// 預設需求次數
    pub default: u32,

    /// 個別元素覆寫
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<char, u32>,
}

impl Requirement {
    /// 所有元素使用相同需求次數
    pub fn uniform(default: u32) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// 建構器模式：覆寫單一元素的需求次數
    pub fn with_override(mut self, element: char, required: u32) -> Self {
        self.overrides.insert(element, required);
        self
    }

    /// 查詢元素的需求次數
    pub fn for_element(&self, element: char) -> u32 {
        self.overrides.get(&element).copied().unwrap_or(self.default)
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::uniform(5)
    }
}
