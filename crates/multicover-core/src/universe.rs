//! 目標字集模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 初級（N5）漢字字集，預設目標字集
pub const N5_KANJI: &str = "人一日大年出本中子見国上分生行二間時気十女三前入小後長下学月何来話山高今書五名金男外四先川東聞語九食八水天木六万白七円電父北車母半百土西読千校右南左友火毎雨休午";

/// 字集內元素的索引（依標準順序）
pub type ElementId = usize;

/// 目標字集
///
/// 元素去重後依 Unicode 碼位排序，此順序即為報表的標準順序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Universe {
    elements: Vec<char>,
    index: HashMap<char, ElementId>,
}

impl Universe {
    /// 從任意字元序列建立字集
    ///
    /// 空白字元會被忽略，其餘字元（含標點）皆視為元素。
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut elements: Vec<char> = chars
            .into_iter()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        elements.sort_unstable();
        elements.dedup();

        let index = elements
            .iter()
            .enumerate()
            .map(|(id, &ch)| (ch, id))
            .collect();

        Self { elements, index }
    }

    /// 初級漢字字集
    pub fn n5() -> Self {
        Self::new(N5_KANJI.chars())
    }

    /// 元素數量
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 檢查字元是否屬於字集
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// 查詢字元的索引
    pub fn id_of(&self, ch: char) -> Option<ElementId> {
        self.index.get(&ch).copied()
    }

    /// 依索引取回字元
    pub fn element(&self, id: ElementId) -> Option<char> {
        self.elements.get(id).copied()
    }

    /// 依標準順序列舉元素
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.elements.iter().copied()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.elements
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::n5()
    }
}

impl From<String> for Universe {
    fn from(value: String) -> Self {
        Self::new(value.chars())
    }
}

impl From<&str> for Universe {
    fn from(value: &str) -> Self {
        Self::new(value.chars())
    }
}

impl From<Universe> for String {
    fn from(value: Universe) -> Self {
        value.elements.into_iter().collect()
    }
}
