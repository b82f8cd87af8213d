//! 選材報表模型

use multicover_calc::{AvailabilityAnalyzer, CoverResult, LoadStats, Termination};
use multicover_core::{Catalog, Requirement, Universe};
use serde::Serialize;
use std::collections::BTreeMap;

/// 選取的素材
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedEntry {
    /// 目錄索引
    pub index: usize,
    pub name: String,
    pub cost: u64,
}

/// 稀缺元素：可用度低於需求，無論如何選取都無法滿足
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScarceElement {
    pub element: char,
    pub availability: u32,
    pub requirement: u32,
}

/// 求解結束時仍未滿足的需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmetElement {
    pub element: char,
    pub remaining: u32,
}

/// 選材報表
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    /// 素材來源
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// 已載入的素材數
    pub loaded: usize,

    /// 載入統計
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_stats: Option<LoadStats>,

    /// 求解耗時（秒）
    pub runtime_seconds: f64,

    pub termination: Termination,

    pub iterations: usize,

    /// 選取素材總成本
    pub total_cost: u128,

    /// 選取素材（依選擇順序）
    pub selected: Vec<SelectedEntry>,

    /// 稀缺元素（依標準順序）
    pub scarce: Vec<ScarceElement>,

    /// 未滿足的需求（依標準順序）
    pub unmet: Vec<UnmetElement>,

    /// 各元素被選取素材覆蓋的次數
    pub coverage: BTreeMap<char, u32>,
}

impl SelectionReport {
    /// 從求解結果建立報表
    pub fn build(
        catalog: &Catalog,
        universe: &Universe,
        requirement: &Requirement,
        result: &CoverResult,
    ) -> Self {
        let selected = result
            .selected
            .iter()
            .filter_map(|&index| {
                catalog.get(index).map(|material| SelectedEntry {
                    index,
                    name: material.name.clone(),
                    cost: material.cost,
                })
            })
            .collect();

        let scarce = AvailabilityAnalyzer::scarce(&result.availability, universe, requirement)
            .into_iter()
            .map(|(element, availability, requirement)| ScarceElement {
                element,
                availability,
                requirement,
            })
            .collect();

        let unmet = result
            .unmet()
            .into_iter()
            .filter_map(|(id, remaining)| {
                universe
                    .element(id)
                    .map(|element| UnmetElement { element, remaining })
            })
            .collect();

        Self {
            source: None,
            loaded: catalog.len(),
            load_stats: None,
            runtime_seconds: result.elapsed.as_secs_f64(),
            termination: result.termination,
            iterations: result.iterations,
            total_cost: result.total_cost(catalog),
            selected,
            scarce,
            unmet,
            coverage: result.coverage.to_map(universe),
        }
    }

    /// 建構器模式：設置素材來源
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// 建構器模式：附上載入統計
    pub fn with_load_stats(mut self, stats: LoadStats) -> Self {
        self.load_stats = Some(stats);
        self
    }
}
