//! # Multicover Calculation Engine
//!
//! 素材載入、可用度分析與貪婪加權多重覆蓋求解

pub mod availability;
pub mod greedy;
pub mod lazy;
pub mod loader;
pub mod remaining;
pub mod score;

// Re-export 主要類型
pub use availability::AvailabilityAnalyzer;
pub use greedy::GreedySolver;
pub use loader::{CatalogLoader, LoadStats, LoadedCatalog};
pub use remaining::RemainingPool;
pub use score::Score;

use multicover_core::{Catalog, ElementCounts, ElementId};
use std::time::Duration;

/// 求解結束原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// 開始時所有需求已為零，未執行任何迭代
    AlreadySatisfied,
    /// 所有需求已滿足
    Satisfied,
    /// 剩餘素材無法再降低任何需求
    Starved,
    /// 達到外部設定的迭代上限
    IterationLimit,
}

/// 求解結果
#[derive(Debug, Clone)]
pub struct CoverResult {
    /// 選取的目錄索引（依選擇順序）
    pub selected: Vec<usize>,

    /// 剩餘需求
    pub need: ElementCounts,

    /// 可用度（未修改）
    pub availability: ElementCounts,

    /// 覆蓋次數
    pub coverage: ElementCounts,

    /// 結束原因
    pub termination: Termination,

    /// 已執行的迭代次數
    pub iterations: usize,

    /// 求解耗時
    pub elapsed: Duration,
}

impl CoverResult {
    /// 是否滿足所有（可達成的）需求
    pub fn is_satisfied(&self) -> bool {
        matches!(
            self.termination,
            Termination::AlreadySatisfied | Termination::Satisfied
        )
    }

    /// 尚未滿足的需求（元素索引, 剩餘次數）
    pub fn unmet(&self) -> Vec<(ElementId, u32)> {
        self.need.nonzero().collect()
    }

    /// 選取素材的總成本
    pub fn total_cost(&self, catalog: &Catalog) -> u128 {
        catalog.total_cost(&self.selected)
    }
}
