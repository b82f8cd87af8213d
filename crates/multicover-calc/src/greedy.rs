//! 貪婪加權多重覆蓋求解器

use multicover_core::{
    Catalog, CoverConfig, ElementCounts, Material, Requirement, SelectionStrategy, Universe,
};
use std::time::Instant;

use crate::availability::AvailabilityAnalyzer;
use crate::lazy::LazySelector;
use crate::remaining::RemainingPool;
use crate::score::Score;
use crate::{CoverResult, Termination};

/// 候選選擇器
///
/// 每次呼叫選出一個得分最高的候選並從剩餘集合中移除；
/// 平手時取目錄順序最前者。沒有正增益候選時回傳 `None`。
pub(crate) trait CandidateSelector {
    fn select(&mut self, catalog: &Catalog, need: &ElementCounts) -> Option<usize>;
}

/// 素材對目前需求的邊際增益：覆蓋中仍需要的元素數
pub fn marginal_gain(material: &Material, need: &ElementCounts) -> u64 {
    material
        .coverage()
        .iter()
        .filter(|&&id| need.get(id) > 0)
        .count() as u64
}

/// 參考演算法：每輪完整掃描剩餘候選
pub(crate) struct FullScanSelector {
    remaining: RemainingPool,
}

impl FullScanSelector {
    pub(crate) fn new(catalog: &Catalog) -> Self {
        Self {
            remaining: RemainingPool::new(catalog.len()),
        }
    }
}

impl CandidateSelector for FullScanSelector {
    fn select(&mut self, catalog: &Catalog, need: &ElementCounts) -> Option<usize> {
        let mut best: Option<(usize, Score)> = None;

        for index in self.remaining.iter() {
            let Some(material) = catalog.get(index) else {
                continue;
            };
            let gain = marginal_gain(material, need);
            if gain == 0 {
                continue;
            }

            let score = Score::new(gain, material.cost);
            // 嚴格大於：平手保留先走訪到的候選
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, _) = best?;
        self.remaining.remove(index);
        Some(index)
    }
}

/// 貪婪求解器
pub struct GreedySolver<'a> {
    catalog: &'a Catalog,
    universe: &'a Universe,
    requirement: &'a Requirement,
    strategy: SelectionStrategy,
    iteration_limit: Option<usize>,
}

impl<'a> GreedySolver<'a> {
    /// 創建新的求解器（參考策略、不限迭代）
    pub fn new(catalog: &'a Catalog, universe: &'a Universe, requirement: &'a Requirement) -> Self {
        Self {
            catalog,
            universe,
            requirement,
            strategy: SelectionStrategy::FullScan,
            iteration_limit: None,
        }
    }

    /// 依配置創建求解器
    pub fn from_config(catalog: &'a Catalog, config: &'a CoverConfig) -> Self {
        Self::new(catalog, &config.universe, &config.requirement)
            .with_strategy(config.strategy)
            .with_iteration_limit(config.iteration_limit)
    }

    /// 建構器模式：設置候選選擇策略
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 建構器模式：設置迭代上限
    pub fn with_iteration_limit(mut self, limit: Option<usize>) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// 計算可用度後求解
    pub fn solve(&self) -> CoverResult {
        let availability = AvailabilityAnalyzer::compute(self.catalog, self.universe);
        self.solve_with_availability(availability)
    }

    /// 以給定的可用度求解
    pub fn solve_with_availability(&self, availability: ElementCounts) -> CoverResult {
        match self.strategy {
            SelectionStrategy::FullScan => {
                self.run(availability, |_| FullScanSelector::new(self.catalog))
            }
            SelectionStrategy::Lazy => {
                self.run(availability, |need| LazySelector::new(self.catalog, need))
            }
        }
    }

    /// 初始需求 need(u) = min(r(u), avail(u))
    fn initial_need(&self, availability: &ElementCounts) -> ElementCounts {
        let mut need = ElementCounts::zeros(self.universe.len());
        for (id, element) in self.universe.iter().enumerate() {
            need.set(id, self.requirement.for_element(element).min(availability.get(id)));
        }
        need
    }

    fn run<S, F>(&self, availability: ElementCounts, make_selector: F) -> CoverResult
    where
        S: CandidateSelector,
        F: FnOnce(&ElementCounts) -> S,
    {
        let start_time = Instant::now();
        let mut need = self.initial_need(&availability);
        let mut coverage = ElementCounts::zeros(self.universe.len());
        let mut selected = Vec::new();

        tracing::info!(
            "開始選材：素材 {} 筆，元素 {} 個，總需求 {}",
            self.catalog.len(),
            self.universe.len(),
            need.total()
        );

        if need.all_zero() {
            tracing::info!("初始需求皆為零，不需選材");
            return CoverResult {
                selected,
                need,
                availability,
                coverage,
                termination: Termination::AlreadySatisfied,
                iterations: 0,
                elapsed: start_time.elapsed(),
            };
        }

        let mut selector = make_selector(&need);
        let mut iterations = 0;

        let termination = loop {
            if need.all_zero() {
                break Termination::Satisfied;
            }

            if self.iteration_limit.is_some_and(|limit| iterations >= limit) {
                tracing::warn!("達到迭代上限 {}，剩餘需求 {}", iterations, need.total());
                break Termination::IterationLimit;
            }

            let Some(index) = selector.select(self.catalog, &need) else {
                tracing::warn!("剩餘素材無法滿足需求，剩餘需求 {}", need.total());
                break Termination::Starved;
            };
            let Some(material) = self.catalog.get(index) else {
                break Termination::Starved;
            };

            iterations += 1;
            let gain = marginal_gain(material, &need);
            tracing::debug!(
                "第 {} 輪：選取 #{} {}（成本 {}，增益 {}，分數 {:.4}）",
                iterations,
                index,
                material.name,
                material.cost,
                gain,
                Score::new(gain, material.cost).as_f64()
            );

            selected.push(index);
            for &id in material.coverage() {
                need.decrement(id);
                coverage.increment(id);
            }
        };

        let result = CoverResult {
            selected,
            need,
            availability,
            coverage,
            termination,
            iterations,
            elapsed: start_time.elapsed(),
        };

        tracing::info!(
            "選材完成：{:?}，選取 {} 筆，總成本 {}，耗時 {:?}",
            result.termination,
            result.selected.len(),
            result.total_cost(self.catalog),
            result.elapsed
        );

        result
    }
}
