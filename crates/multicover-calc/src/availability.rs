//! 可用度分析

use multicover_core::{Catalog, ElementCounts, Requirement, Universe};

/// 可用度分析器
pub struct AvailabilityAnalyzer;

impl AvailabilityAnalyzer {
    /// 計算每個元素可被多少素材覆蓋
    pub fn compute(catalog: &Catalog, universe: &Universe) -> ElementCounts {
        let mut availability = ElementCounts::zeros(universe.len());

        for material in catalog.iter() {
            for &id in material.coverage() {
                availability.increment(id);
            }
        }

        availability
    }

    /// 可用度低於需求的元素（依標準順序）
    pub fn scarce(
        availability: &ElementCounts,
        universe: &Universe,
        requirement: &Requirement,
    ) -> Vec<(char, u32, u32)> {
        universe
            .iter()
            .enumerate()
            .filter_map(|(id, ch)| {
                let avail = availability.get(id);
                let required = requirement.for_element(ch);
                (avail < required).then_some((ch, avail, required))
            })
            .collect()
    }
}
