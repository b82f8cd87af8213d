//! 延遲評估的候選選擇

use multicover_core::{Catalog, ElementCounts};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::greedy::{marginal_gain, CandidateSelector};
use crate::score::Score;

/// 堆積項目：分數高者優先，同分時目錄索引小者優先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    score: Score,
    index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 延遲評估選擇器
///
/// 需求只減不增，所以素材的增益只會下降：堆積中的舊分數是上界。
/// 取出堆頂後重新計算分數，若仍不低於新堆頂即為本輪最佳候選，
/// 否則以新分數放回。增益降為零的候選永久移除。
pub(crate) struct LazySelector {
    heap: BinaryHeap<Entry>,
}

impl LazySelector {
    pub(crate) fn new(catalog: &Catalog, need: &ElementCounts) -> Self {
        let heap = catalog
            .iter()
            .enumerate()
            .filter_map(|(index, material)| {
                let gain = marginal_gain(material, need);
                (gain > 0).then(|| Entry {
                    score: Score::new(gain, material.cost),
                    index,
                })
            })
            .collect();

        Self { heap }
    }
}

impl CandidateSelector for LazySelector {
    fn select(&mut self, catalog: &Catalog, need: &ElementCounts) -> Option<usize> {
        while let Some(top) = self.heap.pop() {
            let Some(material) = catalog.get(top.index) else {
                continue;
            };
            let gain = marginal_gain(material, need);
            if gain == 0 {
                continue;
            }

            let fresh = Entry {
                score: Score::new(gain, material.cost),
                index: top.index,
            };

            match self.heap.peek() {
                Some(next) if *next > fresh => self.heap.push(fresh),
                _ => return Some(fresh.index),
            }
        }

        None
    }
}
