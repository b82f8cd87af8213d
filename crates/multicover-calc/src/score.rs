//! 成本正規化分數

use std::cmp::Ordering;

/// 分數 gain / cost，以交叉相乘精確比較
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub gain: u64,
    pub cost: u64,
}

impl Score {
    pub fn new(gain: u64, cost: u64) -> Self {
        Self {
            gain,
            cost: cost.max(1),
        }
    }

    /// 近似浮點值，僅供日誌與報表
    pub fn as_f64(&self) -> f64 {
        self.gain as f64 / self.cost as f64
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.gain) * u128::from(other.cost);
        let rhs = u128::from(other.gain) * u128::from(self.cost);
        lhs.cmp(&rhs)
    }
}
