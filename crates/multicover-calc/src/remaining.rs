//! 剩餘候選池

/// 保留目錄順序的剩餘候選集合
///
/// 以雙向鏈結陣列實作，移除為 O(1)，走訪順序永遠是原始目錄順序。
#[derive(Debug, Clone)]
pub struct RemainingPool {
    next: Vec<usize>,
    prev: Vec<usize>,
    present: Vec<bool>,
    len: usize,
}

impl RemainingPool {
    /// 創建包含 0..n 的候選池
    pub fn new(n: usize) -> Self {
        // 索引 n 為哨兵
        let size = n + 1;
        Self {
            next: (0..size).map(|i| (i + 1) % size).collect(),
            prev: (0..size).map(|i| (i + n) % size).collect(),
            present: vec![true; n],
            len: n,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.present.get(index).copied().unwrap_or(false)
    }

    /// 移除候選，不存在時回傳 false
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }

        let (before, after) = (self.prev[index], self.next[index]);
        self.next[before] = after;
        self.prev[after] = before;
        self.present[index] = false;
        self.len -= 1;
        true
    }

    /// 依目錄順序走訪
    pub fn iter(&self) -> Iter<'_> {
        let sentinel = self.present.len();
        Iter {
            pool: self,
            cursor: self.next[sentinel],
        }
    }
}

pub struct Iter<'a> {
    pool: &'a RemainingPool,
    cursor: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == self.pool.present.len() {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.pool.next[current];
        Some(current)
    }
}
