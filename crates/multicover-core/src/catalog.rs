//! 素材目錄模型

use serde::Serialize;

use crate::material::Material;

/// 素材目錄
///
/// 依來源順序保存已接受的素材，索引 0..n-1；順序影響選擇時的平手判定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    materials: Vec<Material>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加素材
    pub fn push(&mut self, material: Material) {
        self.materials.push(material);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// 計算選取素材的總成本（超出範圍的索引忽略）
    pub fn total_cost(&self, indices: &[usize]) -> u128 {
        indices
            .iter()
            .filter_map(|&i| self.materials.get(i))
            .map(|m| u128::from(m.cost))
            .sum()
    }
}

impl From<Vec<Material>> for Catalog {
    fn from(materials: Vec<Material>) -> Self {
        Self { materials }
    }
}

impl FromIterator<Material> for Catalog {
    fn from_iter<T: IntoIterator<Item = Material>>(iter: T) -> Self {
        Self {
            materials: iter.into_iter().collect(),
        }
    }
}
