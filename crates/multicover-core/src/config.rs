//! 選材配置模型

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::requirement::Requirement;
use crate::universe::Universe;
use crate::{CoverError, Result};

/// 選材執行配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// 目標字集
    pub universe: Universe,

    /// 覆蓋需求
    pub requirement: Requirement,

    /// 接受素材上限（None 表示不限）
    pub acceptance_cap: Option<usize>,

    /// 素材來源路徑
    pub source_path: PathBuf,

    /// 候選選擇策略
    pub strategy: SelectionStrategy,

    /// 迭代上限（None 表示不限）
    pub iteration_limit: Option<usize>,
}

impl CoverConfig {
    /// 創建新的選材配置
    pub fn new(universe: Universe, requirement: Requirement) -> Self {
        Self {
            universe,
            requirement,
            ..Self::default()
        }
    }

    /// 建構器模式：設置接受素材上限
    pub fn with_acceptance_cap(mut self, cap: Option<usize>) -> Self {
        self.acceptance_cap = cap;
        self
    }

    /// 建構器模式：設置素材來源路徑
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
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

    /// 從 JSON 字串載入（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoverError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 從 JSON 檔案載入
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoverError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// 檢查配置是否可用
    pub fn validate(&self) -> Result<()> {
        if self.universe.is_empty() {
            return Err(CoverError::EmptyUniverse);
        }
        if let Some(&element) = self
            .requirement
            .overrides
            .keys()
            .find(|&&ch| !self.universe.contains(ch))
        {
            return Err(CoverError::InvalidConfig(format!(
                "需求覆寫的元素 '{}' 不在目標字集中",
                element
            )));
        }
        Ok(())
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            universe: Universe::n5(),
            requirement: Requirement::default(),
            acceptance_cap: Some(500),
            source_path: PathBuf::from("materials.csv"),
            strategy: SelectionStrategy::FullScan,
            iteration_limit: None,
        }
    }
}

/// 候選選擇策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// 每輪重新掃描所有剩餘候選（參考演算法）
    #[default]
    FullScan,

    /// 延遲評估的優先佇列，選擇序列與 FullScan 相同
    Lazy,
}
