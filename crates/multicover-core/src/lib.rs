//! # Multicover Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod counts;
pub mod material;
pub mod requirement;
pub mod universe;

// Re-export 主要類型
pub use catalog::Catalog;
pub use config::{CoverConfig, SelectionStrategy};
pub use counts::ElementCounts;
pub use material::{parse_cost, Material};
pub use requirement::Requirement;
pub use universe::{ElementId, Universe};

use std::path::PathBuf;

/// Multicover 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("找不到素材來源: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("無法讀取素材來源: {0}")]
    SourceUnreadable(String),

    #[error("素材來源缺少欄位: {0}")]
    MissingColumn(String),

    #[error("過濾後沒有可用素材")]
    EmptyCatalog,

    #[error("目標字集為空")]
    EmptyUniverse,

    #[error("無效的配置: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoverError>;
