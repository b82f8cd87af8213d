//! # Multicover Report
//!
//! 選材結果與稀缺診斷的報表

pub mod formatter;
pub mod report;

// Re-export 主要類型
pub use formatter::{ReportFormat, ReportFormatter};
pub use report::{ScarceElement, SelectedEntry, SelectionReport, UnmetElement};
