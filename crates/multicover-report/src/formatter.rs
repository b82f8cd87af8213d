//! 報表輸出格式

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::report::SelectionReport;

/// 輸出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// 報表格式化器
pub struct ReportFormatter;

impl ReportFormatter {
    /// 依格式輸出
    pub fn render(report: &SelectionReport, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(Self::render_text(report)),
            ReportFormat::Json => Self::render_json(report),
        }
    }

    pub fn render_json(report: &SelectionReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }

    /// 純文字報表
    pub fn render_text(report: &SelectionReport) -> String {
        let mut out = String::new();

        // 寫入 String 不會失敗
        let _ = Self::write_text(&mut out, report);
        out
    }

    fn write_text(out: &mut String, report: &SelectionReport) -> std::fmt::Result {
        match &report.source {
            Some(source) => writeln!(out, "已從 {} 載入 {} 筆素材", source, report.loaded)?,
            None => writeln!(out, "已載入 {} 筆素材", report.loaded)?,
        }
        if let Some(stats) = &report.load_stats {
            writeln!(
                out,
                "  讀取 {} 筆記錄，捨棄 {} 筆（覆蓋為空），成本修正 {} 筆{}",
                stats.inspected,
                stats.rejected_empty,
                stats.coerced_cost,
                if stats.stopped_at_cap { "，已達接受上限" } else { "" }
            )?;
        }

        writeln!(out)?;
        writeln!(out, "執行時間: {:.6} 秒", report.runtime_seconds)?;

        writeln!(out)?;
        writeln!(
            out,
            "選取 {} 筆素材；總成本 = {}",
            report.selected.len(),
            report.total_cost
        )?;
        writeln!(out, "選取素材:")?;
        for entry in &report.selected {
            writeln!(out, "  - {} (成本={})", entry.name, entry.cost)?;
        }

        writeln!(out)?;
        writeln!(out, "可用度低於需求 r(u) 的元素")?;
        if report.scarce.is_empty() {
            writeln!(out, "  無。每個元素在素材池中至少出現 r(u) 次。")?;
        } else {
            writeln!(out, "  無法滿足需求的元素共 {} 個", report.scarce.len())?;
            for scarce in &report.scarce {
                writeln!(
                    out,
                    "  {}: 可用度={} < r={}",
                    scarce.element, scarce.availability, scarce.requirement
                )?;
            }
        }

        if !report.unmet.is_empty() {
            writeln!(out)?;
            writeln!(out, "未滿足的需求（{:?}）", report.termination)?;
            for unmet in &report.unmet {
                writeln!(out, "  {}: 尚需 {}", unmet.element, unmet.remaining)?;
            }
        }

        Ok(())
    }
}
