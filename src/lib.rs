//! # multicover
//!
//! 為固定字集挑選低成本閱讀素材：每個元素至少被指定次數的不同素材覆蓋。
//!
//! ## 設定來源
//!
//! 先讀取 `--config` 指定的 JSON 檔（未指定時使用預設值），
//! 再以命令列參數覆寫。

use anyhow::Context;
use clap::{Parser, ValueEnum};
use multicover_calc::{CatalogLoader, GreedySolver};
use multicover_core::{CoverConfig, CoverError, Requirement, SelectionStrategy, Universe};
use multicover_report::{ReportFormat, ReportFormatter, SelectionReport};
use std::io::Write;
use std::path::PathBuf;

/// 貪婪加權多重覆蓋選材
#[derive(Debug, Parser)]
#[command(name = "multicover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 素材來源 CSV（欄位 Name, Cost, Kanji）
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// 每個元素需要被覆蓋的次數
    #[arg(short = 'r', long)]
    pub requirement: Option<u32>,

    /// 接受素材上限
    #[arg(long, conflicts_with = "no_cap")]
    pub cap: Option<usize>,

    /// 不限制接受素材數量
    #[arg(long)]
    pub no_cap: bool,

    /// 目標字集（字元字串；空白會被忽略，其餘字元皆視為元素）
    #[arg(long)]
    pub universe: Option<String>,

    /// JSON 配置檔
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 候選選擇策略
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// 迭代上限
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// 輸出格式
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    FullScan,
    Lazy,
}

impl From<StrategyArg> for SelectionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::FullScan => SelectionStrategy::FullScan,
            StrategyArg::Lazy => SelectionStrategy::Lazy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// 合併配置檔與命令列參數
    pub fn config(&self) -> anyhow::Result<CoverConfig> {
        let mut config = match &self.config {
            Some(path) => CoverConfig::from_json_file(path)?,
            None => CoverConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_path = source.clone();
        }
        if let Some(universe) = &self.universe {
            config.universe = Universe::from(universe.as_str());
        }
        if let Some(required) = self.requirement {
            // 命令列只設定預設值，保留配置檔中的個別覆寫
            config.requirement = Requirement {
                default: required,
                ..config.requirement
            };
        }
        if self.no_cap {
            config.acceptance_cap = None;
        } else if let Some(cap) = self.cap {
            config.acceptance_cap = Some(cap);
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        if let Some(limit) = self.max_iterations {
            config.iteration_limit = Some(limit);
        }

        config.validate()?;
        Ok(config)
    }
}

/// 執行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// 完成求解並輸出報表
    Completed,
    /// 找不到素材來源，未求解
    SourceNotFound,
    /// 過濾後沒有素材，未求解
    EmptyCatalog,
}

/// 載入素材、求解並將報表寫入 `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<RunOutcome> {
    let config = cli.config()?;
    tracing::debug!("有效配置: {:?}", config);

    let loaded = match CatalogLoader::load_path(
        &config.source_path,
        &config.universe,
        config.acceptance_cap,
    ) {
        Ok(loaded) => loaded,
        Err(err @ CoverError::SourceNotFound(_)) => {
            writeln!(out, "錯誤: {err}")?;
            return Ok(RunOutcome::SourceNotFound);
        }
        Err(err) => return Err(err).context("載入素材失敗"),
    };

    if loaded.catalog.is_empty() {
        writeln!(out, "{}", CoverError::EmptyCatalog)?;
        return Ok(RunOutcome::EmptyCatalog);
    }

    let result = GreedySolver::from_config(&loaded.catalog, &config).solve();

    let report = SelectionReport::build(
        &loaded.catalog,
        &config.universe,
        &config.requirement,
        &result,
    )
    .with_source(config.source_path.display().to_string())
    .with_load_stats(loaded.stats);

    let rendered = ReportFormatter::render(&report, cli.format.into())?;
    write!(out, "{rendered}")?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }

    Ok(RunOutcome::Completed)
}
