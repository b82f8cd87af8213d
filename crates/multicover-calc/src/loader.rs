//! 素材目錄載入

use multicover_core::{parse_cost, Catalog, CoverError, Material, Universe};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// 來源欄位名稱
pub const NAME_COLUMN: &str = "Name";
pub const COST_COLUMN: &str = "Cost";
pub const PAYLOAD_COLUMN: &str = "Kanji";

/// 載入統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadStats {
    /// 實際讀取的記錄數
    pub inspected: usize,
    /// 接受的記錄數
    pub accepted: usize,
    /// 因覆蓋為空而捨棄的記錄數
    pub rejected_empty: usize,
    /// 成本被修正為 1 的已接受記錄數
    pub coerced_cost: usize,
    /// 是否因達到接受上限而停止讀取
    pub stopped_at_cap: bool,
}

/// 載入結果
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub stats: LoadStats,
}

impl LoadedCatalog {
    /// 目錄為空時回傳錯誤
    pub fn require_non_empty(self) -> multicover_core::Result<Self> {
        if self.catalog.is_empty() {
            return Err(CoverError::EmptyCatalog);
        }
        Ok(self)
    }
}

/// 欄位位置
struct Columns {
    name: usize,
    cost: Option<usize>,
    payload: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> multicover_core::Result<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);

        let name = find(NAME_COLUMN)
            .ok_or_else(|| CoverError::MissingColumn(NAME_COLUMN.to_string()))?;

        Ok(Self {
            name,
            cost: find(COST_COLUMN),
            payload: find(PAYLOAD_COLUMN),
        })
    }
}

/// 素材目錄載入器
pub struct CatalogLoader;

impl CatalogLoader {
    /// 從檔案載入
    pub fn load_path(
        path: &Path,
        universe: &Universe,
        acceptance_cap: Option<usize>,
    ) -> multicover_core::Result<LoadedCatalog> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CoverError::SourceNotFound(path.to_path_buf()),
            _ => CoverError::SourceUnreadable(format!("{}: {}", path.display(), e)),
        })?;

        tracing::info!("載入素材來源: {}", path.display());
        Self::load(file, universe, acceptance_cap)
    }

    /// 從任意讀取器載入
    ///
    /// 每筆記錄讀取前先檢查接受上限：已接受數量達到上限即停止，
    /// 之後的記錄不會被讀取或解析。
    pub fn load<R: Read>(
        reader: R,
        universe: &Universe,
        acceptance_cap: Option<usize>,
    ) -> multicover_core::Result<LoadedCatalog> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(unreadable)?.clone();
        let columns = Columns::locate(&headers)?;

        let mut catalog = Catalog::new();
        let mut stats = LoadStats::default();
        let mut record = csv::StringRecord::new();

        loop {
            if acceptance_cap.is_some_and(|cap| stats.accepted >= cap) {
                stats.stopped_at_cap = true;
                tracing::debug!("已達接受上限 {}，停止讀取", stats.accepted);
                break;
            }

            if !csv_reader.read_record(&mut record).map_err(unreadable)? {
                break;
            }
            stats.inspected += 1;

            let field = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("");

            let name = field(Some(columns.name)).trim();
            let (cost, coerced) = parse_cost(field(columns.cost));
            let payload = field(columns.payload).trim();

            let Some(material) = Material::new(name, cost, payload, universe) else {
                stats.rejected_empty += 1;
                continue;
            };

            if coerced {
                stats.coerced_cost += 1;
            }

            catalog.push(material);
            stats.accepted += 1;
        }

        tracing::info!(
            "載入完成：讀取 {} 筆，接受 {} 筆，捨棄 {} 筆",
            stats.inspected,
            stats.accepted,
            stats.rejected_empty
        );

        Ok(LoadedCatalog { catalog, stats })
    }
}

fn unreadable(err: csv::Error) -> CoverError {
    CoverError::SourceUnreadable(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn abc() -> Universe {
        Universe::from("ABC")
    }

    #[test]
    fn test_load_in_source_order() {
        let source = "Name,Cost,Kanji\nM1,2,AB\nM2,1,BC\nM3,3,AC\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap();

        let names: Vec<_> = loaded.catalog.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["M1", "M2", "M3"]);
        assert_eq!(loaded.stats.inspected, 3);
        assert_eq!(loaded.stats.accepted, 3);
        assert!(!loaded.stats.stopped_at_cap);
    }

    #[test]
    fn test_cost_coercion() {
        let source = "Name,Cost,Kanji\nzero,0,A\nneg,-4,B\ntext,abc,C\nok,7,A\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap();

        let costs: Vec<_> = loaded.catalog.iter().map(|m| m.cost).collect();
        assert_eq!(costs, vec![1, 1, 1, 7]);
        assert_eq!(loaded.stats.coerced_cost, 3);
    }

    #[test]
    fn test_overflowing_cost_saturates_without_coercion() {
        let source = "Name,Cost,Kanji
big,99999999999999999999999,A
";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap();

        assert_eq!(loaded.catalog.get(0).unwrap().cost, u64::MAX);
        assert_eq!(loaded.stats.coerced_cost, 0);
    }

    #[test]
    fn test_coverage_filtered_and_deduplicated() {
        let source = "Name,Cost,Kanji\n  M1 ,1, xAAyB \nM2,1,xyz\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        let material = loaded.catalog.get(0).unwrap();
        assert_eq!(material.name, "M1");
        assert_eq!(material.coverage(), &[0, 1]);
        assert_eq!(material.display(), "AB");
        assert_eq!(loaded.stats.rejected_empty, 1);
    }

    #[test]
    fn test_cap_stops_scanning() {
        // 第 2 筆覆蓋為空，第 3 筆有效；上限 1 時第 3 筆不可被讀取
        let source = "Name,Cost,Kanji\nR1,1,A\nR2,1,xyz\nR3,1,B\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), Some(1)).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.catalog.get(0).unwrap().name, "R1");
        assert_eq!(loaded.stats.inspected, 1);
        assert!(loaded.stats.stopped_at_cap);
    }

    #[test]
    fn test_rejects_do_not_count_toward_cap() {
        let source = "Name,Cost,Kanji\nR1,1,xyz\nR2,1,A\nR3,1,q\nR4,1,B\nR5,1,C\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), Some(2)).unwrap();

        let names: Vec<_> = loaded.catalog.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["R2", "R4"]);
        assert_eq!(loaded.stats.inspected, 4);
        assert_eq!(loaded.stats.rejected_empty, 2);
    }

    #[test]
    fn test_records_after_cap_are_never_parsed() {
        // 第 2 筆含無效 UTF-8，若被讀取會產生錯誤
        let mut source = b"Name,Cost,Kanji\nR1,1,A\n".to_vec();
        source.extend_from_slice(b"R2,1,\xff\xfe\n");

        let loaded = CatalogLoader::load(source.as_slice(), &abc(), Some(1)).unwrap();
        assert_eq!(loaded.catalog.len(), 1);

        let err = CatalogLoader::load(source.as_slice(), &abc(), None).unwrap_err();
        assert!(matches!(err, CoverError::SourceUnreadable(_)));
    }

    #[test]
    fn test_zero_cap_loads_nothing() {
        let source = "Name,Cost,Kanji\nR1,1,A\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), Some(0)).unwrap();

        assert!(loaded.catalog.is_empty());
        assert_eq!(loaded.stats.inspected, 0);
        assert!(matches!(
            loaded.require_non_empty().unwrap_err(),
            CoverError::EmptyCatalog
        ));
    }

    #[test]
    fn test_short_rows_and_missing_columns() {
        // 缺少 Cost 欄位：成本一律為 1；短列視為空字串
        let source = "Name,Kanji\nR1,AB\nR2\n";
        let loaded = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.catalog.get(0).unwrap().cost, 1);
        assert_eq!(loaded.stats.rejected_empty, 1);
    }

    #[test]
    fn test_missing_name_column() {
        let source = "Title,Cost,Kanji\nR1,1,A\n";
        let err = CatalogLoader::load(source.as_bytes(), &abc(), None).unwrap_err();

        assert!(matches!(err, CoverError::MissingColumn(ref c) if c == "Name"));
    }

    #[test]
    fn test_load_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = CatalogLoader::load_path(&path, &abc(), None).unwrap_err();
        assert!(matches!(err, CoverError::SourceNotFound(p) if p == path));
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Cost,Kanji").unwrap();
        writeln!(file, "山川 1,12,山川田").unwrap();

        let universe = Universe::from("山川");
        let loaded = CatalogLoader::load_path(file.path(), &universe, Some(500)).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.catalog.get(0).unwrap().cost, 12);
        assert_eq!(loaded.catalog.get(0).unwrap().display(), "山川");
    }
}
