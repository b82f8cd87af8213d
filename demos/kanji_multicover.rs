//! 漢字多重覆蓋選材示例

use multicover_calc::{CatalogLoader, GreedySolver};
use multicover_core::{Requirement, SelectionStrategy, Universe};
use multicover_report::{ReportFormatter, SelectionReport};

const SOURCE: &str = "\
Name,Cost,Kanji
日記 1,120,今日学校友
日記 2,80,天気雨
日記 3,150,父母名前
手紙 1,60,先生元気
手紙 2,200,毎日学生本読書
新聞 1,95,東京大雨電車
新聞 2,130,北海道雪山
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 漢字多重覆蓋選材示例 ===\n");

    let universe = Universe::n5();
    let requirement = Requirement::uniform(2);

    let loaded = CatalogLoader::load(SOURCE.as_bytes(), &universe, None)?.require_non_empty()?;

    println!("素材清單:");
    for material in loaded.catalog.iter() {
        println!(
            "  - {}: 成本 {}, 覆蓋 {}",
            material.name,
            material.cost,
            material.display()
        );
    }
    println!();

    let result = GreedySolver::new(&loaded.catalog, &universe, &requirement)
        .with_strategy(SelectionStrategy::Lazy)
        .solve();

    let report = SelectionReport::build(&loaded.catalog, &universe, &requirement, &result);
    print!("{}", ReportFormatter::render_text(&report));

    Ok(())
}
