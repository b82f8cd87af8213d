//! 集成測試

use clap::Parser;
use multicover::{run, Cli, RunOutcome};
use rstest::rstest;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("materials.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn run_with(args: &[&str], source: &Path) -> (RunOutcome, String) {
    let mut argv = vec!["multicover", "--source", source.to_str().unwrap()];
    argv.extend_from_slice(args);

    let cli = Cli::parse_from(argv);
    let mut out = Vec::new();
    let outcome = run(&cli, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_end_to_end_selection() {
    // 場景：M2 先選（分數 2.0），再選 M1 補足 A
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nM1,2,AB\nM2,1,BC\nM3,3,AC\n");

    let (outcome, text) = run_with(&["-r", "1", "--universe", "ABC"], &source);

    assert_eq!(outcome, RunOutcome::Completed);
    assert!(text.contains("載入 3 筆素材"));
    assert!(text.contains("選取 2 筆素材；總成本 = 3"));
    let m2 = text.find("  - M2 (成本=1)").unwrap();
    let m1 = text.find("  - M1 (成本=2)").unwrap();
    assert!(m2 < m1);
    assert!(text.contains("  無。每個元素在素材池中至少出現 r(u) 次。"));
}

#[test]
fn test_scarce_element_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nM1,2,AB\nM2,1,BC\nM3,3,AC\n");

    let (_, text) = run_with(&["-r", "1", "--universe", "ABCX"], &source);

    assert!(text.contains("無法滿足需求的元素共 1 個"));
    assert!(text.contains("  X: 可用度=0 < r=1"));
}

#[rstest]
#[case("full-scan")]
#[case("lazy")]
fn test_strategies_agree(#[case] strategy: &str) {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(
        &dir,
        "Name,Cost,Kanji\n\
         朝 1,40,日本人\n\
         朝 2,25,山川\n\
         昼 1,30,日月山\n\
         昼 2,10,人\n\
         夜 1,55,日本山川月人\n",
    );

    let (_, text) = run_with(
        &["-r", "2", "--universe", "日本人山川月", "--strategy", strategy, "--format", "json"],
        &source,
    );
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let names: Vec<_> = value["selected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    // 第 1 輪：夜 1 = 6/55 最高；第 2 輪昼 1 與昼 2 同為 0.1，目錄順序在前的昼 1 勝出
    assert_eq!(names, vec!["夜 1", "昼 1", "昼 2", "朝 2", "朝 1"]);
    assert_eq!(value["termination"], "satisfied");
}

#[test]
fn test_cap_stops_before_later_records() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nR1,5,A\nR2,1,xyz\nR3,1,AB\n");

    let (_, text) = run_with(&["-r", "1", "--universe", "AB", "--cap", "1"], &source);

    assert!(text.contains("載入 1 筆素材"));
    assert!(text.contains("  - R1 (成本=5)"));
    assert!(!text.contains("- R3"));
    assert!(text.contains("  B: 可用度=0 < r=1"));
}

#[test]
fn test_missing_source_is_clean_exit() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("absent.csv");

    let (outcome, text) = run_with(&[], &source);

    assert_eq!(outcome, RunOutcome::SourceNotFound);
    assert!(text.starts_with("錯誤: 找不到素材來源"));
}

#[test]
fn test_empty_catalog_is_clean_exit() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nR1,1,xyz\nR2,1,\n");

    let (outcome, text) = run_with(&["--universe", "AB"], &source);

    assert_eq!(outcome, RunOutcome::EmptyCatalog);
    assert_eq!(text.trim(), "過濾後沒有可用素材");
}

#[test]
fn test_malformed_source_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Title,Cost\nR1,1\n");

    let cli = Cli::parse_from(["multicover", "--source", source.to_str().unwrap()]);
    let mut out = Vec::new();

    assert!(run(&cli, &mut out).is_err());
}

#[test]
fn test_config_file_with_cli_override() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nM1,2,AB\nM2,1,BC\nM3,3,AC\n");
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{
                "universe": "ABC",
                "requirement": {{ "default": 5, "overrides": {{ "A": 1 }} }},
                "source_path": {}
            }}"#,
            serde_json::to_string(source.to_str().unwrap()).unwrap()
        ),
    )
    .unwrap();

    let cli = Cli::parse_from([
        "multicover",
        "--config",
        config_path.to_str().unwrap(),
        "-r",
        "1",
    ]);
    let config = cli.config().unwrap();
    assert_eq!(config.requirement.for_element('A'), 1);
    assert_eq!(config.requirement.for_element('B'), 1);

    let mut out = Vec::new();
    assert_eq!(run(&cli, &mut out).unwrap(), RunOutcome::Completed);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("總成本 = 3"));
}

#[test]
fn test_iteration_limit_reports_unmet() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "Name,Cost,Kanji\nM1,2,AB\nM2,1,BC\nM3,3,AC\n");

    let (_, text) = run_with(&["-r", "1", "--universe", "ABC", "--max-iterations", "1"], &source);

    assert!(text.contains("選取 1 筆素材；總成本 = 1"));
    assert!(text.contains("未滿足的需求（IterationLimit）"));
    assert!(text.contains("  A: 尚需 1"));
}
