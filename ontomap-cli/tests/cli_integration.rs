mod common;

use anyhow::Result;
use ontomap_test::assert_header;
use ontomap_test::fixtures::{easily_resolved_records, LATEST_VERSION, ORIGINAL_VERSION};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

use common::*;

#[test]
fn test_cli_help_command() {
    let mut cmd = ontomap_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("versions"));
}

#[test]
fn test_cli_version_command() {
    ontomap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ontomap"));
}

#[test]
fn test_translate_writes_options_column() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.output_path("translated.txt");

    env.translate_forward(&env.input, &output).assert().success();

    let content = std::fs::read_to_string(&output)?;
    assert_header(
        &content,
        &[
            "PATIENT_ID",
            "SAMPLE_ID",
            "CANCER_TYPE",
            "ONCOTREE_CODE",
            "ONCOTREE_CODE_OPTIONS",
        ],
    );

    let values: Vec<(String, String)> = data_rows(&content)
        .into_iter()
        .map(|row| (row[3].clone(), row[4].clone()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("DLL".to_string(), String::new()),
            (String::new(), "ALL -> {BLL,TLL}".to_string()),
            (
                String::new(),
                "SEZS -> {SS}, more granular choices introduced".to_string()
            ),
            (
                String::new(),
                "TNKL -> Neighborhood: MYCF,PTCL,TISSUE,TNKL_CHILD2".to_string()
            ),
            ("NA".to_string(), String::new()),
            (
                String::new(),
                format!("NOT_A_CODE -> ???, code not in source version {}", ORIGINAL_VERSION)
            ),
            ("DLL".to_string(), String::new()),
        ]
    );

    // default summary next to the output, in the configured format
    let summary = std::fs::read_to_string(env.output_path("translated_summary.html"))?;
    assert!(summary.contains("<h1>Mapping Summary</h1>"));
    assert!(summary.contains("search_term=(TISSUE)"));
    Ok(())
}

#[test]
fn test_translate_auto_resolve() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.output_path("auto.txt");

    env.translate_forward(&env.input, &output)
        .arg("--auto-resolve")
        .arg("--no-report")
        .assert()
        .success();

    let codes: Vec<String> = data_rows(&std::fs::read_to_string(&output)?)
        .into_iter()
        .map(|row| row[3].clone())
        .collect();
    assert_eq!(codes, vec!["DLL", "LNM", "SS", "TISSUE", "NA", "", "DLL"]);
    assert!(!env.output_path("auto_summary.html").exists());
    Ok(())
}

#[test]
fn test_translate_drops_options_when_all_resolved() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.trees.write_file("easy.txt", &easily_resolved_records())?;
    let output = env.output_path("easy_out.txt");

    env.translate_forward(&input, &output)
        .arg("--report-format")
        .arg("json")
        .assert()
        .success();

    let content = std::fs::read_to_string(&output)?;
    assert_eq!(content, "PATIENT_ID\tONCOTREE_CODE\tAGE\nP1\tDLL\t40\nP2\tMYCF\t51\nP3\tNA\t22\n");

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.output_path("easy_out_summary.json"))?)?;
    assert_eq!(summary["title"], "Mapping Summary");
    Ok(())
}

#[test]
fn test_translate_custom_report_output() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = env.output_path("out.txt");
    let report = env.output_path("report.txt");

    env.translate_forward(&env.input, &output)
        .arg("--report-format")
        .arg("text")
        .arg("--report-output")
        .arg(&report)
        .assert()
        .success();

    let text = std::fs::read_to_string(&report)?;
    assert!(text.starts_with("Mapping Summary"));
    assert!(text.contains("Codes that could not be mapped"));
    Ok(())
}

#[test]
fn test_translate_missing_code_column_is_parse_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.trees.write_file("bad.txt", "PATIENT_ID\tCODE\nP1\tSS\n")?;

    env.translate_forward(&input, &env.output_path("never.txt"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ONCOTREE_CODE"));
    Ok(())
}

#[test]
fn test_translate_unknown_version_fails() -> Result<()> {
    let env = TestEnvironment::new()?;

    ontomap_cmd()
        .arg("translate")
        .arg("-i")
        .arg(&env.input)
        .arg("-o")
        .arg(env.output_path("never.txt"))
        .arg("-s")
        .arg("oncotree_1999_01_01")
        .arg("-t")
        .arg(LATEST_VERSION)
        .arg("--trees")
        .arg(env.tree_dir())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("oncotree_1999_01_01"));
    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = env.trees.write_file("ontomap.toml", "[resolution]\nmax_depth = \"deep\"\n")?;

    ontomap_cmd()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn test_config_shows_defaults() {
    ontomap_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_depth = 64"))
        .stdout(predicate::str::contains("code_column = \"ONCOTREE_CODE\""));
}

#[test]
fn test_resolve_prints_outcomes() -> Result<()> {
    let env = TestEnvironment::new()?;

    ontomap_cmd()
        .arg("resolve")
        .arg("SEZS")
        .arg("TNKL")
        .arg("-s")
        .arg(ORIGINAL_VERSION)
        .arg("-t")
        .arg(LATEST_VERSION)
        .arg("--trees")
        .arg(env.tree_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("single, refined"))
        .stdout(predicate::str::contains("unmappable"))
        .stdout(predicate::str::contains("MYCF,PTCL,TISSUE,TNKL_CHILD2"));
    Ok(())
}

#[test]
fn test_resolve_backward_json() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = ontomap_cmd()
        .arg("resolve")
        .arg("SS")
        .arg("--json")
        .arg("-s")
        .arg(LATEST_VERSION)
        .arg("-t")
        .arg(ORIGINAL_VERSION)
        .arg("--trees")
        .arg(env.tree_dir())
        .output()?;
    assert!(output.status.success());

    let resolutions: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(resolutions[0]["source_code"], "SS");
    assert_eq!(resolutions[0]["outcome"]["class"], "single_renamed");
    assert_eq!(resolutions[0]["candidates"][0], "SEZS");
    Ok(())
}

#[test]
fn test_resolve_passes_sentinel_through() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = ontomap_cmd()
        .arg("resolve")
        .arg("NA")
        .arg("--json")
        .arg("-s")
        .arg(ORIGINAL_VERSION)
        .arg("-t")
        .arg(LATEST_VERSION)
        .arg("--trees")
        .arg(env.tree_dir())
        .output()?;
    assert!(output.status.success());

    let resolutions: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(resolutions[0]["outcome"]["class"], "single_stable");
    assert_eq!(resolutions[0]["candidates"][0], "NA");
    Ok(())
}

#[test]
fn test_versions_lists_fixture_versions() -> Result<()> {
    let env = TestEnvironment::new()?;

    ontomap_cmd()
        .arg("versions")
        .arg("--trees")
        .arg(env.tree_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains(ORIGINAL_VERSION))
        .stdout(predicate::str::contains(format!("{} (latest)", LATEST_VERSION)));
    Ok(())
}
