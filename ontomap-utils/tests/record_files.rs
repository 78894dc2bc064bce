//! Record file handling against the shared fixture files

use ontomap_core::config::RecordsConfig;
use ontomap_test::fixtures::{easily_resolved_records, sample_records};
use ontomap_test::{assert_header, TreeDir};
use ontomap_utils::{CodeUpdate, RecordFile};
use pretty_assertions::assert_eq;

#[test]
fn sample_records_parse_with_metadata() {
    let config = RecordsConfig::default();
    let file = RecordFile::parse(&sample_records(), &config.code_column).unwrap();

    assert_eq!(file.preamble().len(), 2);
    assert_eq!(file.len(), 7);
    assert_eq!(
        file.codes().collect::<Vec<_>>(),
        vec!["DALL", "ALL", "SEZS", "TNKL", "NA", "NOT_A_CODE", "DALL"]
    );
}

#[test]
fn options_column_follows_code_column() {
    let config = RecordsConfig::default();
    let file = RecordFile::parse(&sample_records(), &config.code_column).unwrap();
    let updates: Vec<CodeUpdate> = file
        .codes()
        .map(|code| match code {
            "ALL" => CodeUpdate::new("", "{BLL,DLL,TLL}"),
            other => CodeUpdate::new(other, ""),
        })
        .collect();

    let out = file.render_with_options(&updates, &config.options_column()).unwrap();
    assert_header(
        &out,
        &["PATIENT_ID", "SAMPLE_ID", "CANCER_TYPE", "ONCOTREE_CODE", "ONCOTREE_CODE_OPTIONS"],
    );
    assert!(out.starts_with("#Patient Identifier\tSample Identifier\tCancer Type\tOncotree Code\t\n"));
    assert!(out.contains("P2\tS2\tLeukemia\t\t{BLL,DLL,TLL}\n"));
}

#[test]
fn easily_resolved_file_round_trips_from_disk() {
    let dir = TreeDir::new().unwrap();
    let input = dir.write_file("input.txt", &easily_resolved_records()).unwrap();
    let output = dir.path().join("output.txt");

    let config = RecordsConfig::default();
    let file = RecordFile::read(&input, &config.code_column).unwrap();
    let updates: Vec<CodeUpdate> = file.codes().map(|c| CodeUpdate::new(c, "")).collect();
    file.write_with_options(&output, &updates, &config.options_column()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, easily_resolved_records());
}
