//! Tab-delimited clinical record files
//!
//! Lines starting with `#` and blank lines are metadata and are written back
//! untouched, in place. The first other line is the header. When translated
//! codes are written out, an options column is inserted right after the code
//! column; metadata lines above the header that are tab-delimited across the
//! code column get an empty field there so their columns stay aligned.

use ontomap_core::{OntomapError, OntomapResult};
use std::path::Path;
use tracing::debug;

const METADATA_PREFIX: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Metadata(String),
    Record(Vec<String>),
}

/// A parsed record file
#[derive(Debug, Clone)]
pub struct RecordFile {
    /// Metadata lines preceding the header
    preamble: Vec<String>,
    header: Vec<String>,
    /// Records and any metadata lines interleaved with them
    body: Vec<Line>,
    code_index: usize,
}

/// Replacement values for one record's code column and options column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeUpdate {
    pub code: String,
    pub options: String,
}

impl CodeUpdate {
    pub fn new(code: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            options: options.into(),
        }
    }
}

fn is_metadata(line: &str) -> bool {
    line.starts_with(METADATA_PREFIX) || line.trim_end().is_empty()
}

impl RecordFile {
    pub fn read<P: AsRef<Path>>(path: P, code_column: &str) -> OntomapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("Read {} bytes of records from {}", content.len(), path.display());
        Self::parse(&content, code_column)
    }

    pub fn parse(content: &str, code_column: &str) -> OntomapResult<Self> {
        if content.contains('\r') {
            return Err(OntomapError::Parse(
                "Record file must be tab delimited with newline line breaks; carriage return characters encountered"
                    .to_string(),
            ));
        }

        let mut preamble = Vec::new();
        let mut header: Option<Vec<String>> = None;
        let mut body = Vec::new();

        for (line_number, line) in content.lines().enumerate() {
            if is_metadata(line) {
                if header.is_none() {
                    preamble.push(line.to_string());
                } else {
                    body.push(Line::Metadata(line.to_string()));
                }
                continue;
            }

            let fields: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
            match &header {
                None => header = Some(fields),
                Some(columns) => {
                    if fields.len() != columns.len() {
                        return Err(OntomapError::Parse(format!(
                            "Line {} has {} columns but the header has {}: {}",
                            line_number + 1,
                            fields.len(),
                            columns.len(),
                            line
                        )));
                    }
                    body.push(Line::Record(fields));
                }
            }
        }

        let header = header
            .ok_or_else(|| OntomapError::Parse("Record file has no header line".to_string()))?;
        let code_index = header
            .iter()
            .position(|column| column == code_column)
            .ok_or_else(|| {
                OntomapError::Parse(format!("Record file is missing column '{}'", code_column))
            })?;

        Ok(Self {
            preamble,
            header,
            body,
            code_index,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn code_index(&self) -> usize {
        self.code_index
    }

    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        self.body.iter().filter_map(|line| match line {
            Line::Record(fields) => Some(fields.as_slice()),
            Line::Metadata(_) => None,
        })
    }

    /// Code column values in record order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records().map(move |fields| fields[self.code_index].as_str())
    }

    pub fn len(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the file with each record's code replaced and an options column
    /// named `options_column` inserted after the code column. The column is
    /// left out entirely when no update carries options.
    pub fn render_with_options(
        &self,
        updates: &[CodeUpdate],
        options_column: &str,
    ) -> OntomapResult<String> {
        let record_count = self.len();
        if updates.len() != record_count {
            return Err(OntomapError::InvalidInput(format!(
                "Got {} translated codes for {} records",
                updates.len(),
                record_count
            )));
        }

        let with_options = updates.iter().any(|u| !u.options.is_empty());
        let options_index = self.code_index + 1;
        let mut output = String::new();

        for line in &self.preamble {
            if with_options {
                output.push_str(&insert_field(line, options_index, ""));
            } else {
                output.push_str(line);
            }
            output.push('\n');
        }

        let mut header = self.header.clone();
        if with_options {
            header.insert(options_index, options_column.to_string());
        }
        output.push_str(&header.join("\t"));
        output.push('\n');

        let mut updates = updates.iter();
        for line in &self.body {
            match line {
                Line::Metadata(text) => output.push_str(text),
                Line::Record(fields) => {
                    // counts were checked above
                    let Some(update) = updates.next() else { break };
                    let mut fields = fields.clone();
                    fields[self.code_index] = update.code.clone();
                    if with_options {
                        fields.insert(options_index, update.options.clone());
                    }
                    output.push_str(&fields.join("\t"));
                }
            }
            output.push('\n');
        }

        Ok(output)
    }

    pub fn write_with_options<P: AsRef<Path>>(
        &self,
        path: P,
        updates: &[CodeUpdate],
        options_column: &str,
    ) -> OntomapResult<()> {
        let content = self.render_with_options(updates, options_column)?;
        std::fs::write(path.as_ref(), content)?;
        debug!("Wrote {} records to {}", updates.len(), path.as_ref().display());
        Ok(())
    }
}

/// Insert `value` at `index` of a tab-delimited line. Lines too short to
/// reach the code column (free-text comments, blank lines) are returned as is.
fn insert_field(line: &str, index: usize, value: &str) -> String {
    let mut fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < index {
        return line.to_string();
    }
    fields.insert(index, value);
    fields.join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "#Patient\tSample\tCode\n#desc\tdesc\tdesc\n\nPATIENT_ID\tSAMPLE_ID\tONCOTREE_CODE\nP1\tS1\tDALL\nP2\tS2\t ALL \n";

    fn parse(content: &str) -> OntomapResult<RecordFile> {
        RecordFile::parse(content, "ONCOTREE_CODE")
    }

    #[test]
    fn test_parse_sample() {
        let file = parse(SAMPLE).unwrap();
        assert_eq!(file.preamble().len(), 3);
        assert_eq!(file.header(), &["PATIENT_ID", "SAMPLE_ID", "ONCOTREE_CODE"]);
        assert_eq!(file.code_index(), 2);
        assert_eq!(file.codes().collect::<Vec<_>>(), vec!["DALL", "ALL"]);
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn test_missing_code_column() {
        let err = parse("PATIENT_ID\tCODE\nP1\tX\n").unwrap_err();
        assert!(matches!(err, OntomapError::Parse(msg) if msg.contains("ONCOTREE_CODE")));
    }

    #[test]
    fn test_carriage_return_rejected() {
        let err = parse("PATIENT_ID\tONCOTREE_CODE\r\nP1\tX\r\n").unwrap_err();
        assert!(matches!(err, OntomapError::Parse(msg) if msg.contains("carriage return")));
    }

    #[test]
    fn test_column_count_mismatch() {
        let err = parse("PATIENT_ID\tONCOTREE_CODE\nP1\tX\textra\n").unwrap_err();
        assert!(matches!(err, OntomapError::Parse(msg) if msg.starts_with("Line 2")));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        assert!(matches!(parse("#only metadata\n"), Err(OntomapError::Parse(_))));
    }

    #[test]
    fn test_render_inserts_options_column() {
        let file = parse(SAMPLE).unwrap();
        let updates = vec![CodeUpdate::new("DALL", ""), CodeUpdate::new("", "BLL,TLL")];
        let out = file.render_with_options(&updates, "ONCOTREE_CODE_OPTIONS").unwrap();
        assert_eq!(
            out,
            "#Patient\tSample\tCode\t\n#desc\tdesc\tdesc\t\n\n\
             PATIENT_ID\tSAMPLE_ID\tONCOTREE_CODE\tONCOTREE_CODE_OPTIONS\n\
             P1\tS1\tDALL\t\nP2\tS2\t\tBLL,TLL\n"
        );
    }

    #[test]
    fn test_render_drops_options_when_all_resolved() {
        let file = parse(SAMPLE).unwrap();
        let updates = vec![CodeUpdate::new("DALL", ""), CodeUpdate::new("BLL", "")];
        let out = file.render_with_options(&updates, "ONCOTREE_CODE_OPTIONS").unwrap();
        assert_eq!(
            out,
            "#Patient\tSample\tCode\n#desc\tdesc\tdesc\n\n\
             PATIENT_ID\tSAMPLE_ID\tONCOTREE_CODE\nP1\tS1\tDALL\nP2\tS2\tBLL\n"
        );
    }

    #[test]
    fn test_short_metadata_line_untouched() {
        let content = "#free text comment\nA\tB\tONCOTREE_CODE\tD\nx\ty\tSS\tz\n";
        let file = parse(content).unwrap();
        let out = file
            .render_with_options(&[CodeUpdate::new("", "SS")], "OPTS")
            .unwrap();
        assert_eq!(out, "#free text comment\nA\tB\tONCOTREE_CODE\tOPTS\tD\nx\ty\t\tSS\tz\n");
    }

    #[test]
    fn test_interleaved_metadata_kept_in_place() {
        let content = "ONCOTREE_CODE\nSS\n# note\nMYCF\n";
        let file = parse(content).unwrap();
        assert_eq!(file.len(), 2);
        let out = file
            .render_with_options(&[CodeUpdate::new("SS", ""), CodeUpdate::new("MYCF", "")], "OPTS")
            .unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn test_update_count_mismatch() {
        let file = parse(SAMPLE).unwrap();
        let err = file.render_with_options(&[CodeUpdate::default()], "OPTS").unwrap_err();
        assert!(matches!(err, OntomapError::InvalidInput(_)));
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let file = parse("ONCOTREE_CODE\nSEZS\n").unwrap();
        file.write_with_options(&path, &[CodeUpdate::new("", "SS")], "ONCOTREE_CODE_OPTIONS")
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "ONCOTREE_CODE\tONCOTREE_CODE_OPTIONS\n\tSS\n");
    }
}
