//! Core generic reporting framework
//!
//! Commands implement `Reportable` to turn their results into a `Report`,
//! which any renderer can then write out.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic report that any command can produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub command: String,
    pub timestamp: DateTime<Utc>,
    pub sections: Vec<Section>,
    /// Shown in insertion order
    pub metadata: Vec<(String, String)>,
}

impl Report {
    pub fn builder(title: impl Into<String>, command: impl Into<String>) -> ReportBuilder {
        ReportBuilder {
            title: title.into(),
            command: command.into(),
            timestamp: Utc::now(),
            sections: Vec::new(),
            metadata: Vec::new(),
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Builder for constructing reports
pub struct ReportBuilder {
    title: String,
    command: String,
    timestamp: DateTime<Utc>,
    sections: Vec<Section>,
    metadata: Vec<(String, String)>,
}

impl ReportBuilder {
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Report {
        Report {
            title: self.title,
            command: self.command,
            timestamp: self.timestamp,
            sections: self.sections,
            metadata: self.metadata,
        }
    }
}

/// A section of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Guidance printed under the title, e.g. what the reader has to do
    pub note: Option<String>,
    pub content: SectionContent,
}

impl Section {
    fn with_content(title: impl Into<String>, content: SectionContent) -> Self {
        Self {
            title: title.into(),
            note: None,
            content,
        }
    }

    pub fn summary(title: impl Into<String>, metrics: Vec<Metric>) -> Self {
        Self::with_content(title, SectionContent::Metrics(metrics))
    }

    pub fn table(title: impl Into<String>, table: Table) -> Self {
        Self::with_content(title, SectionContent::Table(table))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Content types for report sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SectionContent {
    Metrics(Vec<Metric>),
    Table(Table),
}

/// A labelled count or value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub severity: MetricSeverity,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            severity: MetricSeverity::Normal,
        }
    }

    pub fn with_severity(mut self, severity: MetricSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MetricSeverity {
    Normal,
    Success,
    Warning,
    Error,
    Info,
}

/// Table data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn with_row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table cell with optional styling and hyperlink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    pub style: CellStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Cell {
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            style: CellStyle::Normal,
            link: None,
        }
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CellStyle {
    Normal,
    Success,
    Warning,
    Error,
    Highlight,
    Muted,
}

/// Trait for types that can be converted to reports
pub trait Reportable {
    fn to_report(&self) -> Report;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_metadata_order() {
        let report = Report::builder("Mapping Summary", "translate")
            .metadata("Source", "v1")
            .metadata("Target", "v2")
            .section(Section::summary("Notes", vec![Metric::new("Records", 3)]).with_note("read me"))
            .build();

        assert_eq!(report.metadata[0].0, "Source");
        assert_eq!(report.metadata[1].0, "Target");
        assert_eq!(report.section("Notes").unwrap().note.as_deref(), Some("read me"));
        assert!(report.section("Missing").is_none());
    }

    #[test]
    fn test_cell_builders() {
        let cell = Cell::new("TISSUE")
            .with_style(CellStyle::Highlight)
            .with_link("http://example.org/?search=TISSUE");
        assert_eq!(cell.style, CellStyle::Highlight);
        assert!(cell.link.is_some());

        let plain = Cell::new("SS");
        let json = serde_json::to_string(&plain).unwrap();
        assert!(!json.contains("link"));
    }
}
