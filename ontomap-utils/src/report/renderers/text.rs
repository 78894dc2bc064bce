//! Plain text renderer for Report type

use crate::output::{create_standard_table, header_cell};
use crate::report::core::{CellStyle, Metric, MetricSeverity, Report, Section, SectionContent, Table};
use anyhow::Result;

/// Render a Report to plain text format
pub fn render_text(report: &Report) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.title));
    output.push_str(&format!("{}\n\n", "=".repeat(report.title.chars().count())));

    output.push_str(&format!("Command: {}\n", report.command));
    output.push_str(&format!(
        "Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    for (key, value) in &report.metadata {
        output.push_str(&format!("{}: {}\n", key, value));
    }
    output.push('\n');

    for section in &report.sections {
        render_section(&mut output, section);
    }

    Ok(output)
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("{}\n", section.title));
    output.push_str(&format!("{}\n", "-".repeat(section.title.chars().count())));
    if let Some(note) = &section.note {
        output.push_str(&format!("{}\n", note));
    }

    match &section.content {
        SectionContent::Metrics(metrics) => render_metrics(output, metrics),
        SectionContent::Table(table) => render_table(output, table),
    }

    output.push('\n');
}

fn render_metrics(output: &mut String, metrics: &[Metric]) {
    for metric in metrics {
        let indicator = match metric.severity {
            MetricSeverity::Success => "✓",
            MetricSeverity::Warning => "⚠",
            MetricSeverity::Error => "✗",
            MetricSeverity::Info => "ℹ",
            MetricSeverity::Normal => "●",
        };
        output.push_str(&format!("  {} {}: {}\n", indicator, metric.label, metric.value));
    }
}

fn render_table(output: &mut String, table: &Table) {
    if table.is_empty() {
        output.push_str("  (empty)\n");
        return;
    }

    let mut rendered = create_standard_table();
    rendered.set_header(table.headers.iter().map(|h| header_cell(h)));
    for row in &table.rows {
        rendered.add_row(row.iter().map(|cell| {
            let marker = match cell.style {
                CellStyle::Success => "✓ ",
                CellStyle::Warning => "⚠ ",
                CellStyle::Error => "✗ ",
                CellStyle::Highlight => "▶ ",
                CellStyle::Muted | CellStyle::Normal => "",
            };
            match &cell.link {
                Some(link) => format!("{}{}\n{}", marker, cell.value, link),
                None => format!("{}{}", marker, cell.value),
            }
        }));
    }
    output.push_str(&format!("{}\n", rendered));
}
