//! CSV renderer for Report type
use crate::report::core::{Report, Section, SectionContent, Table};
use anyhow::Result;

/// Render a Report to CSV format
///
/// Each section becomes its own block headed by a `#` comment line. Tables
/// keep their columns, links get an extra column, metrics and key-value
/// lists become two-column tables and text is written as comments.
pub fn render_csv(report: &Report) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("# {}\n", report.title));
    output.push_str(&format!("# Command: {}\n", report.command));
    output.push_str(&format!(
        "# Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    for (key, value) in &report.metadata {
        output.push_str(&format!("# {}: {}\n", key, value));
    }
    output.push('\n');

    for section in &report.sections {
        render_section(&mut output, section);
    }

    Ok(output)
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("# {}\n", section.title));
    if let Some(note) = &section.note {
        output.push_str(&format!("# {}\n", note));
    }

    match &section.content {
        SectionContent::Metrics(metrics) => {
            output.push_str("Metric,Value\n");
            for metric in metrics {
                output.push_str(&format!("{},{}\n", quote(&metric.label), quote(&metric.value)));
            }
        }
        SectionContent::Table(table) => render_table(output, table),
    }

    output.push('\n');
}

fn render_table(output: &mut String, table: &Table) {
    let has_links = table.rows.iter().flatten().any(|cell| cell.link.is_some());

    let mut headers: Vec<String> = table.headers.iter().map(|h| quote(h)).collect();
    if has_links {
        headers.push(quote("Link"));
    }
    output.push_str(&headers.join(","));
    output.push('\n');

    for row in &table.rows {
        let mut cells: Vec<String> = row.iter().map(|cell| quote(&cell.value)).collect();
        if has_links {
            let link = row.iter().find_map(|cell| cell.link.as_deref()).unwrap_or("");
            cells.push(quote(link));
        }
        output.push_str(&cells.join(","));
        output.push('\n');
    }
}

/// Quote a field, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::core::{Cell, Metric};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_with_links_gets_link_column() {
        let table = Table::new(vec!["Original Code".into(), "Closest Shared Parent".into()])
            .with_row(vec![
                Cell::new("URMM"),
                Cell::new("TISSUE").with_link("http://x/?search_term=(TISSUE)"),
            ]);
        let report = Report::builder("Mapping Summary", "translate")
            .section(Section::table("Unmappable", table))
            .build();
        let csv = render_csv(&report).unwrap();
        let block: Vec<&str> = csv
            .lines()
            .skip_while(|l| *l != "# Unmappable")
            .skip(1)
            .take(2)
            .collect();
        assert_eq!(
            block,
            vec![
                r#""Original Code","Closest Shared Parent","Link""#,
                r#""URMM","TISSUE","http://x/?search_term=(TISSUE)""#,
            ]
        );
    }

    #[test]
    fn test_metrics_and_quotes() {
        let report = Report::builder("R", "c")
            .section(Section::summary("Counts", vec![Metric::new("say \"hi\"", 3)]))
            .build();
        let csv = render_csv(&report).unwrap();
        assert!(csv.contains("Metric,Value\n\"say \"\"hi\"\"\",\"3\"\n"));
    }
}
