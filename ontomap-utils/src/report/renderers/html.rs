//! HTML renderer for Report type
use crate::report::core::{Cell, CellStyle, Metric, MetricSeverity, Report, Section, SectionContent, Table};
use anyhow::Result;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            background-color: white;
            border-radius: 8px;
            padding: 30px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
        }
        h2 {
            color: #34495e;
            margin-top: 30px;
            border-left: 4px solid #3498db;
            padding-left: 10px;
        }
        .metadata {
            background-color: #ecf0f1;
            border-radius: 4px;
            padding: 15px;
            margin-bottom: 20px;
        }
        .metadata-label {
            font-weight: bold;
            color: #7f8c8d;
        }
        .note {
            color: #7f8c8d;
            font-style: italic;
        }
        .metrics {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .metric {
            background-color: #f8f9fa;
            border-radius: 6px;
            padding: 15px;
            border-left: 4px solid #95a5a6;
        }
        .metric.success { border-left-color: #27ae60; }
        .metric.warning { border-left-color: #f39c12; }
        .metric.error { border-left-color: #e74c3c; }
        .metric.info { border-left-color: #3498db; }
        .metric-label {
            font-size: 0.9em;
            color: #7f8c8d;
        }
        .metric-value {
            font-size: 1.5em;
            font-weight: bold;
            color: #2c3e50;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 15px 0;
        }
        th {
            background-color: #34495e;
            color: white;
            padding: 10px;
            text-align: left;
        }
        td {
            padding: 8px 10px;
            border-bottom: 1px solid #ecf0f1;
        }
        .cell-success { color: #27ae60; font-weight: 500; }
        .cell-warning { color: #f39c12; font-weight: 500; }
        .cell-error { color: #e74c3c; font-weight: 500; }
        .cell-highlight { background-color: #fff3cd; font-weight: 500; }
        .cell-muted { color: #95a5a6; font-style: italic; }
        .timestamp {
            color: #7f8c8d;
            font-size: 0.9em;
            margin-top: 20px;
            text-align: right;
        }
"#;

/// Render a Report to a standalone HTML page
pub fn render_html(report: &Report) -> Result<String> {
    let title = escape_html(&report.title);
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>{}</title>\n    <style>{}    </style>\n</head>\n<body>\n    <div class=\"container\">\n        <h1>{}</h1>\n",
        title, STYLE, title
    );

    html.push_str("<div class=\"metadata\">\n");
    html.push_str(&format!(
        "<div><span class=\"metadata-label\">Command:</span> {}</div>\n",
        escape_html(&report.command)
    ));
    for (key, value) in &report.metadata {
        html.push_str(&format!(
            "<div><span class=\"metadata-label\">{}:</span> {}</div>\n",
            escape_html(key),
            escape_html(value)
        ));
    }
    html.push_str("</div>\n");

    if report.sections.len() > 1 {
        html.push_str("<h3>Contents</h3>\n<ul>\n");
        for (i, section) in report.sections.iter().enumerate() {
            html.push_str(&format!(
                "  <li><a href=\"#section-{}\">{}</a></li>\n",
                i,
                escape_html(&section.title)
            ));
        }
        html.push_str("</ul>\n");
    }

    for (i, section) in report.sections.iter().enumerate() {
        render_section(&mut html, i, section);
    }

    html.push_str(&format!(
        "<div class=\"timestamp\">Generated: {}</div>\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("    </div>\n</body>\n</html>\n");

    Ok(html)
}

fn render_section(html: &mut String, index: usize, section: &Section) {
    html.push_str(&format!(
        "<h2 id=\"section-{}\">{}</h2>\n",
        index,
        escape_html(&section.title)
    ));
    if let Some(note) = &section.note {
        html.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
    }

    match &section.content {
        SectionContent::Metrics(metrics) => render_metrics(html, metrics),
        SectionContent::Table(table) => render_table(html, table),
    }
}

fn render_metrics(html: &mut String, metrics: &[Metric]) {
    html.push_str("<div class=\"metrics\">\n");
    for metric in metrics {
        let severity_class = match metric.severity {
            MetricSeverity::Success => "success",
            MetricSeverity::Warning => "warning",
            MetricSeverity::Error => "error",
            MetricSeverity::Info => "info",
            MetricSeverity::Normal => "",
        };
        html.push_str(&format!("<div class=\"metric {}\">\n", severity_class));
        html.push_str(&format!(
            "  <div class=\"metric-label\">{}</div>\n",
            escape_html(&metric.label)
        ));
        html.push_str(&format!(
            "  <div class=\"metric-value\">{}</div>\n",
            escape_html(&metric.value)
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}

fn render_table(html: &mut String, table: &Table) {
    if table.is_empty() {
        html.push_str("<p class=\"note\">(none)</p>\n");
        return;
    }

    html.push_str("<table>\n  <thead>\n    <tr>\n");
    for header in &table.headers {
        html.push_str(&format!("      <th>{}</th>\n", escape_html(header)));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in &table.rows {
        html.push_str("    <tr>\n");
        for cell in row {
            render_cell(html, cell);
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
}

fn render_cell(html: &mut String, cell: &Cell) {
    let class = match cell.style {
        CellStyle::Success => " class=\"cell-success\"",
        CellStyle::Warning => " class=\"cell-warning\"",
        CellStyle::Error => " class=\"cell-error\"",
        CellStyle::Highlight => " class=\"cell-highlight\"",
        CellStyle::Muted => " class=\"cell-muted\"",
        CellStyle::Normal => "",
    };
    let value = escape_html(&cell.value);
    let content = match &cell.link {
        Some(link) => format!("<a href=\"{}\">{}</a>", escape_html(link), value),
        None => value,
    };
    html.push_str(&format!("      <td{}>{}</td>\n", class, content));
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::core::Metric;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<blank> & \"NA\""), "&lt;blank&gt; &amp; &quot;NA&quot;");
    }

    #[test]
    fn test_render_html_page() {
        let table = Table::new(vec!["Original Code".into(), "Closest Shared Parent".into()])
            .with_row(vec![
                Cell::new("URMM"),
                Cell::new("TISSUE").with_link("http://x/#/home?version=v2&search_term=(TISSUE)"),
            ]);
        let report = Report::builder("Mapping Summary", "translate")
            .metadata("Target version", "v2")
            .section(Section::summary("Outcomes", vec![Metric::new("Unmappable", 1)]))
            .section(Section::table("Unmappable", table).with_note("action required"))
            .build();

        let html = render_html(&report).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Mapping Summary</h1>"));
        assert!(html.contains("<a href=\"#section-1\">Unmappable</a>"));
        assert!(html.contains(
            "<a href=\"http://x/#/home?version=v2&amp;search_term=(TISSUE)\">TISSUE</a>"
        ));
        assert!(html.contains("<p class=\"note\">action required</p>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
