use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::ListingKind;
use crate::models::TableData;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }
th { background: #f0f0f0; }
tr:nth-child(even) { background: #fafafa; }
";

/// Escape a string for HTML text content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Render rows as an HTML table, in the given row order. The URL column is
/// folded into an anchor on the name cell instead of being shown as text.
pub fn render_table(data: &TableData, order: &[usize]) -> String {
    let cols = data.display_columns();
    let mut out = String::new();

    out.push_str("<table>\n<thead>\n<tr>");
    for &col in &cols {
        out.push_str(&format!("<th>{}</th>", escape_text(&data.columns[col])));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for &row in order {
        out.push_str("<tr>");
        for &col in &cols {
            let cell = escape_text(data.cell(row, col));
            let linked = if Some(col) == data.name_col {
                data.link_for(row)
            } else {
                None
            };
            match linked {
                Some(url) => out.push_str(&format!(
                    "<td><a href=\"{}\">{}</a></td>",
                    escape_attr(url),
                    cell
                )),
                None => out.push_str(&format!("<td>{}</td>", cell)),
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

/// Wrap `render_table` in a standalone page.
pub fn render_document(data: &TableData, order: &[usize]) -> String {
    let title = escape_text(&data.title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{table}</body>\n</html>\n",
        table = render_table(data, order),
    )
}

/// Write a rendered page into `dir` under the listing's export name.
pub fn write_html(dir: &Path, kind: ListingKind, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(kind.export_file_name());
    fs::write(&path, html)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableData {
        TableData {
            title: "Tours".to_string(),
            columns: vec![
                "Tour Name".to_string(),
                "Artist".to_string(),
                "Source URL".to_string(),
            ],
            rows: vec![
                vec![
                    "Neon <Nights>".to_string(),
                    "Dust & Echo".to_string(),
                    "https://example.com/?a=1&b=2".to_string(),
                ],
                vec![
                    "Acoustic Run".to_string(),
                    "Mara Lin".to_string(),
                    String::new(),
                ],
            ],
            ranges: vec![Default::default(), Default::default()],
            date_col: None,
            name_col: Some(0),
            url_col: Some(2),
        }
    }

    #[test]
    fn text_escaping_covers_markup_characters() {
        assert_eq!(escape_text("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_text("plain \"quotes\""), "plain \"quotes\"");
    }

    #[test]
    fn attr_escaping_also_covers_quotes() {
        assert_eq!(escape_attr("say \"hi\" & <go>"), "say &quot;hi&quot; &amp; &lt;go&gt;");
    }

    #[test]
    fn cell_markup_is_rendered_inert() {
        let html = render_table(&sample(), &[0, 1]);
        assert!(html.contains("Neon &lt;Nights&gt;"));
        assert!(html.contains("Dust &amp; Echo"));
        assert!(!html.contains("<Nights>"));
    }

    #[test]
    fn name_cell_links_when_url_present() {
        let html = render_table(&sample(), &[0, 1]);
        assert!(html.contains("<a href=\"https://example.com/?a=1&amp;b=2\">Neon &lt;Nights&gt;</a>"));
        // The second row has no URL, so exactly one anchor is emitted.
        assert_eq!(html.matches("<a href=").count(), 1);
        assert!(html.contains("<td>Acoustic Run</td>"));
    }

    #[test]
    fn url_column_is_not_rendered_as_a_column() {
        let html = render_table(&sample(), &[0, 1]);
        assert!(!html.contains("<th>Source URL</th>"));
        assert!(!html.contains("<td>https://"));
    }

    #[test]
    fn row_and_cell_counts_match_the_input() {
        let html = render_table(&sample(), &[0, 1]);
        // One header row plus one body row per record, two displayed cells
        // each; the suppressed URL column contributes nothing.
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 4);
    }

    #[test]
    fn order_controls_both_subset_and_sequence() {
        let filtered = render_table(&sample(), &[1]);
        assert!(filtered.contains("Acoustic Run"));
        assert!(!filtered.contains("Neon"));

        let reversed = render_table(&sample(), &[1, 0]);
        let acoustic = reversed.find("Acoustic Run").unwrap();
        let neon = reversed.find("Neon").unwrap();
        assert!(acoustic < neon);
    }

    #[test]
    fn document_wraps_table_with_title() {
        let html = render_document(&sample(), &[0]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tours</title>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn write_html_places_file_under_export_name() {
        let dir = tempfile::tempdir().unwrap();
        let html = render_document(&sample(), &[0, 1]);
        let path = write_html(dir.path(), ListingKind::Tours, &html).unwrap();
        assert!(path.ends_with("tours.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), html);
    }
}
