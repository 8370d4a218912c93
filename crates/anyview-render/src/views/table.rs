use super::formatted::ViewItem;

/// Marker substituted for missing cells
const EMPTY_CELL: &str = "-";

/// Rows of optional cells plus an optional ordered column-name list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    rows: Vec<Vec<Option<ViewItem>>>,
    columns: Option<Vec<String>>,
}

impl TableView {
    pub fn new(rows: Vec<Vec<Option<ViewItem>>>, columns: Option<Vec<String>>) -> Self {
        TableView { rows, columns }
    }

    pub fn rows(&self) -> &[Vec<Option<ViewItem>>] {
        &self.rows
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn has_struct(&self) -> bool {
        self.columns.as_ref().is_some_and(|c| !c.is_empty())
    }

    fn cell_text(cell: &Option<ViewItem>) -> String {
        match cell {
            Some(item) => item.text().replace('\n', " "),
            None => EMPTY_CELL.to_string(),
        }
    }

    /// Tab-separated text, header first when columns are known
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(columns) = &self.columns {
            lines.push(columns.join("\t"));
        }
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(Self::cell_text).collect();
            lines.push(cells.join("\t"));
        }
        lines
    }

    pub fn text(&self) -> String {
        self.text_lines().join("\n")
    }

    /// Markdown pipe table with a `---` separator row under the header
    pub fn md_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(columns) = &self.columns {
            lines.push(format!("| {} |", columns.join(" | ")));
            let separator: Vec<&str> = columns.iter().map(|_| "---").collect();
            lines.push(format!("| {} |", separator.join(" | ")));
        }
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(Self::cell_text).collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        lines
    }

    pub fn md(&self) -> String {
        self.md_lines().join("\n")
    }

    pub fn html_lines(&self) -> Vec<String> {
        let mut lines = vec!["<table>".to_string()];
        if let Some(columns) = &self.columns {
            lines.push("<thead>".to_string());
            lines.push("<tr>".to_string());
            for column in columns {
                lines.push(format!("<td style=\"text-align: left;\">{}</td>", column));
            }
            lines.push("</tr>".to_string());
            lines.push("</thead>".to_string());
        }
        lines.push("<tbody>".to_string());
        for row in &self.rows {
            lines.push("<tr>".to_string());
            for cell in row {
                let content = match cell {
                    Some(item) => item.html_inline(),
                    None => EMPTY_CELL.to_string(),
                };
                lines.push(format!("<td style=\"text-align: left;\">{}</td>", content));
            }
            lines.push("</tr>".to_string());
        }
        lines.push("</tbody>".to_string());
        lines.push("</table>".to_string());
        lines
    }

    pub fn html(&self) -> String {
        self.html_lines().join("\n")
    }
}

impl std::fmt::Display for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableView {
        TableView::new(
            vec![
                vec![Some(ViewItem::from("ada")), Some(ViewItem::from("36"))],
                vec![Some(ViewItem::from("bob")), None],
            ],
            Some(vec!["name".to_string(), "age".to_string()]),
        )
    }

    #[test]
    fn test_md_table() {
        assert_eq!(
            sample().md_lines(),
            [
                "| name | age |",
                "| --- | --- |",
                "| ada | 36 |",
                "| bob | - |",
            ]
        );
    }

    #[test]
    fn test_text_table() {
        assert_eq!(sample().text_lines(), ["name\tage", "ada\t36", "bob\t-"]);
    }

    #[test]
    fn test_html_table_sections() {
        let html = sample().html();
        assert!(html.starts_with("<table>"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains("<td style=\"text-align: left;\">ada</td>"));
        assert!(html.ends_with("</table>"));
    }
}
