use super::one_line::OneLineViewer;
use super::tree::TreeViewer;
use super::Viewer;
use crate::views::{TableView, ViewItem};
use anyview_core::Node;
use anyview_types::{Result, Value};

/// Fixed column set used when a mapping is rendered as a table
const MAPPING_COLUMNS: [&str; 3] = ["field", "hint", "value"];

/// Renders a sequence of records as a table (columns unioned across all
/// elements in first-seen order), a mapping as a fixed three-column
/// field/hint/value table, and anything else via its property mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableViewer {
    /// Render cells as shallow trees instead of one-liners
    pub deep: bool,
}

impl TableViewer {
    pub fn get_view(&self, value: &Value) -> TableView {
        match value {
            Value::Seq(items) => self.records_table(items),
            Value::Map(map) => {
                let rows = map
                    .iter()
                    .map(|(field, item)| {
                        vec![
                            Some(ViewItem::Text(field.clone())),
                            Some(ViewItem::Text(field_hint(item))),
                            Some(self.cell(item)),
                        ]
                    })
                    .collect();
                let columns = MAPPING_COLUMNS.iter().map(|c| c.to_string()).collect();
                TableView::new(rows, Some(columns))
            }
            other => {
                let props = Node::wrap(other.clone()).props();
                self.get_view(&Value::Map(props))
            }
        }
    }

    fn records_table(&self, items: &[Value]) -> TableView {
        let records: Vec<Vec<(String, ViewItem)>> = items
            .iter()
            .map(|item| {
                Node::wrap(item.clone())
                    .props()
                    .iter()
                    .map(|(key, value)| (key.clone(), self.cell(value)))
                    .collect()
            })
            .collect();

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (key, _) in record {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .iter()
                            .find(|(key, _)| key == column)
                            .map(|(_, cell)| cell.clone())
                    })
                    .collect()
            })
            .collect();
        TableView::new(rows, Some(columns))
    }

    fn cell(&self, value: &Value) -> ViewItem {
        if self.deep {
            ViewItem::Formatted(TreeViewer::with_depth(1).get_view(value))
        } else {
            ViewItem::Text(OneLineViewer.line(value))
        }
    }
}

/// Shape hint shown in the middle column of a mapping table
fn field_hint(value: &Value) -> String {
    match value {
        Value::Map(map) => format!("({}x2)", map.len()),
        other => match other.len() {
            Some(len) => format!("({})", len),
            None => other.type_name(),
        },
    }
}

impl Viewer for TableViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Table(self.get_view(node.raw())))
    }
}
