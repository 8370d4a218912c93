use super::Viewer;
use crate::views::{TextView, ViewItem};
use anyview_core::Node;
use anyview_types::{Result, Value};

/// Renders any value as a single descriptive line
#[derive(Debug, Clone, Copy, Default)]
pub struct OneLineViewer;

impl OneLineViewer {
    pub fn line(&self, value: &Value) -> String {
        match value {
            Value::Str(s) => s.clone(),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => value.to_string(),
            Value::Map(map) => {
                let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                pairs.join(", ")
            }
            Value::Seq(items) => {
                let reprs: Vec<String> = items.iter().map(|item| item.repr()).collect();
                reprs.join(", ")
            }
            Value::Object(_) => value.repr(),
        }
    }

    /// One line for a node, unwrapping its own data first
    pub fn line_for(&self, node: &Node) -> String {
        self.line(&node.data())
    }

    pub fn get_view(&self, value: &Value) -> TextView {
        TextView::one_line(self.line(value))
    }
}

impl Viewer for OneLineViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Text(self.line_for(node)))
    }
}
