use super::one_line::OneLineViewer;
use super::Viewer;
use crate::views::{TextView, ViewItem};
use anyview_core::{crop, Node};
use anyview_types::{Result, Value};

/// Indented multi-line dump: one line per property with a count hint,
/// recursing into nested properties up to a depth limit
#[derive(Debug, Clone)]
pub struct SimpleTextViewer {
    pub depth: u32,
    pub indent: String,
    pub max_line_len: usize,
}

impl Default for SimpleTextViewer {
    fn default() -> Self {
        SimpleTextViewer {
            depth: 1,
            indent: "  ".to_string(),
            max_line_len: 80,
        }
    }
}

impl SimpleTextViewer {
    pub fn get_view(&self, value: &Value) -> TextView {
        TextView::new(self.lines(value, self.depth))
    }

    pub fn lines(&self, value: &Value, depth: u32) -> Vec<String> {
        let one_line = OneLineViewer;
        match value {
            Value::Map(map) => map
                .iter()
                .map(|(key, item)| {
                    if item.len() == Some(0) {
                        format!("{} (0)", key)
                    } else {
                        format!("{} ({}): {}", key, item.hint(), one_line.line(item))
                    }
                })
                .collect(),
            Value::Seq(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| format!("{}: {}", index, one_line.line(item)))
                .collect(),
            other => {
                let mut lines = vec![self.title(other)];
                if depth > 0 {
                    let props = Node::wrap(other.clone()).props();
                    for line in self.lines(&Value::Map(props), depth - 1) {
                        lines.push(crop(&format!("{}{}", self.indent, line), self.max_line_len));
                    }
                }
                lines
            }
        }
    }

    /// `<type> <repr>` heading for a structured value
    pub fn title(&self, value: &Value) -> String {
        format!("{} {}", value.type_name(), value.repr())
    }
}

impl Viewer for SimpleTextViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Text(self.lines(node.raw(), self.depth).join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    #[test]
    fn test_mapping_lines_carry_hints() {
        let viewer = SimpleTextViewer::default();
        let value = Value::Map(props!(
            "name" => "ada",
            "tags" => Value::Seq(vec![Value::from("x"), Value::from("y")]),
            "empty" => Value::Seq(Vec::new()),
        ));
        let lines = viewer.lines(&value, 1);
        assert_eq!(lines[0], "name (string): ada");
        assert_eq!(lines[1], "tags (2): \"x\", \"y\"");
        assert_eq!(lines[2], "empty (0)");
    }

    #[test]
    fn test_sequence_lines_are_indexed() {
        let viewer = SimpleTextViewer::default();
        let value = Value::Seq(vec![Value::from(10), Value::from(20)]);
        assert_eq!(viewer.lines(&value, 1), ["0: 10", "1: 20"]);
    }

    #[test]
    fn test_long_lines_are_cropped() {
        let viewer = SimpleTextViewer {
            max_line_len: 20,
            ..SimpleTextViewer::default()
        };
        let value = Value::from(format!("x{}", "y".repeat(50)));
        let lines = viewer.lines(&value, 1);
        assert!(lines[1].len() <= 20);
        assert!(lines[1].ends_with("..."));
    }
}
