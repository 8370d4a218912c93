use super::Viewer;
use crate::views::{SerialView, ViewItem};
use anyview_core::Node;
use anyview_types::{Result, Value};

/// Builds serializable projections of a node
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialViewer {
    pub depth: Option<u32>,
    pub use_ids: bool,
    pub skip_empty: bool,
}

impl SerialViewer {
    pub fn get_view(&self, node: &Node) -> SerialView {
        let mut view = SerialView::new(node.clone());
        if let Some(depth) = self.depth {
            view = view.with_depth(depth);
        }
        if self.use_ids {
            view = view.with_ids();
        }
        if self.skip_empty {
            view = view.skipping_empty();
        }
        view
    }

    pub fn view_of(&self, value: impl Into<Value>) -> SerialView {
        self.get_view(&Node::wrap(value))
    }
}

impl Viewer for SerialViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Text(self.get_view(node).yaml()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    #[test]
    fn test_options_reach_the_view() {
        let viewer = SerialViewer {
            depth: Some(1),
            use_ids: false,
            skip_empty: true,
        };
        let view = viewer.view_of(Value::Map(props!(
            "kept" => 1,
            "dropped" => Value::Null,
        )));
        let json = view.json().unwrap();
        assert_eq!(json, r#"{"kept":1}"#);
    }
}
