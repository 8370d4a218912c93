use super::one_line::OneLineViewer;
use super::Viewer;
use crate::views::{FormattedView, ViewItem};
use crate::visual::Tag;
use anyview_core::Node;
use anyview_types::{Result, Value};
use std::collections::HashSet;

pub const DEFAULT_TREE_DEPTH: u32 = 5;

const KEY_COLOR: &str = "gray";
const DELIMITER_COLOR: &str = "silver";
const CYCLE_MARKER: &str = "<cycle>";

/// Builds a nested-list view of a value: every node is a one-line summary
/// plus a list of its children, down to a depth limit.
///
/// Objects already seen during the walk render as a cycle placeholder, so
/// self-referential structures terminate.
#[derive(Debug, Clone, Copy)]
pub struct TreeViewer {
    pub depth: u32,
}

impl Default for TreeViewer {
    fn default() -> Self {
        TreeViewer {
            depth: DEFAULT_TREE_DEPTH,
        }
    }
}

impl TreeViewer {
    pub fn with_depth(depth: u32) -> Self {
        TreeViewer { depth }
    }

    pub fn get_view(&self, value: &Value) -> FormattedView {
        let mut visited = HashSet::new();
        self.build(value, self.depth, None, None, None, &mut visited)
    }

    fn build(
        &self,
        value: &Value,
        depth: u32,
        prefix: Option<FormattedView>,
        tag: Option<Tag>,
        ordered: Option<bool>,
        visited: &mut HashSet<usize>,
    ) -> FormattedView {
        let one_line = OneLineViewer.line_for(&Node::wrap(value.clone()));
        let mut head: Vec<ViewItem> = prefix.map(ViewItem::from).into_iter().collect();

        if let Value::Object(obj) = value {
            let identity = std::rc::Rc::as_ptr(obj) as *const () as usize;
            if !visited.insert(identity) {
                head.push(ViewItem::Text(format!("{} {}", one_line, CYCLE_MARKER)));
                return FormattedView::new(head, tag);
            }
        }
        head.push(ViewItem::Text(one_line));

        if depth > 0 {
            let children: Vec<ViewItem> = match value {
                Value::Map(map) => {
                    let entries: Vec<(String, Value)> =
                        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                    self.labeled_items(&entries, depth, visited)
                }
                Value::Seq(items) => {
                    let ordered = ordered.unwrap_or(true);
                    let item_tag = Tag::ListItem { ordered };
                    items
                        .iter()
                        .map(|item| {
                            self.build(
                                item,
                                depth - 1,
                                None,
                                Some(item_tag.clone()),
                                Some(ordered),
                                visited,
                            )
                            .into()
                        })
                        .collect()
                }
                other if other.is_primitive() => Vec::new(),
                other => {
                    let props = Node::wrap(other.clone()).props();
                    let entries: Vec<(String, Value)> =
                        props.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                    self.labeled_items(&entries, depth, visited)
                }
            };
            if !children.is_empty() {
                let ordered = ordered.unwrap_or(matches!(value, Value::Seq(_)));
                head.push(FormattedView::new(children, Some(Tag::List { ordered })).into());
            }
        }
        FormattedView::new(head, tag)
    }

    fn labeled_items(
        &self,
        entries: &[(String, Value)],
        depth: u32,
        visited: &mut HashSet<usize>,
    ) -> Vec<ViewItem> {
        entries
            .iter()
            .map(|(key, value)| {
                let prefix = FormattedView::new(
                    vec![
                        FormattedView::tagged(key.clone(), Tag::font_color(KEY_COLOR)).into(),
                        FormattedView::tagged(": ", Tag::font_color(DELIMITER_COLOR)).into(),
                    ],
                    None,
                );
                self.build(
                    value,
                    depth - 1,
                    Some(prefix),
                    Some(Tag::ListItem { ordered: false }),
                    None,
                    visited,
                )
                .into()
            })
            .collect()
    }
}

impl Viewer for TreeViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Formatted(self.get_view(node.raw())))
    }
}
