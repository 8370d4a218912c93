use super::one_line::OneLineViewer;
use super::Viewer;
use crate::views::{SquareView, ViewItem};
use crate::visual::{Size1, Size2, Style, Tag, Unit};
use anyview_core::{crop, Node};
use anyview_types::{Result, Value};

/// Maximum length of a tooltip hint
pub const HINT_LEN: usize = 64;
/// Gap between sibling item boxes, in pixels
const ITEM_SPACING_PX: f64 = 3.0;
pub const DEFAULT_SQUARE_DEPTH: i32 = 5;

fn title_style() -> Style {
    Style::new().color("white").background("grey")
}

fn item_style() -> Style {
    Style::new().clipped().background("yellow").border("solid")
}

fn key_style() -> Style {
    Style::new().color("grey")
}

/// Lays a value out into a size-constrained box tree.
///
/// Strategy is chosen per node from the available space, in priority
/// order: an empty placeholder, a single font-scaled summary line, a
/// three-line preview, or a directional split into a title bar plus one
/// recursively rendered sub-box per property.
#[derive(Debug, Clone)]
pub struct SquareViewer {
    pub size: Size2,
    pub style: Style,
    pub max_depth: i32,
}

impl SquareViewer {
    pub fn new(size: Size2) -> Self {
        SquareViewer {
            size,
            style: Style::new(),
            max_depth: DEFAULT_SQUARE_DEPTH,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn get_view(&self, value: &Value) -> SquareView {
        self.build(value, self.size, self.style.clone(), self.max_depth, true)
    }

    fn build(
        &self,
        value: &Value,
        size: Size2,
        style: Style,
        depth: i32,
        include_title: bool,
    ) -> SquareView {
        let one_line = OneLineViewer.line_for(&Node::wrap(value.clone()));
        let lines_count = size.lines_count();
        let line_len = size.line_len();
        if lines_count < 0.3 || line_len < 1.0 || depth < 0 || value.is_empty() {
            return self.empty_view(one_line, size, style);
        }
        if lines_count < 1.5 {
            return self.one_line_view(one_line, size, style);
        }
        if lines_count < 4.0 {
            return self.three_lines_view(value, one_line, size, style);
        }
        let vertical = size.y() > size.x();
        self.directional_view(value, one_line, size, style, depth, vertical, include_title)
    }

    /// Filled background, no content
    fn empty_view(&self, one_line: String, size: Size2, style: Style) -> SquareView {
        let style = style.merge(&Style::new().background("gray"));
        SquareView::new(
            vec![ViewItem::Text(String::new())],
            None,
            size,
            style,
            Some(one_line),
        )
    }

    /// A single summary line, font-scaled down when the box is shallower
    /// than a regular text line
    fn one_line_view(&self, one_line: String, size: Size2, style: Style) -> SquareView {
        let tag = if size.lines_count() < 0.9 {
            Some(Tag::font_size(size.y().to_unit(Unit::Em).css()))
        } else {
            None
        };
        SquareView::new(
            vec![ViewItem::Text(one_line.clone())],
            tag,
            size,
            style,
            Some(one_line),
        )
    }

    /// Type name plus a two-line preview
    fn three_lines_view(
        &self,
        value: &Value,
        one_line: String,
        size: Size2,
        style: Style,
    ) -> SquareView {
        SquareView::new(
            vec![
                ViewItem::Text(value.type_name()),
                ViewItem::Text(one_line.clone()),
                ViewItem::Text(one_line.clone()),
            ],
            None,
            size,
            style,
            Some(one_line),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn directional_view(
        &self,
        value: &Value,
        one_line: String,
        size: Size2,
        style: Style,
        depth: i32,
        vertical: bool,
        include_title: bool,
    ) -> SquareView {
        let (title_view, content_size) = if include_title {
            let title_size = Size2::from_sizes(size.x(), Size1::em(1.0));
            let content_size = Size2::from_sizes(size.x(), size.y() - title_size.y());
            let title_view = SquareView::new(
                vec![ViewItem::Text(one_line.clone())],
                Some(Tag::Paragraph),
                title_size,
                title_style(),
                Some(format!("title: {}", one_line)),
            );
            (Some(title_view), content_size)
        } else {
            (None, size)
        };

        let content_view = if content_size.y() >= Size1::em(1.0) {
            Some(match value {
                Value::Str(text) => SquareView::new(
                    vec![ViewItem::Text(text.clone())],
                    Some(Tag::Paragraph),
                    content_size,
                    Style::new(),
                    Some(value.repr()),
                ),
                other => self.items_view(other, content_size, vertical, depth),
            })
        } else {
            None
        };

        let mut parts: Vec<ViewItem> = Vec::new();
        if let Some(title) = title_view {
            parts.push(title.into());
        }
        if let Some(content) = content_view {
            parts.push(content.into());
        }
        let hint = crop(&one_line, HINT_LEN);
        if parts.is_empty() {
            let style = style.merge(&Style::new().background("silver"));
            SquareView::new(Vec::new(), Some(Tag::Div), size, style, Some(hint))
        } else {
            SquareView::new(parts, Some(Tag::Div), size, style, Some(hint))
        }
    }

    /// One equally-sized sub-box per property: a key strip over a
    /// recursively rendered value box
    fn items_view(
        &self,
        value: &Value,
        content_size: Size2,
        vertical: bool,
        depth: i32,
    ) -> SquareView {
        let pairs = key_value_pairs(value);
        let count = pairs.len();
        let mut boxed: Vec<ViewItem> = Vec::new();
        if count > 0 {
            let spacing = Size1::px(ITEM_SPACING_PX);
            let item_size = content_size.divide(count, vertical) - spacing * spacing;
            let display_mode = if vertical { "block" } else { "inline-block" };
            let item_style = item_style().merge(
                &Style::new()
                    .display(display_mode)
                    .spacing(spacing.css()),
            );
            let key_size = Size2::from_sizes(item_size.x(), Size1::em(1.0));
            let value_size = Size2::from_sizes(item_size.x(), item_size.y() - key_size.y());
            for (key, item) in pairs {
                let key_view = SquareView::new(
                    vec![ViewItem::Text(key.clone())],
                    None,
                    key_size,
                    key_style(),
                    Some(format!("key: {}", key)),
                );
                let value_view = self.build(&item, value_size, Style::new(), depth - 1, true);
                boxed.push(
                    SquareView::new(
                        vec![key_view.into(), value_view.into()],
                        None,
                        item_size,
                        item_style.clone(),
                        None,
                    )
                    .into(),
                );
            }
        }
        let hint = crop(&value.repr(), HINT_LEN);
        SquareView::new(boxed, Some(Tag::Div), content_size, Style::new(), Some(hint))
    }
}

/// Named content pairs: mapping entries, index -> element for sequences,
/// or the value's properties
fn key_value_pairs(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Map(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::Seq(items) => items
            .iter()
            .enumerate()
            .map(|(n, item)| (n.to_string(), item.clone()))
            .collect(),
        other => Node::wrap(other.clone())
            .props()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    }
}

impl Viewer for SquareViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Square(self.get_view(node.raw())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    fn profile() -> Value {
        Value::Map(props!("name" => "ada", "age" => 36))
    }

    #[test]
    fn test_tiny_box_renders_placeholder() {
        let viewer = SquareViewer::new(Size2::px(100.0, 2.0));
        let view = viewer.get_view(&profile());
        assert_eq!(view.items(), &[ViewItem::Text(String::new())]);
        assert_eq!(view.style().background.as_deref(), Some("gray"));
    }

    #[test]
    fn test_null_renders_placeholder() {
        let viewer = SquareViewer::new(Size2::px(400.0, 300.0));
        let view = viewer.get_view(&Value::Null);
        assert_eq!(view.style().background.as_deref(), Some("gray"));
    }

    #[test]
    fn test_shallow_box_renders_one_scaled_line() {
        // 8px tall at 10px font: less than 0.9 lines, so the font shrinks
        let viewer = SquareViewer::new(Size2::px(200.0, 8.0));
        let view = viewer.get_view(&profile());
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.tag(), Some(&Tag::font_size("0.8em")));
    }

    #[test]
    fn test_medium_box_renders_three_line_preview() {
        // 30px tall at 10px font: 3 lines, below the 4-line threshold
        let viewer = SquareViewer::new(Size2::px(200.0, 30.0));
        let view = viewer.get_view(&profile());
        assert_eq!(view.items().len(), 3);
        assert_eq!(view.items()[0], ViewItem::Text("mapping".to_string()));
    }

    #[test]
    fn test_large_box_splits_into_title_and_items() {
        let viewer = SquareViewer::new(Size2::px(400.0, 300.0));
        let view = viewer.get_view(&profile());
        // title bar + content region
        assert_eq!(view.items().len(), 2);
        let title = match &view.items()[0] {
            ViewItem::Square(title) => title,
            other => panic!("expected title box, got {:?}", other),
        };
        assert_eq!(title.style().background.as_deref(), Some("grey"));
        let content = match &view.items()[1] {
            ViewItem::Square(content) => content,
            other => panic!("expected content box, got {:?}", other),
        };
        // one sub-box per property
        assert_eq!(content.items().len(), 2);
    }

    #[test]
    fn test_depth_exhaustion_renders_placeholders() {
        let nested = Value::Map(props!("inner" => Value::Map(props!("x" => 1))));
        let viewer = SquareViewer::new(Size2::px(600.0, 400.0)).with_depth(0);
        let view = viewer.get_view(&nested);
        // inner boxes at depth -1 must be placeholders
        let html = view.html();
        assert!(html.contains("background: gray;"));
    }
}
