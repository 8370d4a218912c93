use super::formatted::ViewItem;
use super::INDENT_UNIT;
use crate::visual::{Size2, Style, Tag};

/// A rendered box: children plus a 2D size, a style and a tooltip hint.
/// Always emitted as a sized `<div>` in HTML, whatever its semantic tag.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareView {
    items: Vec<ViewItem>,
    tag: Option<Tag>,
    size: Size2,
    style: Style,
    hint: Option<String>,
}

impl SquareView {
    pub fn new(
        items: Vec<ViewItem>,
        tag: Option<Tag>,
        size: Size2,
        style: Style,
        hint: Option<String>,
    ) -> Self {
        SquareView {
            items,
            tag,
            size,
            style,
            hint,
        }
    }

    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    pub fn size(&self) -> Size2 {
        self.size
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Tooltip text with double quotes defused for attribute embedding
    pub fn html_title(&self) -> Option<String> {
        self.hint.as_ref().map(|hint| hint.replace('"', "``"))
    }

    fn html_style(&self) -> String {
        let mut css = self.style.css();
        if !css.is_empty() {
            css.push(' ');
        }
        css.push_str(&format!(
            "width: {}; height: {};",
            self.size.html_width(),
            self.size.html_height()
        ));
        css
    }

    pub fn html_open(&self) -> String {
        match self.html_title() {
            Some(title) => format!("<div style=\"{}\" title=\"{}\">", self.html_style(), title),
            None => format!("<div style=\"{}\">", self.html_style()),
        }
    }

    pub fn html_close(&self) -> String {
        "</div>".to_string()
    }

    pub fn html_lines(&self) -> Vec<String> {
        self.html_block(0)
    }

    pub fn html(&self) -> String {
        self.html_lines().join("\n")
    }

    pub(crate) fn html_block(&self, indent: usize) -> Vec<String> {
        let pad = INDENT_UNIT.repeat(indent);
        if self.items.len() < 2 && !self.items.iter().any(|item| item.is_block()) {
            return vec![format!("{}{}", pad, self.html_inline())];
        }
        let mut lines = vec![format!("{}{}", pad, self.html_open())];
        for item in &self.items {
            lines.extend(item.html_block(indent + 1));
        }
        lines.push(format!("{}{}", pad, self.html_close()));
        lines
    }

    pub(crate) fn html_inline(&self) -> String {
        let inner: String = self.items.iter().map(|item| item.html_inline()).collect();
        format!("{}{}{}", self.html_open(), inner, self.html_close())
    }

    pub fn text(&self) -> String {
        anyview_core::cap_newline_runs(&self.raw_text())
    }

    pub(crate) fn raw_text(&self) -> String {
        let parts: Vec<String> = self.items.iter().map(|item| item.text()).collect();
        parts.join("\n")
    }

    pub(crate) fn md_block(&self, indent: usize) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.md_block(indent))
            .collect()
    }

    pub(crate) fn md_inline(&self) -> String {
        let parts: Vec<String> = self.items.iter().map(|item| item.md_inline()).collect();
        parts.join(" ")
    }
}

impl std::fmt::Display for SquareView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_open_carries_size_and_title() {
        let view = SquareView::new(
            vec![ViewItem::from("x")],
            None,
            Size2::px(100.0, 50.0),
            Style::new().background("silver"),
            Some("say \"hi\"".to_string()),
        );
        assert_eq!(
            view.html_open(),
            "<div style=\"background: silver; width: 100px; height: 50px;\" title=\"say ``hi``\">"
        );
    }

    #[test]
    fn test_single_child_collapses_to_one_line() {
        let view = SquareView::new(
            vec![ViewItem::from("x")],
            None,
            Size2::px(10.0, 10.0),
            Style::new(),
            None,
        );
        let lines = view.html_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("x</div>"));
    }

    #[test]
    fn test_nested_children_indent() {
        let inner = SquareView::new(
            vec![ViewItem::from("a"), ViewItem::from("b")],
            None,
            Size2::px(10.0, 10.0),
            Style::new(),
            None,
        );
        let outer = SquareView::new(
            vec![ViewItem::from(inner), ViewItem::from("tail")],
            Some(Tag::Div),
            Size2::px(20.0, 20.0),
            Style::new(),
            None,
        );
        let lines = outer.html_lines();
        assert!(lines[0].starts_with("<div style="));
        assert!(lines[1].starts_with(INDENT_UNIT));
        assert_eq!(lines.last().unwrap(), "</div>");
    }
}
