use super::square::SquareView;
use super::table::TableView;
use super::INDENT_UNIT;
use crate::visual::Tag;
use anyview_core::cap_newline_runs;

/// One child of a rendered node: a literal line or a nested view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewItem {
    Text(String),
    Formatted(FormattedView),
    Square(SquareView),
    Table(TableView),
}

impl ViewItem {
    pub fn text(&self) -> String {
        match self {
            ViewItem::Text(text) => text.clone(),
            ViewItem::Formatted(view) => view.raw_text(),
            ViewItem::Square(view) => view.raw_text(),
            ViewItem::Table(view) => view.text_lines().join("\n"),
        }
    }

    pub fn md_lines(&self) -> Vec<String> {
        self.md_block(0)
    }

    pub fn html_lines(&self) -> Vec<String> {
        self.html_block(0)
    }

    pub(crate) fn md_block(&self, indent: usize) -> Vec<String> {
        match self {
            ViewItem::Text(text) => vec![format!("{}{}", INDENT_UNIT.repeat(indent), text)],
            ViewItem::Formatted(view) => view.md_block(indent),
            ViewItem::Square(view) => view.md_block(indent),
            ViewItem::Table(view) => view
                .md_lines()
                .into_iter()
                .map(|line| format!("{}{}", INDENT_UNIT.repeat(indent), line))
                .collect(),
        }
    }

    pub(crate) fn html_block(&self, indent: usize) -> Vec<String> {
        match self {
            ViewItem::Text(text) => vec![format!("{}{}", INDENT_UNIT.repeat(indent), text)],
            ViewItem::Formatted(view) => view.html_block(indent),
            ViewItem::Square(view) => view.html_block(indent),
            ViewItem::Table(view) => view
                .html_lines()
                .into_iter()
                .map(|line| format!("{}{}", INDENT_UNIT.repeat(indent), line))
                .collect(),
        }
    }

    pub(crate) fn md_inline(&self) -> String {
        match self {
            ViewItem::Text(text) => text.clone(),
            ViewItem::Formatted(view) => view.md_inline(),
            ViewItem::Square(view) => view.md_inline(),
            ViewItem::Table(view) => view.md_lines().join("\n"),
        }
    }

    pub(crate) fn html_inline(&self) -> String {
        match self {
            ViewItem::Text(text) => text.clone(),
            ViewItem::Formatted(view) => view.html_inline(),
            ViewItem::Square(view) => view.html_inline(),
            ViewItem::Table(view) => view.html_lines().join(""),
        }
    }

    /// Block-level items force their parent onto multiple lines
    pub(crate) fn is_block(&self) -> bool {
        match self {
            ViewItem::Text(_) => false,
            ViewItem::Formatted(view) => match view.tag() {
                Some(tag) => {
                    !tag.can_be_one_line()
                        || matches!(
                            tag,
                            Tag::List { .. } | Tag::Header { .. } | Tag::Paragraph
                        )
                }
                None => view.items().iter().any(|item| item.is_block()),
            },
            ViewItem::Square(_) | ViewItem::Table(_) => true,
        }
    }
}

impl From<String> for ViewItem {
    fn from(text: String) -> Self {
        ViewItem::Text(text)
    }
}

impl From<&str> for ViewItem {
    fn from(text: &str) -> Self {
        ViewItem::Text(text.to_string())
    }
}

impl From<FormattedView> for ViewItem {
    fn from(view: FormattedView) -> Self {
        ViewItem::Formatted(view)
    }
}

impl From<SquareView> for ViewItem {
    fn from(view: SquareView) -> Self {
        ViewItem::Square(view)
    }
}

impl From<TableView> for ViewItem {
    fn from(view: TableView) -> Self {
        ViewItem::Table(view)
    }
}

/// Rendered content with a semantic role: an immutable child sequence plus
/// an optional tag that drives format-specific emission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedView {
    items: Vec<ViewItem>,
    tag: Option<Tag>,
}

impl FormattedView {
    pub fn new(items: Vec<ViewItem>, tag: Option<Tag>) -> Self {
        FormattedView { items, tag }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        FormattedView {
            items: vec![ViewItem::Text(text.into())],
            tag: None,
        }
    }

    pub fn tagged(text: impl Into<String>, tag: Tag) -> Self {
        FormattedView {
            items: vec![ViewItem::Text(text.into())],
            tag: Some(tag),
        }
    }

    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain text with newline runs capped
    pub fn text(&self) -> String {
        cap_newline_runs(&self.raw_text())
    }

    pub(crate) fn raw_text(&self) -> String {
        let mut out = String::new();
        if let Some(tag) = &self.tag {
            out.push_str(&tag.text_open());
        }
        for item in &self.items {
            out.push_str(&item.text());
        }
        if let Some(tag) = &self.tag {
            out.push_str(&tag.text_close());
        }
        out
    }

    pub fn text_lines(&self) -> Vec<String> {
        self.text().split('\n').map(|s| s.to_string()).collect()
    }

    pub fn md(&self) -> String {
        self.md_lines().join("\n")
    }

    pub fn md_lines(&self) -> Vec<String> {
        self.md_block(0)
    }

    pub fn html(&self) -> String {
        self.html_lines().join("\n")
    }

    pub fn html_lines(&self) -> Vec<String> {
        self.html_block(0)
    }

    pub(crate) fn md_inline(&self) -> String {
        let mut out = String::new();
        if let Some(tag) = &self.tag {
            out.push_str(&tag.md_open());
        }
        for item in &self.items {
            out.push_str(&item.md_inline());
        }
        if let Some(tag) = &self.tag {
            out.push_str(&tag.md_close());
        }
        // inline context: tag-induced line breaks flatten to spaces
        out.replace('\n', " ")
    }

    pub(crate) fn html_inline(&self) -> String {
        let mut out = String::new();
        if let Some(tag) = &self.tag {
            out.push_str(&tag.html_open());
        }
        for item in &self.items {
            out.push_str(&item.html_inline());
        }
        if let Some(tag) = &self.tag {
            out.push_str(&tag.html_close());
        }
        out
    }

    /// Markdown emission: nested list content is indented one unit per
    /// nesting level; headers and list items carry their line markers
    pub(crate) fn md_block(&self, indent: usize) -> Vec<String> {
        let pad = INDENT_UNIT.repeat(indent);
        match &self.tag {
            Some(Tag::List { .. }) => self
                .items
                .iter()
                .flat_map(|item| item.md_block(indent))
                .collect(),
            Some(Tag::ListItem { ordered }) => {
                let marker = if *ordered { "1. " } else { "- " };
                let mut head = format!("{}{}", pad, marker);
                let mut lines = Vec::new();
                let mut tail: Vec<&ViewItem> = Vec::new();
                for item in &self.items {
                    if item.is_block() {
                        tail.push(item);
                    } else {
                        head.push_str(&item.md_inline());
                    }
                }
                lines.push(head);
                for item in tail {
                    lines.extend(item.md_block(indent + 1));
                }
                lines
            }
            Some(Tag::Header { .. }) => {
                let tag = self.tag.as_ref().unwrap();
                let body: String = self.items.iter().map(|item| item.md_inline()).collect();
                vec![format!("{}{}{}{}", pad, tag.md_open(), body, tag.md_close())]
            }
            Some(Tag::Paragraph) => {
                let body: String = self.items.iter().map(|item| item.md_inline()).collect();
                vec![format!("{}{}", pad, body), String::new()]
            }
            _ => {
                if self.items.iter().any(|item| item.is_block()) {
                    self.items
                        .iter()
                        .flat_map(|item| item.md_block(indent))
                        .collect()
                } else {
                    vec![format!("{}{}", pad, self.md_inline())]
                }
            }
        }
    }

    /// HTML emission: a node with fewer than two children collapses onto a
    /// single line, otherwise children indent one unit per level
    pub(crate) fn html_block(&self, indent: usize) -> Vec<String> {
        let pad = INDENT_UNIT.repeat(indent);
        match &self.tag {
            None => {
                if self.items.len() < 2 && !self.items.iter().any(|item| item.is_block()) {
                    vec![format!("{}{}", pad, self.html_inline())]
                } else {
                    self.items
                        .iter()
                        .flat_map(|item| item.html_block(indent))
                        .collect()
                }
            }
            Some(tag) => {
                if self.items.len() < 2 && !self.items.iter().any(|item| item.is_block()) {
                    vec![format!("{}{}", pad, self.html_inline())]
                } else {
                    let mut lines = vec![format!("{}{}", pad, tag.html_open())];
                    for item in &self.items {
                        lines.extend(item.html_block(indent + 1));
                    }
                    lines.push(format!("{}{}", pad, tag.html_close()));
                    lines
                }
            }
        }
    }
}

impl std::fmt::Display for FormattedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
