/// Semantic role of a formatted node, carrying its own open/close markers
/// for every render target.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Div,
    Span,
    Paragraph,
    Header {
        level: u8,
        anchor: Option<String>,
    },
    Link {
        href: Option<String>,
        name: Option<String>,
        title: Option<String>,
    },
    List {
        ordered: bool,
    },
    ListItem {
        ordered: bool,
    },
    Font {
        size: Option<String>,
        color: Option<String>,
        bold: bool,
        italic: bool,
    },
}

impl Tag {
    pub fn header(level: u8) -> Self {
        Tag::Header {
            level,
            anchor: None,
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Tag::Link {
            href: Some(href.into()),
            name: None,
            title: None,
        }
    }

    pub fn font_color(color: impl Into<String>) -> Self {
        Tag::Font {
            size: None,
            color: Some(color.into()),
            bold: false,
            italic: false,
        }
    }

    pub fn font_size(size: impl Into<String>) -> Self {
        Tag::Font {
            size: Some(size.into()),
            color: None,
            bold: false,
            italic: false,
        }
    }

    pub fn bold() -> Self {
        Tag::Font {
            size: None,
            color: None,
            bold: true,
            italic: false,
        }
    }

    pub fn italic() -> Self {
        Tag::Font {
            size: None,
            color: None,
            bold: false,
            italic: true,
        }
    }

    pub fn html_open(&self) -> String {
        match self {
            Tag::Div => "<div>".to_string(),
            Tag::Span => "<span>".to_string(),
            Tag::Paragraph => "<p>".to_string(),
            Tag::Header { level, anchor } => match anchor {
                Some(anchor) => format!("<h{} name=\"{}\">", level, anchor),
                None => format!("<h{}>", level),
            },
            Tag::Link { href, name, title } => {
                let mut attrs = String::new();
                if let Some(href) = href {
                    attrs.push_str(&format!(" href=\"{}\"", href));
                }
                if let Some(name) = name {
                    attrs.push_str(&format!(" name=\"{}\"", name));
                }
                if let Some(title) = title {
                    attrs.push_str(&format!(" title=\"{}\"", title));
                }
                format!("<a{}>", attrs)
            }
            Tag::List { ordered } => {
                if *ordered {
                    "<ol>".to_string()
                } else {
                    "<ul>".to_string()
                }
            }
            Tag::ListItem { .. } => "<li>".to_string(),
            Tag::Font {
                size,
                color,
                bold,
                italic,
            } => {
                let mut tag = String::new();
                let mut attrs = String::new();
                if let Some(size) = size {
                    attrs.push_str(&format!(" size=\"{}\"", size));
                }
                if let Some(color) = color {
                    attrs.push_str(&format!(" color=\"{}\"", color));
                }
                if !attrs.is_empty() {
                    tag.push_str(&format!("<font{}>", attrs));
                }
                if *bold {
                    tag.push_str("<b>");
                }
                if *italic {
                    tag.push_str("<i>");
                }
                tag
            }
        }
    }

    pub fn html_close(&self) -> String {
        match self {
            Tag::Div => "</div>".to_string(),
            Tag::Span => "</span>".to_string(),
            Tag::Paragraph => "</p>".to_string(),
            Tag::Header { level, .. } => format!("</h{}>", level),
            Tag::Link { .. } => "</a>".to_string(),
            Tag::List { ordered } => {
                if *ordered {
                    "</ol>".to_string()
                } else {
                    "</ul>".to_string()
                }
            }
            Tag::ListItem { .. } => "</li>".to_string(),
            Tag::Font {
                size,
                color,
                bold,
                italic,
            } => {
                let mut tag = String::new();
                if *italic {
                    tag.push_str("</i>");
                }
                if *bold {
                    tag.push_str("</b>");
                }
                if size.is_some() || color.is_some() {
                    tag.push_str("</font>");
                }
                tag
            }
        }
    }

    pub fn md_open(&self) -> String {
        match self {
            Tag::Paragraph | Tag::List { .. } => "\n".to_string(),
            Tag::Header { level, .. } => format!("{} ", "#".repeat(*level as usize)),
            Tag::Link { href, name, .. } => match (href, name) {
                (Some(_), _) => "[".to_string(),
                (None, Some(name)) => format!("[](#{})\n", name),
                (None, None) => String::new(),
            },
            Tag::ListItem { ordered } => {
                if *ordered {
                    "1. ".to_string()
                } else {
                    "- ".to_string()
                }
            }
            Tag::Font { bold, italic, .. } => {
                let mut markers = String::new();
                if *bold {
                    markers.push_str("**");
                }
                if *italic {
                    markers.push('*');
                }
                markers
            }
            Tag::Div | Tag::Span => String::new(),
        }
    }

    pub fn md_close(&self) -> String {
        match self {
            Tag::Paragraph | Tag::List { .. } | Tag::ListItem { .. } => "\n".to_string(),
            Tag::Header { anchor, .. } => match anchor {
                Some(anchor) => format!(" {{#{}}}", anchor),
                None => String::new(),
            },
            Tag::Link { href, title, .. } => match href {
                Some(href) => match title {
                    Some(title) => format!("]({} {})", href, title),
                    None => format!("]({})", href),
                },
                None => String::new(),
            },
            Tag::Font { bold, italic, .. } => {
                let mut markers = String::new();
                if *italic {
                    markers.push('*');
                }
                if *bold {
                    markers.push_str("**");
                }
                markers
            }
            Tag::Div | Tag::Span => String::new(),
        }
    }

    pub fn text_open(&self) -> String {
        match self {
            Tag::Paragraph | Tag::Header { .. } | Tag::List { .. } => "\n".to_string(),
            Tag::ListItem { .. } => "\n- ".to_string(),
            _ => String::new(),
        }
    }

    pub fn text_close(&self) -> String {
        match self {
            Tag::Header { .. } => "\n====\n".to_string(),
            Tag::List { .. } => "\n".to_string(),
            Tag::Link { .. } => "[*]".to_string(),
            _ => String::new(),
        }
    }

    /// List items never collapse onto their parent's line
    pub fn can_be_one_line(&self) -> bool {
        !matches!(self, Tag::ListItem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_markers() {
        let plain = Tag::header(2);
        assert_eq!(plain.md_open(), "## ");
        assert_eq!(plain.md_close(), "");
        assert_eq!(plain.html_open(), "<h2>");

        let anchored = Tag::Header {
            level: 1,
            anchor: Some("intro".to_string()),
        };
        assert_eq!(anchored.md_close(), " {#intro}");
        assert_eq!(anchored.html_open(), "<h1 name=\"intro\">");
    }

    #[test]
    fn test_list_item_markers() {
        assert_eq!(Tag::ListItem { ordered: false }.md_open(), "- ");
        assert_eq!(Tag::ListItem { ordered: true }.md_open(), "1. ");
        assert_eq!(Tag::List { ordered: true }.html_open(), "<ol>");
    }

    #[test]
    fn test_font_emphasis_markers() {
        let bold_italic = Tag::Font {
            size: None,
            color: None,
            bold: true,
            italic: true,
        };
        assert_eq!(bold_italic.md_open(), "***");
        assert_eq!(bold_italic.md_close(), "***");
        assert_eq!(bold_italic.html_open(), "<b><i>");
        assert_eq!(bold_italic.html_close(), "</i></b>");
    }

    #[test]
    fn test_link_markers() {
        let link = Tag::Link {
            href: Some("https://example.com".to_string()),
            name: None,
            title: None,
        };
        assert_eq!(link.md_open(), "[");
        assert_eq!(link.md_close(), "](https://example.com)");
    }

    #[test]
    fn test_font_with_attributes() {
        let sized = Tag::font_size("0.5em");
        assert_eq!(sized.html_open(), "<font size=\"0.5em\">");
        assert_eq!(sized.html_close(), "</font>");
    }
}
