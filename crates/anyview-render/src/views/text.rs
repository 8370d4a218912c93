use anyview_core::cap_newline_runs;

/// Plain rendered content: an ordered sequence of text lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextView {
    lines: Vec<String>,
}

impl TextView {
    pub fn new(lines: Vec<String>) -> Self {
        TextView { lines }
    }

    /// Split a text block into lines
    pub fn from_text(text: &str) -> Self {
        TextView {
            lines: text.split('\n').map(|s| s.to_string()).collect(),
        }
    }

    pub fn one_line(line: impl Into<String>) -> Self {
        TextView {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        cap_newline_runs(&self.lines.join("\n"))
    }
}

impl std::fmt::Display for TextView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
