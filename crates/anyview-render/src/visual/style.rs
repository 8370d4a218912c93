use anyview_types::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Sparse presentational attributes attached to rendered boxes.
///
/// `None` means "unset", not "override to nothing": merging keeps the
/// left-hand value wherever the right-hand side is unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub display: Option<String>,
    pub overflow_x: Option<String>,
    pub overflow_y: Option<String>,
    pub text_overflow: Option<String>,
    pub text_align: Option<String>,
    pub white_space: Option<String>,
    pub scrollbar_width: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub border: Option<String>,
    pub border_radius: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub spacing: Option<String>,
}

macro_rules! setter {
    ($name:ident) => {
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.$name = Some(value.into());
            self
        }
    };
}

impl Style {
    pub fn new() -> Self {
        Style::default()
    }

    setter!(display);
    setter!(overflow_x);
    setter!(overflow_y);
    setter!(text_overflow);
    setter!(text_align);
    setter!(white_space);
    setter!(scrollbar_width);
    setter!(color);
    setter!(background);
    setter!(border);
    setter!(border_radius);
    setter!(margin);
    setter!(padding);
    setter!(spacing);

    /// Hide overflowing content on both axes
    pub fn clipped(self) -> Self {
        self.overflow_x("hidden").overflow_y("hidden")
    }

    /// Right-hand side overrides; unset right-hand attributes keep the left
    pub fn merge(&self, other: &Style) -> Style {
        fn pick(left: &Option<String>, right: &Option<String>) -> Option<String> {
            right.clone().or_else(|| left.clone())
        }
        Style {
            display: pick(&self.display, &other.display),
            overflow_x: pick(&self.overflow_x, &other.overflow_x),
            overflow_y: pick(&self.overflow_y, &other.overflow_y),
            text_overflow: pick(&self.text_overflow, &other.text_overflow),
            text_align: pick(&self.text_align, &other.text_align),
            white_space: pick(&self.white_space, &other.white_space),
            scrollbar_width: pick(&self.scrollbar_width, &other.scrollbar_width),
            color: pick(&self.color, &other.color),
            background: pick(&self.background, &other.background),
            border: pick(&self.border, &other.border),
            border_radius: pick(&self.border_radius, &other.border_radius),
            margin: pick(&self.margin, &other.margin),
            padding: pick(&self.padding, &other.padding),
            spacing: pick(&self.spacing, &other.spacing),
        }
    }

    /// Filled attributes in declaration order, with CSS-style kebab-case keys
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let all: [(&'static str, &Option<String>); 14] = [
            ("display", &self.display),
            ("overflow-x", &self.overflow_x),
            ("overflow-y", &self.overflow_y),
            ("text-overflow", &self.text_overflow),
            ("text-align", &self.text_align),
            ("white-space", &self.white_space),
            ("scrollbar-width", &self.scrollbar_width),
            ("color", &self.color),
            ("background", &self.background),
            ("border", &self.border),
            ("border-radius", &self.border_radius),
            ("margin", &self.margin),
            ("padding", &self.padding),
            ("spacing", &self.spacing),
        ];
        all.iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect()
    }

    /// Inline CSS string, e.g. `"color: white; background: grey;"`
    pub fn css(&self) -> String {
        let parts: Vec<String> = self
            .entries()
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect();
        parts.join(" ")
    }

    fn set_by_key(&mut self, key: &str, value: &str) -> Result<()> {
        let value = Some(value.to_string());
        match key {
            "display" => self.display = value,
            "overflow-x" => self.overflow_x = value,
            "overflow-y" => self.overflow_y = value,
            "text-overflow" => self.text_overflow = value,
            "text-align" => self.text_align = value,
            "white-space" => self.white_space = value,
            "scrollbar-width" => self.scrollbar_width = value,
            "color" => self.color = value,
            "background" => self.background = value,
            "border" => self.border = value,
            "border-radius" => self.border_radius = value,
            "margin" => self.margin = value,
            "padding" => self.padding = value,
            "spacing" => self.spacing = value,
            other => return Err(Error::type_mismatch("style attribute", other)),
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parse a `"color: red; background: blue"` declaration list
    fn from_str(text: &str) -> Result<Self> {
        let mut style = Style::new();
        for declaration in text.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let (key, value) = declaration
                .split_once(':')
                .ok_or_else(|| Error::type_mismatch("key: value declaration", declaration))?;
            style.set_by_key(key.trim(), value.trim())?;
        }
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_skips_unset_attributes() {
        let style = Style::new().color("white").background("grey");
        assert_eq!(style.css(), "color: white; background: grey;");
    }

    #[test]
    fn test_merge_right_overrides_but_none_keeps_left() {
        let base = Style::new().color("black").background("yellow");
        let patch = Style::new().color("red");
        let merged = base.merge(&patch);
        assert_eq!(merged.color.as_deref(), Some("red"));
        assert_eq!(merged.background.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_parse_declaration_list() {
        let style: Style = "color: red; background: blue".parse().unwrap();
        assert_eq!(style.color.as_deref(), Some("red"));
        assert_eq!(style.background.as_deref(), Some("blue"));
        assert!("flavor: sweet".parse::<Style>().is_err());
    }
}
