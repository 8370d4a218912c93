use anyview_types::{Error, Result};

/// Font height assumed when converting between absolute and font-relative units
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
/// Width of a character cell as a fraction of the font height
pub const DEFAULT_FONT_PROPORTION: f64 = 0.6;

/// Length unit of a rendered box dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Absolute pixels
    #[default]
    Px,
    /// Character cells (zero-digit width)
    Ch,
    /// Font heights
    Em,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Ch => "ch",
            Unit::Em => "em",
        }
    }

    /// Parse a `"12px"` / `"1.5em"` style literal
    pub fn parse(text: &str) -> Result<(f64, Unit)> {
        for unit in [Unit::Px, Unit::Ch, Unit::Em] {
            if let Some(number) = text.strip_suffix(unit.suffix()) {
                let value: f64 = number
                    .parse()
                    .map_err(|_| Error::type_mismatch("sized literal", text))?;
                return Ok((value, unit));
            }
        }
        Err(Error::type_mismatch("sized literal", text))
    }
}

/// The metrics that anchor unit conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub size: f64,
    pub proportion: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontMetrics {
            size: DEFAULT_FONT_SIZE,
            proportion: DEFAULT_FONT_PROPORTION,
        }
    }
}

impl FontMetrics {
    fn unit_in_px(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Px => 1.0,
            Unit::Em => self.size,
            Unit::Ch => self.size * self.proportion,
        }
    }

    /// Convert a scalar between units through pixels
    pub fn translate(&self, x: f64, src: Unit, dst: Unit) -> f64 {
        if src == dst {
            return x;
        }
        x * self.unit_in_px(src) / self.unit_in_px(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!(Unit::parse("12px").unwrap(), (12.0, Unit::Px));
        assert_eq!(Unit::parse("1.5em").unwrap(), (1.5, Unit::Em));
        assert_eq!(Unit::parse("80ch").unwrap(), (80.0, Unit::Ch));
        assert!(Unit::parse("12pt").is_err());
        assert!(Unit::parse("px").is_err());
    }

    #[test]
    fn test_translate_roundtrip() {
        let font = FontMetrics::default();
        let px = font.translate(2.0, Unit::Em, Unit::Px);
        assert_eq!(px, 2.0 * DEFAULT_FONT_SIZE);
        let back = font.translate(px, Unit::Px, Unit::Em);
        assert_eq!(back, 2.0);
    }

    #[test]
    fn test_translate_char_cells() {
        let font = FontMetrics::default();
        // one character cell is proportion * font-size pixels wide
        assert_eq!(
            font.translate(1.0, Unit::Ch, Unit::Px),
            DEFAULT_FONT_SIZE * DEFAULT_FONT_PROPORTION
        );
    }
}
