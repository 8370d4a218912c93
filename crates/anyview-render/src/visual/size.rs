use super::unit::{FontMetrics, Unit};
use anyview_types::Result;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

fn fmt_num(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

/// One dimension with a unit. Arithmetic converts the right operand into
/// the left operand's unit before combining.
#[derive(Debug, Clone, Copy)]
pub struct Size1 {
    value: f64,
    unit: Unit,
    font: FontMetrics,
}

impl Size1 {
    pub fn new(value: f64, unit: Unit) -> Self {
        Size1 {
            value,
            unit,
            font: FontMetrics::default(),
        }
    }

    pub fn px(value: f64) -> Self {
        Size1::new(value, Unit::Px)
    }

    pub fn ch(value: f64) -> Self {
        Size1::new(value, Unit::Ch)
    }

    pub fn em(value: f64) -> Self {
        Size1::new(value, Unit::Em)
    }

    /// Parse a `"12px"` style literal
    pub fn parse(text: &str) -> Result<Self> {
        let (value, unit) = Unit::parse(text)?;
        Ok(Size1::new(value, unit))
    }

    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn to_unit(&self, unit: Unit) -> Size1 {
        Size1 {
            value: self.font.translate(self.value, self.unit, unit),
            unit,
            font: self.font,
        }
    }

    /// Height expressed in text lines, rounded to one decimal
    pub fn lines_count(&self) -> f64 {
        let lines = self.to_unit(Unit::Em).value;
        (lines * 10.0).round() / 10.0
    }

    /// Width expressed in character cells, rounded to a whole number
    pub fn line_len(&self) -> f64 {
        self.to_unit(Unit::Ch).value.round()
    }

    /// CSS length string, e.g. `"12px"`
    pub fn css(&self) -> String {
        format!("{}{}", fmt_num(self.value), self.unit.suffix())
    }
}

impl fmt::Display for Size1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

impl PartialEq for Size1 {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.to_unit(self.unit).value
    }
}

impl PartialOrd for Size1 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.to_unit(self.unit).value)
    }
}

impl Add for Size1 {
    type Output = Size1;

    fn add(self, rhs: Size1) -> Size1 {
        Size1 {
            value: self.value + rhs.to_unit(self.unit).value,
            ..self
        }
    }
}

impl Sub for Size1 {
    type Output = Size1;

    fn sub(self, rhs: Size1) -> Size1 {
        Size1 {
            value: self.value - rhs.to_unit(self.unit).value,
            ..self
        }
    }
}

impl Mul<f64> for Size1 {
    type Output = Size1;

    fn mul(self, rhs: f64) -> Size1 {
        Size1 {
            value: self.value * rhs,
            ..self
        }
    }
}

impl Div<f64> for Size1 {
    type Output = Size1;

    fn div(self, rhs: f64) -> Size1 {
        Size1 {
            value: self.value / rhs,
            ..self
        }
    }
}

/// Two equal-unit dimensions make an area
impl Mul for Size1 {
    type Output = Size2;

    fn mul(self, rhs: Size1) -> Size2 {
        Size2::from_sizes(self, rhs)
    }
}

/// A 2D box size with a shared unit
#[derive(Debug, Clone, Copy)]
pub struct Size2 {
    x: f64,
    y: f64,
    unit: Unit,
    font: FontMetrics,
}

impl Size2 {
    pub fn new(x: f64, y: f64, unit: Unit) -> Self {
        Size2 {
            x,
            y,
            unit,
            font: FontMetrics::default(),
        }
    }

    pub fn px(x: f64, y: f64) -> Self {
        Size2::new(x, y, Unit::Px)
    }

    /// Combine two one-dimensional sizes; the vertical one is converted
    /// into the horizontal one's unit
    pub fn from_sizes(x: Size1, y: Size1) -> Self {
        Size2 {
            x: x.value(),
            y: y.to_unit(x.unit()).value(),
            unit: x.unit(),
            font: FontMetrics::default(),
        }
    }

    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn x(&self) -> Size1 {
        Size1::new(self.x, self.unit).with_font(self.font)
    }

    pub fn y(&self) -> Size1 {
        Size1::new(self.y, self.unit).with_font(self.font)
    }

    pub fn to_unit(&self, unit: Unit) -> Size2 {
        Size2 {
            x: self.font.translate(self.x, self.unit, unit),
            y: self.font.translate(self.y, self.unit, unit),
            unit,
            font: self.font,
        }
    }

    pub fn lines_count(&self) -> f64 {
        self.y().lines_count()
    }

    pub fn line_len(&self) -> f64 {
        self.x().line_len()
    }

    /// Equal split along one axis, rounded to whole units
    pub fn divide(&self, count: usize, vertical: bool) -> Size2 {
        let count = count.max(1) as f64;
        if vertical {
            Size2 {
                y: (self.y / count).round(),
                ..*self
            }
        } else {
            Size2 {
                x: (self.x / count).round(),
                ..*self
            }
        }
    }

    pub fn html_width(&self) -> String {
        format!("{}{}", fmt_num(self.x), self.unit.suffix())
    }

    pub fn html_height(&self) -> String {
        format!("{}{}", fmt_num(self.y), self.unit.suffix())
    }
}

impl fmt::Display for Size2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{}", fmt_num(self.x), fmt_num(self.y), self.unit.suffix())
    }
}

impl PartialEq for Size2 {
    fn eq(&self, other: &Self) -> bool {
        let other = other.to_unit(self.unit);
        self.x == other.x && self.y == other.y
    }
}

impl Add for Size2 {
    type Output = Size2;

    fn add(self, rhs: Size2) -> Size2 {
        let rhs = rhs.to_unit(self.unit);
        Size2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            ..self
        }
    }
}

impl Sub for Size2 {
    type Output = Size2;

    fn sub(self, rhs: Size2) -> Size2 {
        let rhs = rhs.to_unit(self.unit);
        Size2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_whole_numbers() {
        assert_eq!(Size2::px(500.0, 40.0).to_string(), "500x40px");
        assert_eq!(Size1::px(37.5).to_string(), "37.5px");
    }

    #[test]
    fn test_arithmetic_converts_right_operand() {
        let sum = Size1::px(20.0) + Size1::em(1.0);
        assert_eq!(sum.unit(), Unit::Px);
        assert_eq!(sum.value(), 30.0);

        assert!(Size1::em(2.0) > Size1::px(15.0));
        assert_eq!(Size1::px(10.0), Size1::em(1.0));
    }

    #[test]
    fn test_lines_count_and_line_len() {
        let size = Size2::px(120.0, 25.0);
        assert_eq!(size.lines_count(), 2.5);
        assert_eq!(size.line_len(), 20.0);
    }

    #[test]
    fn test_divide_splits_one_axis() {
        let size = Size2::px(500.0, 200.0);
        let row = size.divide(5, true);
        assert_eq!(row, Size2::px(500.0, 40.0));
        let column = size.divide(4, false);
        assert_eq!(column, Size2::px(125.0, 200.0));
    }

    #[test]
    fn test_chart_row_decomposition() {
        // 500x200 chart, 50px axis, 5 funnel rows: every row frame must
        // decompose exactly into an axis mark plus a bar frame
        let axis_width = Size1::px(50.0);
        let chart_size = Size2::px(500.0, 200.0);
        let bars_count = 5;
        let row_height = chart_size.y() / bars_count as f64;
        let row_frame = Size2::from_sizes(chart_size.x(), row_height);
        let bar_frame = Size2::from_sizes(chart_size.x() - axis_width, row_height);
        let mark = Size2::from_sizes(axis_width, row_height);
        assert_eq!(row_frame, Size2::px(500.0, 40.0));
        assert_eq!(mark + bar_frame, row_frame);
    }
}
