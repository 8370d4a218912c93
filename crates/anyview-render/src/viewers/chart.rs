use super::Viewer;
use crate::views::{SquareView, ViewItem};
use crate::visual::{Size1, Size2, Style, Tag, Unit};
use anyview_core::{max_chart_value, smart_round, Node};
use anyview_types::{Error, Props, Result, Value};
use sha2::{Digest, Sha256};

pub const DEFAULT_CHART_SIZE: (f64, f64) = (480.0, 270.0);
pub const DEFAULT_AXIS_WIDTH_PX: f64 = 75.0;
const DEFAULT_CHART_COLOR: &str = "grey";
const DEFAULT_BAR_COLOR: &str = "silver";
/// Color reserved for the literal `total` / `other` categories
const RESERVED_CATEGORY_COLOR: &str = "gray";
/// Salt mixed into the category name before hashing it into a color
const COLOR_SALT: &str = "bar-color:";

fn chart_style() -> Style {
    Style::new().background(DEFAULT_CHART_COLOR)
}

fn bar_style() -> Style {
    Style::new()
        .background(DEFAULT_BAR_COLOR)
        .clipped()
        .text_overflow("ellipsis")
        .text_align("right")
        .white_space("nowrap")
}

fn mark_style() -> Style {
    Style::new()
        .clipped()
        .text_overflow("ellipsis")
        .text_align("right")
        .white_space("nowrap")
}

fn row_style() -> Style {
    Style::new().display("inline-block").clipped().white_space("nowrap")
}

/// Horizontal bar chart over an ordered mapping of category -> numeric
/// value (or nested sub-category mapping, rendered as stacked sub-bars).
///
/// Each row is an axis label, the bar itself and a value caption; the
/// largest bar is scaled to fit the frame via an upper smart-round of the
/// maximum plotted value.
#[derive(Debug, Clone)]
pub struct BarChartViewer {
    pub size: Size2,
    pub style: Style,
    pub bar_style: Style,
    /// Pixels per unit; derived from the data when unset
    pub scale_x: Option<f64>,
    /// Reserved width of the axis-label column; `None` folds the label
    /// into the bar caption
    pub axis_width: Option<Size1>,
    /// Explicit category -> color assignments
    pub colors: Vec<(String, String)>,
}

impl Default for BarChartViewer {
    fn default() -> Self {
        BarChartViewer {
            size: Size2::px(DEFAULT_CHART_SIZE.0, DEFAULT_CHART_SIZE.1),
            style: chart_style(),
            bar_style: bar_style(),
            scale_x: None,
            axis_width: Some(Size1::px(DEFAULT_AXIS_WIDTH_PX)),
            colors: Vec::new(),
        }
    }
}

impl BarChartViewer {
    pub fn with_size(mut self, size: Size2) -> Self {
        self.size = size;
        self
    }

    pub fn with_colors(mut self, colors: Vec<(String, String)>) -> Self {
        self.colors = colors;
        self
    }

    pub fn get_view(&self, value: &Value) -> Result<SquareView> {
        let data = value
            .as_map()
            .ok_or_else(|| Error::type_mismatch("mapping", value.type_name()))?;
        let bars_count = data.len().max(1);
        let row_height = self.size.y() / bars_count as f64;
        let row_frame = Size2::from_sizes(self.size.x(), row_height);
        let bar_frame = match self.axis_width {
            Some(axis_width) => Size2::from_sizes(self.size.x() - axis_width, row_height),
            None => row_frame,
        };
        let scale = match self.scale_x {
            Some(scale) => scale,
            None => self.derive_scale(data, &bar_frame)?,
        };

        let mut rows: Vec<ViewItem> = Vec::new();
        for (key, row_value) in data {
            let bar = self.bar(key, row_value, &bar_frame, scale)?;
            let hint = format!("{}: {}", key, row_value);
            let row = match self.axis_width {
                Some(axis_width) => {
                    let mark_size = Size2::from_sizes(axis_width, row_height);
                    let mark = SquareView::new(
                        vec![ViewItem::Text(key.clone())],
                        Some(Tag::Div),
                        mark_size,
                        mark_style().merge(&Style::new().display("inline-block")),
                        Some(key.clone()),
                    );
                    SquareView::new(
                        vec![mark.into(), bar.into()],
                        None,
                        row_frame,
                        row_style(),
                        Some(hint),
                    )
                }
                None => bar,
            };
            rows.push(row.into());
        }
        Ok(SquareView::new(
            rows,
            Some(Tag::Div),
            self.size,
            self.style.clone(),
            None,
        ))
    }

    /// Whole pixels per data unit, from an upper-rounded maximum so the
    /// largest bar never overflows
    fn derive_scale(&self, data: &Props, bar_frame: &Size2) -> Result<f64> {
        let max_value = max_chart_value(data, true)?;
        let max_rounded = smart_round(max_value, 2, true)?;
        Ok((bar_frame.x().to_unit(Unit::Px).value() / max_rounded).floor())
    }

    fn bar(&self, key: &str, value: &Value, bar_frame: &Size2, scale: f64) -> Result<SquareView> {
        let frame_width = bar_frame.x().to_unit(Unit::Px).value();
        match value {
            Value::Map(secondary) => {
                let mut sub_bars: Vec<ViewItem> = Vec::new();
                let mut total = 0.0;
                for (name, sub_value) in secondary {
                    let x = sub_value.as_f64().ok_or_else(|| {
                        Error::type_mismatch("numeric sub-value", format!("{}: {}", name, sub_value))
                    })?;
                    total += x;
                    let sub_size = Size2::from_sizes(Size1::px(x * scale), bar_frame.y());
                    let sub_style = self.bar_style.merge(
                        &Style::new()
                            .display("inline-block")
                            .background(self.color_for(name)),
                    );
                    sub_bars.push(
                        SquareView::new(
                            vec![ViewItem::Text(name.clone())],
                            Some(Tag::Span),
                            sub_size,
                            sub_style,
                            Some(format!("{}: {}", name, x)),
                        )
                        .into(),
                    );
                }
                let width = Size1::px((total * scale).min(frame_width));
                Ok(SquareView::new(
                    sub_bars,
                    Some(Tag::Span),
                    Size2::from_sizes(width, bar_frame.y()),
                    row_style(),
                    Some(format!("{}: {}", key, total)),
                ))
            }
            other => {
                let x = other.as_f64().ok_or_else(|| {
                    Error::type_mismatch("numeric or mapping row", format!("{}: {}", key, other))
                })?;
                let caption = if self.axis_width.is_some() {
                    x.to_string()
                } else {
                    format!("{}: {}", key, x)
                };
                let width = Size1::px((x * scale).min(frame_width));
                Ok(SquareView::new(
                    vec![ViewItem::Text(caption)],
                    Some(Tag::Span),
                    Size2::from_sizes(width, bar_frame.y()),
                    self.bar_style.merge(&Style::new().display("inline-block")),
                    Some(format!("{}: {}", key, x)),
                ))
            }
        }
    }

    /// Deterministic category color: explicit assignment, the reserved
    /// color for `total`/`other`, else a salted digest truncated to RGB
    pub fn color_for(&self, name: &str) -> String {
        if let Some((_, color)) = self.colors.iter().find(|(n, _)| n == name) {
            return color.clone();
        }
        if name == "total" || name == "other" {
            return RESERVED_CATEGORY_COLOR.to_string();
        }
        let digest = Sha256::digest(format!("{}{}", COLOR_SALT, name).as_bytes());
        format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
    }
}

impl Viewer for BarChartViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Square(self.get_view(node.raw())?))
    }
}

/// The absolute chart plus a percentage-of-row-total companion chart
#[derive(Debug, Clone, Default)]
pub struct PairBarChartViewer {
    pub chart: BarChartViewer,
}

impl PairBarChartViewer {
    pub fn new(chart: BarChartViewer) -> Self {
        PairBarChartViewer { chart }
    }

    pub fn get_view(&self, value: &Value) -> Result<SquareView> {
        let data = value
            .as_map()
            .ok_or_else(|| Error::type_mismatch("mapping", value.type_name()))?;
        let total_size = self.chart.size;
        let half_x = total_size.x() / 2.0;
        let half_size = Size2::from_sizes(half_x, total_size.y());

        let absolute = BarChartViewer {
            size: half_size,
            ..self.chart.clone()
        };
        let relative = BarChartViewer {
            size: half_size,
            scale_x: None,
            ..self.chart.clone()
        };

        let absolute_view = absolute.get_view(value)?;
        let relative_view = relative.get_view(&Value::Map(relative_shares(data)?))?;
        Ok(SquareView::new(
            vec![absolute_view.into(), relative_view.into()],
            Some(Tag::Div),
            total_size,
            Style::new().white_space("nowrap"),
            None,
        ))
    }
}

/// Per-row percentages: each category's value divided by its row total
fn relative_shares(data: &Props) -> Result<Props> {
    let mut shares = Props::new();
    for (key, row_value) in data {
        let share = match row_value {
            Value::Map(secondary) => {
                let mut total = 0.0;
                for (name, sub_value) in secondary {
                    total += sub_value.as_f64().ok_or_else(|| {
                        Error::type_mismatch("numeric sub-value", format!("{}: {}", name, sub_value))
                    })?;
                }
                let mut sub_shares = Props::new();
                for (name, sub_value) in secondary {
                    let x = sub_value.as_f64().unwrap_or(0.0);
                    let pct = if total > 0.0 { x / total * 100.0 } else { 0.0 };
                    sub_shares.insert(name.clone(), Value::Float((pct * 10.0).round() / 10.0));
                }
                Value::Map(sub_shares)
            }
            other => {
                other.as_f64().ok_or_else(|| {
                    Error::type_mismatch("numeric or mapping row", format!("{}: {}", key, other))
                })?;
                Value::Float(100.0)
            }
        };
        shares.insert(key.clone(), share);
    }
    Ok(shares)
}

impl Viewer for PairBarChartViewer {
    fn render(&self, node: &Node) -> Result<ViewItem> {
        Ok(ViewItem::Square(self.get_view(node.raw())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    fn funnel() -> Value {
        Value::Map(props!(
            "input" => 110, "registration" => 80, "cart" => 40,
            "checkout" => 20, "retention" => 12,
        ))
    }

    #[test]
    fn test_chart_rejects_non_mapping_input() {
        let viewer = BarChartViewer::default();
        assert!(matches!(
            viewer.get_view(&Value::from(5)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_row_geometry() {
        let viewer = BarChartViewer {
            size: Size2::px(500.0, 200.0),
            axis_width: Some(Size1::px(50.0)),
            ..BarChartViewer::default()
        };
        let view = viewer.get_view(&funnel()).unwrap();
        assert_eq!(view.items().len(), 5);
        for row in view.items() {
            let row = match row {
                ViewItem::Square(row) => row,
                other => panic!("expected row box, got {:?}", other),
            };
            assert_eq!(row.size(), Size2::px(500.0, 40.0));
            // axis mark + bar
            assert_eq!(row.items().len(), 2);
            let mark = match &row.items()[0] {
                ViewItem::Square(mark) => mark,
                other => panic!("expected mark box, got {:?}", other),
            };
            assert_eq!(mark.size(), Size2::px(50.0, 40.0));
        }
    }

    #[test]
    fn test_bar_widths_follow_the_scale() {
        let viewer = BarChartViewer {
            size: Size2::px(500.0, 200.0),
            axis_width: Some(Size1::px(50.0)),
            ..BarChartViewer::default()
        };
        let view = viewer.get_view(&funnel()).unwrap();
        // max 110 rounds up to 110, scale = floor(450 / 110) = 4 px/unit
        let first_row = match &view.items()[0] {
            ViewItem::Square(row) => row,
            other => panic!("expected row box, got {:?}", other),
        };
        let bar = match &first_row.items()[1] {
            ViewItem::Square(bar) => bar,
            other => panic!("expected bar box, got {:?}", other),
        };
        assert_eq!(bar.size(), Size2::px(440.0, 40.0));
    }

    #[test]
    fn test_stacked_rows_get_one_sub_bar_per_category() {
        let rich = Value::Map(props!(
            "input" => Value::Map(props!("src1" => 50, "src2" => 40, "src3" => 20)),
            "registration" => 80,
        ));
        let viewer = BarChartViewer::default();
        let view = viewer.get_view(&rich).unwrap();
        let first_row = match &view.items()[0] {
            ViewItem::Square(row) => row,
            other => panic!("expected row box, got {:?}", other),
        };
        let stacked = match &first_row.items()[1] {
            ViewItem::Square(bar) => bar,
            other => panic!("expected stacked bar, got {:?}", other),
        };
        assert_eq!(stacked.items().len(), 3);
    }

    #[test]
    fn test_color_assignment_is_deterministic() {
        let viewer = BarChartViewer::default()
            .with_colors(vec![("src1".to_string(), "teal".to_string())]);
        assert_eq!(viewer.color_for("src1"), "teal");
        assert_eq!(viewer.color_for("total"), RESERVED_CATEGORY_COLOR);
        assert_eq!(viewer.color_for("other"), RESERVED_CATEGORY_COLOR);
        let hashed = viewer.color_for("src2");
        assert_eq!(hashed.len(), 7);
        assert!(hashed.starts_with('#'));
        assert_eq!(hashed, viewer.color_for("src2"));
    }

    #[test]
    fn test_pair_chart_composes_absolute_and_relative() {
        let rich = Value::Map(props!(
            "input" => Value::Map(props!("src1" => 50, "src2" => 50)),
            "registration" => 80,
        ));
        let viewer = PairBarChartViewer::default();
        let view = viewer.get_view(&rich).unwrap();
        assert_eq!(view.items().len(), 2);
    }
}
