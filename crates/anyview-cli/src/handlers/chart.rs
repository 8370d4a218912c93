use anyhow::Result;
use anyview_render::{BarChartViewer, PairBarChartViewer, Size1, Size2};
use std::path::Path;

pub fn handle(file: &Path, width: f64, height: f64, axis_width: f64, pair: bool) -> Result<()> {
    let value = super::load_value(file)?;
    let chart = BarChartViewer {
        size: Size2::px(width, height),
        axis_width: if axis_width > 0.0 {
            Some(Size1::px(axis_width))
        } else {
            None
        },
        ..BarChartViewer::default()
    };

    let view = if pair {
        PairBarChartViewer::new(chart).get_view(&value)?
    } else {
        chart.get_view(&value)?
    };

    for line in view.html_lines() {
        println!("{}", line);
    }
    Ok(())
}
