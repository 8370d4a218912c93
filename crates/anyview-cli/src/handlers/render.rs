use crate::types::{OutputFormat, ViewStyle};
use anyhow::Result;
use anyview_core::Node;
use anyview_render::viewers::Viewer;
use anyview_render::{
    OneLineViewer, SerialViewer, SimpleTextViewer, Size2, SquareViewer, TableViewer, TreeViewer,
    ViewItem,
};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

const DEFAULT_SQUARE_SIZE: (f64, f64) = (640.0, 480.0);

pub fn handle(
    file: &Path,
    view: ViewStyle,
    format: OutputFormat,
    depth: Option<u32>,
    path: Option<&str>,
    skip_empty: bool,
    use_ids: bool,
) -> Result<()> {
    let value = super::load_value(file)?;
    let mut node = Node::wrap(value);
    if let Some(path) = path {
        node = node.get_node(path)?;
    }

    match format {
        OutputFormat::Json => {
            let serial = SerialViewer {
                depth,
                use_ids,
                skip_empty,
            };
            println!("{}", serial.get_view(&node).json_pretty()?);
        }
        OutputFormat::Yaml => {
            let serial = SerialViewer {
                depth,
                use_ids,
                skip_empty,
            };
            print!("{}", serial.get_view(&node).yaml()?);
        }
        OutputFormat::Plain => {
            print_header(file, &node);
            println!("{}", build_view(&node, view, depth)?.text());
        }
        OutputFormat::Md => {
            for line in build_view(&node, view, depth)?.md_lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Html => {
            for line in build_view(&node, view, depth)?.html_lines() {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn build_view(node: &Node, view: ViewStyle, depth: Option<u32>) -> Result<ViewItem> {
    let item = match view {
        ViewStyle::OneLine => OneLineViewer.render(node)?,
        ViewStyle::Simple => SimpleTextViewer {
            depth: depth.unwrap_or(1),
            ..SimpleTextViewer::default()
        }
        .render(node)?,
        ViewStyle::Tree => TreeViewer::with_depth(
            depth.unwrap_or(anyview_render::viewers::tree::DEFAULT_TREE_DEPTH),
        )
        .render(node)?,
        ViewStyle::Table => TableViewer::default().render(node)?,
        ViewStyle::Square => {
            let size = Size2::px(DEFAULT_SQUARE_SIZE.0, DEFAULT_SQUARE_SIZE.1);
            let viewer = match depth {
                Some(depth) => SquareViewer::new(size).with_depth(depth as i32),
                None => SquareViewer::new(size),
            };
            viewer.render(node)?
        }
    };
    Ok(item)
}

/// A dimmed context line above interactive plain output
fn print_header(file: &Path, node: &Node) {
    if std::io::stdout().is_terminal() {
        println!(
            "{} {}",
            file.display().to_string().dimmed(),
            format!("({})", node.hint()).bright_black()
        );
        println!();
    }
}
