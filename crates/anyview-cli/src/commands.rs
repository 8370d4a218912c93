use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Render {
            file,
            view,
            format,
            depth,
            path,
            skip_empty,
            use_ids,
        } => handlers::render::handle(&file, view, format, depth, path.as_deref(), skip_empty, use_ids),

        Commands::Chart {
            file,
            width,
            height,
            axis_width,
            pair,
        } => handlers::chart::handle(&file, width, height, axis_width, pair),
    }
}

fn show_guidance() {
    println!("anyview - structured document inspector\n");
    println!("Quick commands:");
    println!("  anyview render data.json                  # Tree view of a document");
    println!("  anyview render data.json --view table     # Union-column table");
    println!("  anyview render data.json --format yaml    # Re-serialize as YAML");
    println!("  anyview render data.json --path users/0   # Zoom into a node");
    println!("  anyview chart funnel.json                 # HTML bar chart\n");
    println!("For more options:");
    println!("  anyview --help");
}
