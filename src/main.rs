use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use pagegrid::config::{ConfigError, LayoutConfig};
use pagegrid::coords::PixelPoint;
use pagegrid::editor::{Action, EditorCore};
use pagegrid::item::ElementKind;
use pagegrid::template::{TemplateDocument, TemplateError};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("invalid layout config: {0}")]
    Config(#[from] ConfigError),
    #[error("drop at ({x}, {y}) is outside the page")]
    OutsidePage { x: f64, y: f64 },
    #[error("item {0} not found or locked")]
    CannotDrag(String),
}

#[derive(Parser, Debug)]
#[command(name = "pagegrid", about = "Inspect and edit grid-snapped page templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the occupancy map, item list and overlapping pairs.
    Inspect {
        template: PathBuf,
    },
    /// Drop a new palette element and print the resulting template.
    Drop(DropCommand),
    /// Drag an existing item to a new point and print the resulting template.
    Move(MoveCommand),
}

#[derive(Args, Debug)]
struct Target {
    /// Pointer x in page pixels.
    #[arg(long, allow_negative_numbers = true)]
    x: f64,
    /// Pointer y in page pixels.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,
    /// Overwrite the template file instead of printing to stdout.
    #[arg(long)]
    in_place: bool,
}

#[derive(Args, Debug)]
struct DropCommand {
    template: PathBuf,
    #[arg(long)]
    kind: ElementKind,
    #[command(flatten)]
    target: Target,
}

#[derive(Args, Debug)]
struct MoveCommand {
    template: PathBuf,
    #[arg(long)]
    id: String,
    #[command(flatten)]
    target: Target,
}

fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(%err, "ignoring unreadable .env"),
    }

    let cli = Cli::parse();
    let config = LayoutConfig::from_env()?;

    match cli.command {
        Command::Inspect { template } => run_inspect(&template, config),
        Command::Drop(cmd) => run_drop(cmd, config),
        Command::Move(cmd) => run_move(cmd, config),
    }
}

fn open(path: &Path, config: LayoutConfig) -> Result<(TemplateDocument, EditorCore), CliError> {
    let doc = TemplateDocument::load(path)?;
    let editor = EditorCore::with_items(config, doc.items().to_vec());
    info!(path = %path.display(), items = editor.items().len(), "template loaded");
    Ok((doc, editor))
}

fn run_inspect(path: &Path, config: LayoutConfig) -> Result<(), CliError> {
    let (doc, editor) = open(path, config)?;
    println!("{} ({} items)", doc.display_name(), editor.items().len());
    print!("{}", editor.occupancy().render_ascii());

    for item in editor.items() {
        let origin = item.render_origin(&config.grid);
        println!(
            "{:<24} {:<14} row {:>3} col {:>3}  {}x{}  at ({}, {})",
            item.id, item.kind, item.grid_position.row, item.grid_position.col, item.col_span, item.row_span, origin.x, origin.y,
        );
    }

    let overlaps = editor.store().overlapping_pairs();
    if overlaps.is_empty() {
        println!("no overlaps");
    }
    for (a, b) in overlaps {
        println!("overlap: {a} {b}");
    }
    Ok(())
}

fn run_drop(cmd: DropCommand, config: LayoutConfig) -> Result<(), CliError> {
    let (doc, mut editor) = open(&cmd.template, config)?;
    let point = PixelPoint::new(cmd.target.x, cmd.target.y);
    editor.begin_palette_drag(cmd.kind);
    editor.hover(point);
    let actions = editor.drop_at(point);
    if !actions.iter().any(|a| matches!(a, Action::ItemCreated(_))) {
        return Err(CliError::OutsidePage { x: point.x, y: point.y });
    }
    finish(doc, &editor, &cmd.template, cmd.target.in_place)
}

fn run_move(cmd: MoveCommand, config: LayoutConfig) -> Result<(), CliError> {
    let (doc, mut editor) = open(&cmd.template, config)?;
    let point = PixelPoint::new(cmd.target.x, cmd.target.y);
    if !editor.begin_item_drag(&cmd.id) {
        return Err(CliError::CannotDrag(cmd.id));
    }
    editor.hover(point);
    let actions = editor.drop_at(point);
    if !actions.iter().any(|a| matches!(a, Action::ItemMoved { .. })) {
        return Err(CliError::OutsidePage { x: point.x, y: point.y });
    }
    finish(doc, &editor, &cmd.template, cmd.target.in_place)
}

fn finish(mut doc: TemplateDocument, editor: &EditorCore, path: &Path, in_place: bool) -> Result<(), CliError> {
    doc.data.canvas_items = editor.items().to_vec();
    if in_place {
        doc.save(path)?;
        info!(path = %path.display(), "template written");
    } else {
        println!("{}", doc.to_json_pretty()?);
    }
    Ok(())
}
