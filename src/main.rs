use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use zenbmpedit::{
    DEFAULT_GRID_COLOR, FsStorage, GridColor, Storage, Workspace, add_grid, extract_region,
};

#[derive(Debug, Parser)]
#[clap(
    name = "zenbmpedit",
    version,
    about = "Draw grids on and crop uncompressed BMP files"
)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser)]
struct GlobalOpts {
    /// Directory holding images/, edited_images/ and data/ (default: next to the executable)
    #[clap(short = 'b', long = "base-dir", global = true)]
    base_dir: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(
        arg_required_else_help = true,
        about = "Select a file from images/ for later commands"
    )]
    Select {
        #[clap(required = true)]
        name: String,
    },
    #[clap(about = "Show the selected file")]
    Show,
    #[clap(about = "Clear the selected file")]
    Reset,
    #[clap(arg_required_else_help = true, about = "Draw a grid over the image")]
    Grid {
        /// Grid cell size in pixels
        #[clap(short = 's', long = "size", allow_hyphen_values = true)]
        size: String,
        /// Line color
        #[clap(short = 'c', long = "color", default_value = DEFAULT_GRID_COLOR)]
        color: String,
        /// Output file name inside edited_images/
        #[clap(short = 'o', long = "output")]
        output: String,
        /// Input file (default: the selected file)
        #[clap(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
    #[clap(
        arg_required_else_help = true,
        about = "Crop a rectangle out of the image"
    )]
    Crop {
        /// Width of the cropped image in pixels
        #[clap(long = "width", allow_hyphen_values = true)]
        width: String,
        /// Height of the cropped image in pixels
        #[clap(long = "height", allow_hyphen_values = true)]
        height: String,
        /// Horizontal offset of the crop
        #[clap(short = 'x', long = "x", default_value = "0", allow_hyphen_values = true)]
        x: String,
        /// Vertical offset of the crop, counted in stored rows
        #[clap(short = 'y', long = "y", default_value = "0", allow_hyphen_values = true)]
        y: String,
        /// Output file name inside edited_images/
        #[clap(short = 'o', long = "output")]
        output: String,
        /// Input file (default: the selected file)
        #[clap(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.global_opts.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let workspace = match args.global_opts.base_dir {
        Some(base) => Workspace::new(base),
        None => Workspace::beside_executable()?,
    };

    match args.command {
        Commands::Select { name } => select(&workspace, &name),
        Commands::Show => show(&workspace),
        Commands::Reset => reset(&workspace),
        Commands::Grid {
            size,
            color,
            output,
            input,
        } => {
            let color = normalize_color(&color);
            edit(&workspace, input, &output, |data| {
                add_grid(data, &size, &color).context("adding grid failed")
            })?;
            println!("Grid added.");
            Ok(())
        }
        Commands::Crop {
            width,
            height,
            x,
            y,
            output,
            input,
        } => {
            let x = default_offset(&x);
            let y = default_offset(&y);
            edit(&workspace, input, &output, |data| {
                extract_region(data, &width, &height, x, y).context("cropping failed")
            })?;
            println!("Image cropped.");
            Ok(())
        }
    }
}

fn select(workspace: &Workspace, name: &str) -> Result<()> {
    let path = workspace.input_path(name)?;
    workspace
        .session()
        .select(&path)
        .context("could not record the selected file")?;
    println!("Selected: {}", path.display());
    Ok(())
}

fn show(workspace: &Workspace) -> Result<()> {
    match workspace.session().load()? {
        Some(path) => println!("Selected: {}", path.display()),
        None => println!("No file selected."),
    }
    Ok(())
}

fn reset(workspace: &Workspace) -> Result<()> {
    let session = workspace.session();
    if let Some(path) = session.load()? {
        println!("Clearing selection: {}", path.display());
    }
    session.reset().context("could not clear the selection")?;
    println!("Selection cleared.");
    Ok(())
}

/// Read the input, run `op` on it and write the result to `output`.
fn edit(
    workspace: &Workspace,
    input: Option<PathBuf>,
    output: &str,
    op: impl FnOnce(Vec<u8>) -> Result<Vec<u8>>,
) -> Result<()> {
    let input = resolve_input(workspace, input)?;
    let output = workspace.output_path(output)?;

    let data = FsStorage
        .read_bytes(&input)
        .with_context(|| format!("could not read {}", input.display()))?;
    let data = op(data)?;
    FsStorage
        .write_bytes(&output, &data)
        .with_context(|| format!("could not write {}", output.display()))?;
    log::info!("{} -> {}", input.display(), output.display());
    Ok(())
}

fn resolve_input(workspace: &Workspace, input: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path);
    }
    match workspace.session().load()? {
        Some(path) => Ok(path),
        None => bail!(
            "no file selected; run `zenbmpedit select <NAME>` or pass --input (record: {})",
            workspace.record_path().display()
        ),
    }
}

/// Blank means white; otherwise trimmed and lowercased before lookup.
fn normalize_color(color: &str) -> String {
    let color = color.trim().to_lowercase();
    if color.is_empty() {
        GridColor::default().name().to_string()
    } else {
        color
    }
}

/// Blank offsets mean 0.
fn default_offset(offset: &str) -> &str {
    let offset = offset.trim();
    if offset.is_empty() { "0" } else { offset }
}
