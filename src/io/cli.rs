//! Command-line interface for painting and labeling PNG tile maps

use crate::algorithm::components::ConnectedComponents;
use crate::brush::{BrushKind, run_gesture};
use crate::geometry::Point;
use crate::io::configuration::{
    COMPONENTS_SUFFIX, DEFAULT_PAINT_COLOR, DEFAULT_SEED, PAINTED_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::image::{
    component_image, component_palette, export_tile_grid, load_tile_grid, save_png,
};
use crate::io::progress::{ProgressManager, Stage};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Clone)]
#[command(name = "gridbrush")]
#[command(
    author,
    version,
    about = "Paint and analyze PNG tile maps with grid brushes"
)]
/// Command-line arguments for the tile map tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Operations offered by the tool
#[derive(Subcommand, Clone)]
pub enum Command {
    /// Replay one brush gesture on a PNG tile map
    Paint(PaintArgs),
    /// Label connected regions of equal color in PNG tile maps
    Components(ComponentsArgs),
}

/// Arguments of the `paint` command
#[derive(Args, Clone)]
pub struct PaintArgs {
    /// Input PNG file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Brush to draw with
    #[arg(short, long, value_enum)]
    pub brush: BrushKind,

    /// Gesture positions as `x,y` pairs: press, drags, release
    #[arg(short, long, value_name = "X,Y", num_args = 1.., required = true)]
    pub path: Vec<Point>,

    /// Paint color as `RRGGBB` or `RRGGBBAA`
    #[arg(short, long, default_value = DEFAULT_PAINT_COLOR, value_parser = parse_color)]
    pub color: [u8; 4],

    /// Output file (defaults to `<input>_painted.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of the `components` command
#[derive(Args, Clone)]
pub struct ComponentsArgs {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Label only the component containing this `x,y` position
    #[arg(short, long, value_name = "X,Y")]
    pub at: Option<Point>,

    /// Color that never connects (`RRGGBB` or `RRGGBBAA`), repeatable
    #[arg(short = 'x', long, value_parser = parse_color)]
    pub obstacle: Vec<[u8; 4]>,

    /// Random seed for component colors
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

/// Parse a hex color given as `RRGGBB` or `RRGGBBAA`, with an optional `#`
///
/// # Errors
///
/// Returns a message if the text is not six or eight hex digits
pub fn parse_color(text: &str) -> std::result::Result<[u8; 4], String> {
    let digits = text.trim().trim_start_matches('#');
    let invalid = || format!("invalid color '{text}': expected RRGGBB or RRGGBBAA");

    if !(digits.len() == 6 || digits.len() == 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut color = [0, 0, 0, u8::MAX];
    for (channel, slot) in color.iter_mut().enumerate().take(digits.len() / 2) {
        let pair = digits
            .get(channel * 2..channel * 2 + 2)
            .ok_or_else(invalid)?;
        *slot = u8::from_str_radix(pair, 16).map_err(|_parse_error| invalid())?;
    }
    Ok(color)
}

/// Output file next to `input` with `suffix` appended to its stem
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

    if let Some(parent) = input.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Apply the gesture of `args` to its input and write the painted grid
///
/// Returns the output path and the number of cells painted. The `fill`
/// brush spreads over cells of the same tile type as the pressed cell.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output cannot be
/// written
pub fn paint_file(args: &PaintArgs) -> Result<(PathBuf, usize)> {
    let mut grid = load_tile_grid(&args.input)?;

    let cells = {
        let source = &grid;
        let mut brush = args
            .brush
            .build(|seed, current, candidate| source.same_tile(seed, current, candidate));
        run_gesture(&mut brush, &args.path)
    };
    let painted = grid.paint(&cells, args.color);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| output_path(&args.input, PAINTED_SUFFIX));
    export_tile_grid(&grid, &output)?;

    Ok((output, painted))
}

/// Orchestrates the commands with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (!cli.quiet).then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Paint(args) => {
                let (output, painted) = paint_file(&args)?;
                self.report(&[format!("{}: {painted} cells painted", output.display())]);
                Ok(())
            }
            Command::Components(args) => self.process_components(&args),
        }
    }

    fn process_components(&mut self, args: &ComponentsArgs) -> Result<()> {
        let files = self.collect_files(args)?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut summaries = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let count = self.label_file(args, file, index)?;
            summaries.push(format!("{}: {count} components", file.display()));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        self.report(&summaries);

        Ok(())
    }

    fn collect_files(&self, args: &ComponentsArgs) -> Result<Vec<PathBuf>> {
        let is_png = |path: &Path| path.extension().and_then(|s| s.to_str()) == Some("png");

        if args.target.is_file() {
            if is_png(&args.target) {
                if self.should_process_file(args, &args.target) {
                    Ok(vec![args.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a PNG image"))
            }
        } else if args.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&args.target)? {
                let path = entry?.path();
                let is_output = path
                    .file_stem()
                    .is_some_and(|stem| stem.to_string_lossy().ends_with(COMPONENTS_SUFFIX));
                if is_png(&path) && !is_output && self.should_process_file(args, &path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, args: &ComponentsArgs, input_path: &Path) -> bool {
        if args.no_skip {
            return true;
        }

        let exists = output_path(input_path, COMPONENTS_SUFFIX).exists();
        if exists {
            self.report(&[format!("Skipping: {} (output exists)", input_path.display())]);
        }
        !exists
    }

    fn label_file(
        &mut self,
        args: &ComponentsArgs,
        input_path: &Path,
        index: usize,
    ) -> Result<usize> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut grid = load_tile_grid(input_path)?;
        grid.mark_obstacles(&args.obstacle);
        self.advance(index, Stage::Computing);

        let region = grid.bounds();
        let mut components = ConnectedComponents::new();
        match args.at {
            Some(at) => {
                if components.label_from(region, &grid, at).is_none() {
                    return Err(invalid_parameter(
                        "at",
                        &at,
                        &format!(
                            "position lies outside the {}x{} image",
                            grid.width(),
                            grid.height()
                        ),
                    ));
                }
            }
            None => components.label_all(region, &grid),
        }
        self.advance(index, Stage::Writing);

        let colors = component_palette(components.component_count(), args.seed);
        save_png(
            &component_image(&components, &colors),
            &output_path(input_path, COMPONENTS_SUFFIX),
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(components.component_count())
    }

    fn advance(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, stage);
        }
    }

    // Allow print for user feedback once progress bars are cleared
    #[allow(clippy::print_stderr)]
    fn report(&self, lines: &[String]) {
        if self.cli.quiet {
            return;
        }
        for line in lines {
            eprintln!("{line}");
        }
    }
}
