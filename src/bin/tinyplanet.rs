use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "tinyplanet", version)]
struct Cli {
    /// Only log warnings and errors.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-project an equirectangular image into a tiny-planet view.
    Project(ProjectArgs),
    /// Print (or write) the default projection configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Source image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// JSON projection config. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Use the source image's size for the output.
    #[arg(long)]
    match_source: bool,

    /// Horizontal viewport offset, fraction of the output width (right is positive).
    #[arg(long, allow_hyphen_values = true)]
    offset_hor: Option<f64>,

    /// Vertical viewport offset, fraction of the output height (down is positive).
    #[arg(long, allow_hyphen_values = true)]
    offset_ver: Option<f64>,

    /// Sphere size multiplier (> 0). Larger shows less of the source.
    #[arg(long)]
    scale: Option<f64>,

    /// Rotation about the x axis, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    rotate_x: Option<f64>,

    /// Rotation about the y axis, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    rotate_y: Option<f64>,

    /// Rotation about the z axis, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    rotate_z: Option<f64>,

    /// Sample output rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// How sampling progress is reported.
    #[arg(long, value_enum, default_value_t = ProgressChoice::Bar)]
    progress: ProgressChoice,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProgressChoice {
    /// Terminal progress bar on stderr.
    Bar,
    /// `tracing` info events every 10%.
    Log,
    /// Nothing.
    None,
}

struct BarProgress(ProgressBar);

impl BarProgress {
    fn new() -> anyhow::Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} px ({percent}%) {elapsed_precise}")
                .context("progress bar template")?
                .progress_chars("█▓░"),
        );
        Ok(Self(bar))
    }
}

impl tinyplanet::ProgressSink for BarProgress {
    fn begin(&self, total_pixels: u64) {
        self.0.set_length(total_pixels);
        self.0.set_position(0);
    }

    fn advance(&self, pixels: u64) {
        self.0.inc(pixels);
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

fn make_progress(
    choice: ProgressChoice,
    quiet: bool,
) -> anyhow::Result<Box<dyn tinyplanet::ProgressSink>> {
    if quiet {
        return Ok(Box::new(tinyplanet::NoProgress));
    }
    Ok(match choice {
        ProgressChoice::Bar => Box::new(BarProgress::new()?),
        ProgressChoice::Log => Box::new(tinyplanet::LogProgress::default()),
        ProgressChoice::None => Box::new(tinyplanet::NoProgress),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    match cli.cmd {
        Command::Project(args) => cmd_project(args, cli.quiet),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(args: &ProjectArgs) -> anyhow::Result<tinyplanet::ProjectionConfig> {
    let mut cfg = match &args.config {
        Some(path) => tinyplanet::ProjectionConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => tinyplanet::ProjectionConfig::default(),
    };

    if let Some(w) = args.width {
        cfg.output_width = w;
    }
    if let Some(h) = args.height {
        cfg.output_height = h;
    }
    if args.match_source {
        cfg.match_source_size = true;
    }
    if let Some(v) = args.offset_hor {
        cfg.offset_horizontal = v;
    }
    if let Some(v) = args.offset_ver {
        cfg.offset_vertical = v;
    }
    if let Some(v) = args.scale {
        cfg.scale = v;
    }
    if let Some(deg) = args.rotate_x {
        cfg.rotate_x = deg.to_radians();
    }
    if let Some(deg) = args.rotate_y {
        cfg.rotate_y = deg.to_radians();
    }
    if let Some(deg) = args.rotate_z {
        cfg.rotate_z = deg.to_radians();
    }

    cfg.validate()?;
    Ok(cfg)
}

fn cmd_project(args: ProjectArgs, quiet: bool) -> anyhow::Result<()> {
    let cfg = resolve_config(&args)?;

    let source = tinyplanet::load_source(&args.in_path)?;
    let extent = tinyplanet::Extent::new(source.width(), source.height())?;
    tracing::info!(size = %extent, "image size");

    let projection = tinyplanet::Projection::new(&cfg, extent)?;
    let threading = tinyplanet::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let progress = make_progress(args.progress, quiet)?;

    let (out, stats) =
        tinyplanet::render_projection(&source, &projection, &threading, progress.as_ref())?;
    tracing::info!(
        output = %projection.output(),
        pixels = stats.pixels_total,
        "finished"
    );

    tinyplanet::save_output(&args.out, &out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let json = tinyplanet::ProjectionConfig::default().to_json_pretty()?;
    match args.out {
        Some(path) => {
            tinyplanet::ensure_parent_dir(&path)?;
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write config '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
