use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use countdice::config::{DEFAULT_DIE_AREA, DEFAULT_DOT_AREA, DEFAULT_THRESHOLD};
use countdice::{AreaRange, ContainmentMode, CountConfig, Pipeline, display, load_image, save_image};

const USAGE: &str = " Usage: countdice <IMAGE> <OUTPUT> [OPTIONS]";
const WINDOW_TITLE: &str = "Labeled Image";

#[derive(Parser)]
#[command(name = "countdice")]
#[command(version, about = "Count the pips on dice in a photograph")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Where to write the annotated image (format from the extension)
    #[arg(value_name = "OUTPUT")]
    output_path: PathBuf,

    /// Gray level above which a pixel counts as die
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Exclusive lower area bound for dice
    #[arg(long, default_value_t = DEFAULT_DIE_AREA.min)]
    die_min_area: f64,

    /// Exclusive upper area bound for dice
    #[arg(long, default_value_t = DEFAULT_DIE_AREA.max)]
    die_max_area: f64,

    /// Exclusive lower area bound for dots
    #[arg(long, default_value_t = DEFAULT_DOT_AREA.min)]
    dot_min_area: f64,

    /// Exclusive upper area bound for dots
    #[arg(long, default_value_t = DEFAULT_DOT_AREA.max)]
    dot_max_area: f64,

    /// Require every point of a dot to be inside its die, not just the first
    #[arg(long)]
    strict_containment: bool,

    /// Do not open a window with the result
    #[arg(long)]
    no_display: bool,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> CountConfig {
        let containment = if self.strict_containment {
            ContainmentMode::AllPoints
        } else {
            ContainmentMode::FirstPoint
        };

        CountConfig::new()
            .with_threshold(self.threshold)
            .with_die_area(AreaRange::new(self.die_min_area, self.die_max_area))
            .with_dot_area(AreaRange::new(self.dot_min_area, self.dot_max_area))
            .with_containment(containment)
    }
}

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(-1);
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(err) = run(args) {
        eprintln!("{:#}", err);
        std::process::exit(-1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let mut pipeline = Pipeline::new()?.with_config(args.config())?;

    log::debug!("Loading image: {:?}", args.image_path);
    let img = load_image(&args.image_path)?;

    // nothing touches the filesystem until the input has decoded
    if let Some(debug_dir) = args.debug_out.clone() {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let output = pipeline.run(img)?;

    save_image(&output.annotated, &args.output_path)?;
    log::debug!("Saved {:?}", args.output_path);

    for (i, die) in output.report.dice.iter().enumerate() {
        println!("Die {} at ({}, {}): {}", i + 1, die.bounds.x, die.bounds.y, die.dots);
    }
    println!("Sum {}", output.report.total);

    if !args.no_display {
        display::show(&output.annotated, WINDOW_TITLE)?;
    }

    Ok(())
}
