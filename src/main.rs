//! Chart Plot CLI
//!
//! Renders an empty chart with a margin-aware plot area to SVG.
//!
//! Usage:
//!   chart-plot [OPTIONS]
//!
//! Options:
//!   -W, --width <PX>        Chart width [default: 500]
//!   -H, --height <PX>       Chart height [default: 300]
//!   -o, --options <FILE>    Plot options file (TOML format)
//!   --top/--right/--bottom/--left <PX>  Override a single margin
//!   -g, --group <CLASS>     Add a plot group (repeatable)
//!   --compact               Single-line output
//!   --fragment              Omit the XML declaration
//!   -v, --verbose           Log layout steps to stderr
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};

use chart_plot::{plot_chart, MarginSpec, PlotOptions, SvgConfig};

#[derive(Parser)]
#[command(name = "chart-plot")]
#[command(about = "Render a chart skeleton with a margin-aware plot area")]
struct Cli {
    /// Chart width in pixels
    #[arg(short = 'W', long, default_value_t = 500.0)]
    width: f64,

    /// Chart height in pixels
    #[arg(short = 'H', long, default_value_t = 300.0)]
    height: f64,

    /// Plot options file (TOML format)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Top margin, overrides the options file
    #[arg(long, allow_negative_numbers = true)]
    top: Option<f64>,

    /// Right margin, overrides the options file
    #[arg(long, allow_negative_numbers = true)]
    right: Option<f64>,

    /// Bottom margin, overrides the options file
    #[arg(long, allow_negative_numbers = true)]
    bottom: Option<f64>,

    /// Left margin, overrides the options file
    #[arg(long, allow_negative_numbers = true)]
    left: Option<f64>,

    /// CSS class of a plot group to add (repeatable)
    #[arg(short, long = "group")]
    groups: Vec<String>,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Omit the XML declaration
    #[arg(long)]
    fragment: bool,

    /// Log layout steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn margin_overrides(&self) -> MarginSpec {
        MarginSpec {
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            left: self.left,
        }
    }

    fn has_margin_overrides(&self) -> bool {
        self.margin_overrides() != MarginSpec::default()
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // Load options
    let mut options = match &cli.options {
        Some(path) => match PlotOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PlotOptions::default(),
    };

    if cli.has_margin_overrides() {
        let base = options.initial_margins();
        options.margins = Some(base.merge(cli.margin_overrides()));
    }

    let mut plot = match plot_chart(cli.width, cli.height, &options) {
        Ok(plot) => plot,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for class in &cli.groups {
        plot.new_plot_group(Some(class), None);
    }

    info!(
        width = plot.plot_width(),
        height = plot.plot_height(),
        groups = cli.groups.len(),
        "rendering chart"
    );

    let config = SvgConfig::new()
        .with_pretty_print(!cli.compact)
        .with_standalone(!cli.fragment);
    println!("{}", plot.render(&config));
}
