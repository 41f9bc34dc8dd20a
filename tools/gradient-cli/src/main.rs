// Command-line front end for Gaussian CSS gradients.
//
// Usage:
//   gradient-cli [--config <file.toml>] color [--start <hex>] [--end <hex>] [--stops N] ...
//   gradient-cli mask [--stops N] [--mean M] [--std-dev S] [--shape TAG]
//   gradient-cli mix <color1> <color2> <weight>
//   gradient-cli css [--mask] [--reverse]
//   gradient-cli shapes

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gauss_gradient::{CssStyle, GaussGradient, GradientConfig, GradientShape};

mod logging;

use logging::{init_logging, LogColor, LoggingConfig};

#[derive(Parser)]
#[command(name = "gradient-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gaussian-weighted CSS gradient generator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color log output on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogColor::Auto)]
    color: LogColor,

    /// TOML file with gradient parameters; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a two-color gradient descriptor
    Color {
        #[command(flatten)]
        curve: CurveArgs,

        /// Color at the curve's peak
        #[arg(long)]
        start: Option<String>,

        /// Color the curve falls off toward
        #[arg(long)]
        end: Option<String>,

        /// Swap start and end colors
        #[arg(short, long)]
        reverse: bool,

        /// Also print the raw weight samples, one per line
        #[arg(short, long)]
        weights: bool,
    },

    /// Print an opacity mask descriptor
    Mask {
        #[command(flatten)]
        curve: CurveArgs,

        /// Also print the raw weight samples, one per line
        #[arg(short, long)]
        weights: bool,
    },

    /// Mix two colors; weight is the percentage of the first color
    Mix {
        color1: String,
        color2: String,
        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },

    /// Print the CSS declaration block for the preview layer
    Css {
        #[command(flatten)]
        curve: CurveArgs,

        /// Append a mask-image built from the same curve
        #[arg(short, long)]
        mask: bool,

        /// Swap start and end colors
        #[arg(short, long)]
        reverse: bool,
    },

    /// List supported shape tags
    Shapes,
}

/// Curve parameters shared by every gradient command.
#[derive(Args, Debug, Default)]
struct CurveArgs {
    /// Number of stops
    #[arg(short = 'n', long)]
    stops: Option<usize>,

    /// Peak position; values outside [0, 1) put the peak off-screen
    #[arg(long, allow_negative_numbers = true)]
    mean: Option<f64>,

    /// Standard deviation of the curve
    #[arg(long)]
    std_dev: Option<f64>,

    /// Gradient function, e.g. radial-gradient or linear-gradient
    #[arg(long)]
    shape: Option<GradientShape>,
}

impl CurveArgs {
    fn apply(&self, config: &mut GradientConfig) {
        if let Some(n) = self.stops {
            config.stop_count = n;
        }
        if let Some(m) = self.mean {
            config.mean = m;
        }
        if let Some(s) = self.std_dev {
            config.std_dev = s;
        }
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(
        LoggingConfig::default()
            .with_verbose(cli.verbose)
            .with_color(cli.color),
    );

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Color {
            curve,
            start,
            end,
            reverse,
            weights,
        } => cmd_color(config, &curve, start, end, reverse, weights),
        Commands::Mask { curve, weights } => cmd_mask(config, &curve, weights),
        Commands::Mix {
            color1,
            color2,
            weight,
        } => cmd_mix(&color1, &color2, weight),
        Commands::Css {
            curve,
            mask,
            reverse,
        } => cmd_css(config, &curve, mask, reverse),
        Commands::Shapes => {
            cmd_shapes();
            Ok(())
        }
    }
}

fn cmd_color(
    mut config: GradientConfig,
    curve: &CurveArgs,
    start: Option<String>,
    end: Option<String>,
    reverse: bool,
    weights: bool,
) -> Result<()> {
    curve.apply(&mut config);
    if let Some(start) = start {
        config.start_color = start;
    }
    if let Some(end) = end {
        config.end_color = end;
    }
    if reverse {
        config = config.reversed();
    }
    let gradient = config
        .build_color_gradient()
        .context("failed to build color gradient")?;
    print_gradient(&gradient, weights);
    Ok(())
}

fn cmd_mask(mut config: GradientConfig, curve: &CurveArgs, weights: bool) -> Result<()> {
    curve.apply(&mut config);
    let gradient = config
        .build_mask_gradient()
        .context("failed to build mask gradient")?;
    print_gradient(&gradient, weights);
    Ok(())
}

fn cmd_mix(color1: &str, color2: &str, weight: f64) -> Result<()> {
    let mixed = gauss_gradient::mix(color1, color2, weight)
        .with_context(|| format!("failed to mix {} and {}", color1, color2))?;
    println!("{}", mixed);
    Ok(())
}

fn cmd_css(mut config: GradientConfig, curve: &CurveArgs, mask: bool, reverse: bool) -> Result<()> {
    curve.apply(&mut config);
    if reverse {
        config = config.reversed();
    }
    let style = if mask {
        CssStyle::with_mask(&config)
    } else {
        CssStyle::from_config(&config)
    }
    .context("failed to build CSS")?;
    println!("{}", style);
    Ok(())
}

fn cmd_shapes() {
    for shape in GradientShape::ALL {
        println!("{}", shape);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GradientConfig> {
    match path {
        Some(p) => GradientConfig::load_from_file(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(GradientConfig::default()),
    }
}

fn print_gradient(gradient: &GaussGradient, weights: bool) {
    println!("{}", gradient.descriptor);
    if weights {
        for w in &gradient.weights {
            println!("{}", w);
        }
    }
}
