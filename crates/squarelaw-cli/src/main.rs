//! Squarelaw CLI - N-MOSFET I_D vs V_DS characteristic plotter.

mod output;
mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use squarelaw_sweep::{Chart, ChartRenderer, SweepConfig, SweepDriver, TableRenderer};

use crate::output::print_summary;
use crate::render::SvgRenderer;

#[derive(Parser, Debug)]
#[command(name = "squarelaw")]
#[command(about = "Square-law N-MOSFET drain characteristic (I_D vs V_DS) plotter")]
#[command(version)]
struct Cli {
    /// JSON configuration file; missing fields use the built-in device
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output SVG file
    #[arg(short, long, default_value = "id_vds.svg")]
    output: PathBuf,

    /// Gate-source voltages to sweep (V), replacing the configured set
    #[arg(long = "vgs", value_name = "VOLTS", num_args = 1.., allow_negative_numbers = true)]
    vgs: Vec<f64>,

    /// Print the sweep as a table
    #[arg(long)]
    print: bool,

    /// Print the chart data as JSON instead of the summary
    #[arg(long, conflicts_with = "print")]
    json: bool,

    /// Do not write the SVG chart
    #[arg(long)]
    no_plot: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<SweepConfig> {
    let mut config = match &cli.config {
        Some(path) => SweepConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => SweepConfig::default(),
    };
    if !cli.vgs.is_empty() {
        config = config.with_vgs_values(cli.vgs.clone());
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let driver = SweepDriver::new(config).context("invalid device or sweep parameters")?;
    let result = driver.run();
    let chart = Chart::from_sweep(&result, &driver.config().chart)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        print_summary(&driver, &result)?;
    }

    if cli.print {
        let mut table = TableRenderer::new(io::stdout().lock());
        table.render(&chart).context("writing table")?;
    }

    if !cli.no_plot {
        let mut svg = SvgRenderer::new(&cli.output);
        svg.render(&chart)?;
        if !cli.json {
            println!("Chart written to {}", svg.path().display());
        }
    }

    Ok(())
}
