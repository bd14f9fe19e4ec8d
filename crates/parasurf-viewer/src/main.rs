//! parasurf CLI - build torus and curve geometry without a window
//!
//! Applies a script of viewer key presses to a starting state and prints the
//! resulting geometry summary, or the full buffers as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use parasurf_core::Validate;
use parasurf_geometry::CurveKind;
use parasurf_mesh::{ShadingMode, TorusColor};
use parasurf_render::{
    parse_script, CurveCommand, CurveController, TorusCommand, TorusController,
};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use report::{CurveReport, TorusReport};

#[derive(Parser)]
#[command(name = "parasurf")]
#[command(about = "Parametric torus and curve geometry generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tessellate a torus
    Torus(TorusArgs),
    /// Sample a Bezier or B-spline curve through editable control points
    Curve(CurveArgs),
}

#[derive(Args)]
struct TorusArgs {
    /// JSON file with torus parameters and shading
    #[arg(long)]
    config: Option<PathBuf>,
    /// Normal mode: none, flat or smooth
    #[arg(long)]
    shading: Option<ShadingMode>,
    #[arg(long)]
    slices: Option<u32>,
    #[arg(long)]
    loops: Option<u32>,
    /// Major radius
    #[arg(long)]
    major: Option<f64>,
    /// Minor radius
    #[arg(long)]
    minor: Option<f64>,
    /// Use the gray preset instead of orange
    #[arg(long)]
    gray: bool,
    /// Key presses to apply, e.g. "q,q,w,z"
    #[arg(long, default_value = "")]
    commands: String,
    /// Print the full state and buffers as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CurveArgs {
    /// JSON file with control points, resolution and kind
    #[arg(long)]
    config: Option<PathBuf>,
    /// Curve kind: bezier or bspline
    #[arg(long, value_parser = parse_kind)]
    kind: Option<CurveKind>,
    #[arg(long)]
    resolution: Option<f64>,
    /// Key presses to apply, e.g. "e,d,d,z,f"
    #[arg(long, default_value = "")]
    commands: String,
    #[arg(long)]
    json: bool,
}

fn parse_kind(s: &str) -> std::result::Result<CurveKind, String> {
    match s.to_ascii_lowercase().as_str() {
        "bezier" => Ok(CurveKind::Bezier),
        "bspline" | "b-spline" => Ok(CurveKind::BSpline),
        other => Err(format!("unknown curve kind '{}', expected bezier or bspline", other)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Torus(args) => {
            let json = args.json;
            let report = run_torus(args)?;
            render(&report, json)?
        }
        Commands::Curve(args) => {
            let json = args.json;
            let report = run_curve(args)?;
            render(&report, json)?
        }
    };
    println!("{}", output);
    Ok(())
}

fn render<T: serde::Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

fn run_torus(args: TorusArgs) -> Result<TorusReport> {
    let mut config = config::load_torus_config(args.config.as_deref())
        .context("failed to load torus config")?;

    if let Some(shading) = args.shading {
        config.shading = shading;
    }
    if let Some(slices) = args.slices {
        config.params.slice_count = slices;
    }
    if let Some(loops) = args.loops {
        config.params.loop_count = loops;
    }
    if let Some(major) = args.major {
        config.params.major_radius = major;
    }
    if let Some(minor) = args.minor {
        config.params.minor_radius = minor;
    }
    if args.gray {
        config.params.color = TorusColor::Gray.rgba();
    }
    config.params.validate()?;

    let commands: Vec<TorusCommand> =
        parse_script(&args.commands).context("invalid torus command script")?;
    tracing::info!(commands = commands.len(), "building torus");

    let mut controller = TorusController::from_config(config);
    controller.apply_all(commands);
    Ok(TorusReport::new(&controller))
}

fn run_curve(args: CurveArgs) -> Result<CurveReport> {
    let mut config = config::load_curve_config(args.config.as_deref())
        .context("failed to load curve config")?;

    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }

    let commands: Vec<CurveCommand> =
        parse_script(&args.commands).context("invalid curve command script")?;
    tracing::info!(commands = commands.len(), "building curve");

    let mut controller = CurveController::from_config(config)?;
    controller.apply_all(commands);
    Ok(CurveReport::new(&controller))
}
