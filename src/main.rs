use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rs_2r_kinematics::config::DrawingConfig;
use rs_2r_kinematics::kinematics_impl::TwoLinkKinematics;
use rs_2r_kinematics::parameters::Parameters;
use rs_2r_kinematics::plot;
use rs_2r_kinematics::shapes::Shape;
use rs_2r_kinematics::trajectory::Trajectory;
use rs_2r_kinematics::utils::dump_trajectory;

/// Draws letters and circles with a planar two-link arm: solves inverse kinematics for every
/// target point, prints the joint angles and plots targets against the recomputed positions.
#[derive(Parser)]
#[command(name = "rs-2r-kinematics", version)]
struct Args {
    /// YAML file with the drawing configuration. Command line values override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the first link
    #[arg(long)]
    l1: Option<f64>,

    /// Length of the second link
    #[arg(long)]
    l2: Option<f64>,

    /// Shape to draw, may be repeated (default: m, circle, n)
    #[arg(long = "shape", value_enum)]
    shapes: Vec<Shape>,

    /// Radius of the circle
    #[arg(long)]
    radius: Option<f64>,

    /// Number of points sampled on the circle
    #[arg(long)]
    samples: Option<usize>,

    /// Directory for the SVG plots
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Only print joint angles, do not write plots
    #[arg(long)]
    no_plot: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn build_config(args: &Args) -> Result<DrawingConfig> {
    let mut config = match &args.config {
        Some(path) => DrawingConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?,
        None => DrawingConfig::default(),
    };

    if args.l1.is_some() || args.l2.is_some() {
        let l1 = args.l1.unwrap_or(config.parameters.l1());
        let l2 = args.l2.unwrap_or(config.parameters.l2());
        config.parameters = Parameters::new(l1, l2)?;
    }
    if !args.shapes.is_empty() {
        config.shapes = args.shapes.clone();
    }
    if let Some(radius) = args.radius {
        config.circle_radius = radius;
    }
    if let Some(samples) = args.samples {
        config.sample_count = samples;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    info!("Arm:\n{}", config.parameters.to_yaml());
    let robot = TwoLinkKinematics::new(config.parameters);

    if !args.no_plot {
        std::fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("Failed to create output directory: {}", args.output_dir.display()))?;
    }

    for shape in &config.shapes {
        let points = config.points(*shape);
        let trajectory = Trajectory::compute(&robot, shape.title(), &points);
        dump_trajectory(&trajectory);

        for solution in trajectory.unverified(config.tolerance) {
            warn!("Point {} recomputed {:.3e} away from the target", solution.index + 1, solution.error());
        }

        if !args.no_plot {
            let path = args.output_dir.join(format!("{}.svg", shape.name()));
            plot::save(&trajectory, &robot, &path)
                .with_context(|| format!("Failed to write plot: {}", path.display()))?;
            info!("Plot written to {}", path.display());
        }
    }
    Ok(())
}
