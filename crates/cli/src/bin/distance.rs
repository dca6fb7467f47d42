use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cosmic_distance_ladder::config::{self, WidgetDefaults};
use cosmic_distance_ladder::export::{chart, is_stdout, snapshot};
use cosmic_distance_ladder::scale::catalogue::{
    default_scale_entries, default_star_classes, scale_entries_from_config,
    star_classes_from_config,
};
use cosmic_distance_ladder::scale::hr::{format_luminosity_tick, format_temperature_tick};
use cosmic_distance_ladder::scale::{HrDiagram, ScaleChart, format_tick};
use cosmic_distance_ladder::session::{InputField, SessionState};

#[path = "distance/logging.rs"]
mod logging;

use logging::{LogFormat, init_logging};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Cosmic distance calculators and logarithmic scale charts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only)
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    /// Widget defaults (TOML); falls back to the course defaults
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Write a JSON snapshot of the calculator result (`-` for stdout)
    #[arg(long, global = true)]
    json: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Simulated parallax for a position along Earth's orbit
    Parallax {
        /// Orbital phase fraction in [0, 1]
        #[arg(long, conflicts_with = "slider")]
        phase: Option<f64>,

        /// Orbital slider position in 0..=100
        #[arg(long)]
        slider: Option<f64>,
    },

    /// Cepheid variable distance from pulsation period and apparent magnitude
    Cepheid {
        /// Pulsation period in days
        #[arg(long, allow_negative_numbers = true)]
        period: Option<f64>,

        /// Apparent magnitude (m)
        #[arg(long, allow_negative_numbers = true)]
        magnitude: Option<f64>,
    },

    /// Galaxy distance from redshift via Hubble's law
    Redshift {
        /// Redshift (z)
        #[arg(short = 'z', long, allow_negative_numbers = true)]
        redshift: Option<f64>,

        /// Hubble constant in km/s/Mpc
        #[arg(long, allow_negative_numbers = true)]
        hubble: Option<f64>,
    },

    /// Distance-scale comparison chart on a logarithmic axis
    Scale {
        /// Catalogue file (YAML/TOML) or directory of TOML records
        #[arg(long)]
        catalogue: Option<PathBuf>,

        /// Axis length in pixels
        #[arg(long, default_value_t = 800.0)]
        extent: f64,

        /// Write chart rows as CSV (`-` for stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Hertzsprung-Russell classification chart coordinates
    Hr {
        /// Star-class catalogue file (YAML/TOML) or directory of TOML records
        #[arg(long)]
        classes: Option<PathBuf>,

        /// Plot width in pixels
        #[arg(long, default_value_t = 600.0)]
        width: f64,

        /// Plot height in pixels
        #[arg(long, default_value_t = 380.0)]
        height: f64,

        /// Write plotted points as CSV (`-` for stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter(), cli.log_format)?;

    let defaults = match &cli.defaults {
        Some(path) => config::load_widget_defaults(path)?,
        None => WidgetDefaults::default(),
    };

    match &cli.command {
        Command::Parallax { phase, slider } => {
            let mut session = SessionState::parallax(&defaults)?;
            if let Some(phase) = phase {
                session.set_field(InputField::OrbitalPhase, *phase)?;
            }
            if let Some(slider) = slider {
                session.set_field(InputField::SliderPosition, *slider)?;
            }
            report("Parallax", &session, cli.json.as_deref())
        }
        Command::Cepheid { period, magnitude } => {
            let mut session = SessionState::cepheid(&defaults)?;
            if let Some(period) = period {
                session.set_field(InputField::PeriodDays, *period)?;
            }
            if let Some(magnitude) = magnitude {
                session.set_field(InputField::ApparentMagnitude, *magnitude)?;
            }
            report("Cepheid Variable", &session, cli.json.as_deref())
        }
        Command::Redshift { redshift, hubble } => {
            let mut session = SessionState::redshift(&defaults)?;
            if let Some(z) = redshift {
                session.set_field(InputField::Redshift, *z)?;
            }
            if let Some(h0) = hubble {
                session.set_field(InputField::HubbleConstant, *h0)?;
            }
            report("Redshift", &session, cli.json.as_deref())
        }
        Command::Scale {
            catalogue,
            extent,
            csv,
        } => run_scale(catalogue.as_deref(), *extent, csv.as_deref()),
        Command::Hr {
            classes,
            width,
            height,
            csv,
        } => run_hr(classes.as_deref(), *width, *height, csv.as_deref()),
    }
}

fn report(title: &str, session: &SessionState, json: Option<&Path>) -> anyhow::Result<()> {
    let snapshot = session.snapshot();
    if let Some(path) = json {
        snapshot::write_json(path, std::slice::from_ref(&snapshot))?;
        if is_stdout(path) {
            return Ok(());
        }
    }

    println!("=== {title} Distance ===");
    for row in &snapshot.rows {
        println!("{:<32}: {}", row.label, row.value);
    }
    Ok(())
}

fn run_scale(catalogue: Option<&Path>, extent: f64, csv: Option<&Path>) -> anyhow::Result<()> {
    let entries = match catalogue {
        Some(path) => scale_entries_from_config(&config::load_scale_entries(path)?)?,
        None => default_scale_entries(),
    };
    let chart = ScaleChart::new(entries, extent)?;
    let items = chart.items();

    if let Some(path) = csv {
        chart::write_scale_csv_to_path(path, &items)?;
        if is_stdout(path) {
            return Ok(());
        }
    }

    let (floor, ceiling) = chart.axis().domain();
    println!(
        "=== Cosmic Distance Scale (logarithmic, {} to {} ly over {extent} px) ===",
        format_tick(floor),
        format_tick(ceiling)
    );
    for item in &items {
        println!(
            "{:<32} {:<15} {:>12} {:>9.1}",
            item.label,
            item.category.to_string(),
            item.value_label,
            item.position
        );
    }
    Ok(())
}

fn run_hr(classes: Option<&Path>, width: f64, height: f64, csv: Option<&Path>) -> anyhow::Result<()> {
    let classes = match classes {
        Some(path) => star_classes_from_config(&config::load_star_classes(path)?)?,
        None => default_star_classes(),
    };
    let diagram = HrDiagram::new(classes, width, height)?;
    let points = diagram.points();

    if let Some(path) = csv {
        chart::write_hr_csv_to_path(path, &points)?;
        if is_stdout(path) {
            return Ok(());
        }
    }

    println!("=== Hertzsprung-Russell Diagram ({width} x {height} px) ===");
    for point in &points {
        println!(
            "{:<12} T = {:>8} K  L = {:>9} L☉  x = {:>6.1}  y = {:>6.1}",
            point.spectral_type,
            format_temperature_tick(point.temperature_k),
            format_luminosity_tick(point.luminosity_solar),
            point.x,
            point.y
        );
    }
    Ok(())
}
