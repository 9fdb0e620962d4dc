//! Command-line front end for the reflector geometry generator
//!
//! Usage:
//!   donut-gen [--config <file.json>] [-v] <command> [options]
//!
//! Commands:
//!   dims    Show wavelength and derived diameters
//!   build   Build the full geometry and write it in the chosen format
//!   sweep   Build over a frequency range and print a summary table
//!   stats   Show zone vertex, triangle and copper area figures

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use backfire_donut::config::{ConnectorConfig, DonutConfig, LabelConfig};
use backfire_donut::draw::tessellation::zone_stats;
use backfire_donut::export::{export_spec, ExportFormat};
use backfire_donut::logger::{level_for_verbosity, StderrLogger};
use backfire_donut::{build_geometry_spec, build_sweep, resolve_dimensions};

#[derive(Parser)]
#[command(name = "donut-gen", about = "Backfire reflector board geometry generator", version)]
struct Cli {
    /// JSON config file; missing fields use the built-in defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show wavelength and derived diameters
    Dims {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Build the geometry and write it out
    Build {
        #[command(flatten)]
        overrides: Overrides,

        /// Output format
        #[arg(long, default_value = "json", value_enum)]
        format: FormatArg,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build over a frequency range
    Sweep {
        #[command(flatten)]
        overrides: Overrides,

        /// First frequency in MHz
        #[arg(long)]
        from: f64,

        /// Last frequency in MHz (inclusive)
        #[arg(long)]
        to: f64,

        /// Frequency step in MHz
        #[arg(long, default_value = "10")]
        step: f64,
    },

    /// Show zone statistics
    Stats {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line overrides applied on top of the config file
#[derive(Args, Clone, Default)]
struct Overrides {
    /// Center frequency in MHz
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Literal outer diameter in mm
    #[arg(long)]
    outer_diameter: Option<f64>,

    /// Literal inner diameter in mm
    #[arg(long)]
    inner_diameter: Option<f64>,

    /// Solid disk without a center cutout
    #[arg(long)]
    solid: bool,

    /// Number of mounting holes
    #[arg(long)]
    bolts: Option<usize>,

    /// Bolt-circle diameter in mm
    #[arg(long)]
    bolt_circle: Option<f64>,

    /// Vertices per polygonized circle
    #[arg(long)]
    segments: Option<usize>,

    /// Place the SMA feed connector at the board center (solid disk only)
    #[arg(long)]
    connector: bool,

    /// Label text; adds a default label if the config has none
    #[arg(long)]
    label: Option<String>,

    /// Omit the label
    #[arg(long, conflicts_with = "label")]
    no_label: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    PackedJson,
    Msgpack,
    Binary,
    Xml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::PackedJson => ExportFormat::PackedJson,
            FormatArg::Msgpack => ExportFormat::MsgPack,
            FormatArg::Binary => ExportFormat::Binary,
            FormatArg::Xml => ExportFormat::Xml,
        }
    }
}

impl Overrides {
    fn apply(&self, mut config: DonutConfig) -> DonutConfig {
        if let Some(f) = self.frequency {
            config.frequency_mhz = f;
        }
        if self.outer_diameter.is_some() {
            config.outer_diameter_mm = self.outer_diameter;
        }
        if self.inner_diameter.is_some() {
            config.inner_diameter_mm = self.inner_diameter;
        }
        if self.solid {
            config.annulus = false;
        }
        if let Some(count) = self.bolts {
            config.bolts.count = count;
        }
        if let Some(d) = self.bolt_circle {
            config.bolts.circle_diameter_mm = d;
        }
        if let Some(segments) = self.segments {
            config.segments_per_circle = segments;
        }
        if self.connector {
            config.connector = Some(ConnectorConfig::default());
        }
        if self.no_label {
            config.label = None;
        } else if let Some(text) = &self.label {
            config.label.get_or_insert_with(LabelConfig::default).text = text.clone();
        }
        config
    }
}

fn load_config(path: Option<&PathBuf>, overrides: &Overrides) -> Result<DonutConfig> {
    let base = match path {
        Some(path) => DonutConfig::from_json_file(path)?,
        None => DonutConfig::default(),
    };
    Ok(overrides.apply(base))
}

/// Most frequencies a single sweep may build
const MAX_SWEEP_STEPS: usize = 100_000;

/// Inclusive range with a small tolerance so the last step is not lost to rounding
fn frequency_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    anyhow::ensure!(
        from.is_finite() && to.is_finite(),
        "--from ({}) and --to ({}) must be finite",
        from,
        to
    );
    anyhow::ensure!(step.is_finite() && step > 0.0, "step must be > 0 (got {})", step);
    anyhow::ensure!(to >= from, "--to ({}) must not be below --from ({})", to, from);
    let steps = ((to - from) / step + 1e-9).floor();
    anyhow::ensure!(
        steps < MAX_SWEEP_STEPS as f64,
        "sweep of {}..{} MHz in {} MHz steps exceeds {} frequencies",
        from,
        to,
        step,
        MAX_SWEEP_STEPS
    );
    let count = steps as usize + 1;
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::new(level_for_verbosity(cli.verbose))
        .init()
        .context("Failed to install logger")?;

    match &cli.command {
        Commands::Dims { overrides } => {
            let config = load_config(cli.config.as_ref(), overrides)?;
            let dims = resolve_dimensions(&config)?;
            println!("frequency:       {:>10.3} MHz", config.frequency_mhz);
            println!("wavelength:      {:>10.3} mm", dims.wavelength_mm);
            match dims.inner_diameter_mm {
                Some(d) => println!("inner diameter:  {:>10.3} mm", d),
                None => println!("inner diameter:        none (solid disk)"),
            }
            println!("outer diameter:  {:>10.3} mm", dims.outer_diameter_mm);
            println!("helix diameter:  {:>10.3} mm", dims.helix_diameter_mm);
        }

        Commands::Build { overrides, format, output } => {
            let config = load_config(cli.config.as_ref(), overrides)?;
            let spec = build_geometry_spec(&config)?;
            let bytes = export_spec(&spec, (*format).into())?;
            match output {
                Some(path) => {
                    std::fs::write(path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&bytes).context("Failed to write to stdout")?;
                    stdout.flush()?;
                }
            }
        }

        Commands::Sweep { overrides, from, to, step } => {
            let config = load_config(cli.config.as_ref(), overrides)?;
            let frequencies = frequency_range(*from, *to, *step)?;
            let start = std::time::Instant::now();
            let results = build_sweep(&config, &frequencies);
            log::info!(
                "Swept {} frequencies in {:.2}ms",
                frequencies.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );

            println!("{:>10}  {:>10}  {:>10}  {:>10}  {:>10}", "MHz", "lambda", "inner", "outer", "helix");
            for (f, result) in frequencies.iter().zip(&results) {
                match result {
                    Ok(spec) => {
                        let d = spec.dimensions();
                        let inner = d
                            .inner_diameter_mm
                            .map_or_else(|| "-".to_string(), |v| format!("{:.2}", v));
                        println!(
                            "{:>10.2}  {:>10.2}  {:>10}  {:>10.2}  {:>10.2}",
                            f, d.wavelength_mm, inner, d.outer_diameter_mm, d.helix_diameter_mm
                        );
                    }
                    Err(e) => println!("{:>10.2}  error: {}", f, e),
                }
            }
        }

        Commands::Stats { overrides } => {
            let config = load_config(cli.config.as_ref(), overrides)?;
            let spec = build_geometry_spec(&config)?;
            for zone in spec.zones() {
                let stats = zone_stats(&zone.outline)?;
                println!(
                    "{} ({}): {} vertices, {} triangles, copper {:.1} mm² of {:.1} mm² nominal",
                    zone.layer,
                    zone.net,
                    stats.vertex_count,
                    stats.triangle_count,
                    stats.copper_area_mm2,
                    stats.nominal_area_mm2
                );
            }
        }
    }

    Ok(())
}
