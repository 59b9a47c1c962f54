//! cabinetkit - cabinet cut lists and drawings from the command line

use anyhow::{Context, Result};
use cabinetkit::report::{cut_list_table, design_summary, sizes_table};
use cabinetkit::{
    drawing_svg, generate_design, init_logging, CabinetArchetype, CabinetDesign, Config,
    CutList, DrawingTier, ViewMode,
};
use cabinetkit_construction::{available_heights, DoorStyle};
use cabinetkit_core::units::parse_length;
use cabinetkit_core::MeasurementSystem;
use cabinetkit_settings::default_config_path;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "cabinetkit")]
#[command(about = "Parametric cabinet cut lists and technical drawings", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print lengths in millimetres
    #[arg(long, global = true)]
    metric: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported widths and heights of every archetype
    Sizes,
    /// Build a cabinet and print its parts
    Generate {
        #[command(flatten)]
        cabinet: CabinetArgs,
        /// Print the full design as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the cut list and material order for a cabinet
    Cutlist {
        #[command(flatten)]
        cabinet: CabinetArgs,
        /// Print the cut list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw a cabinet as SVG
    Draw {
        #[command(flatten)]
        cabinet: CabinetArgs,
        /// plan, elevation or isometric
        #[arg(long)]
        view: Option<ViewMode>,
        /// basic or detailed
        #[arg(long)]
        tier: Option<DrawingTier>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CabinetArgs {
    /// base, wall or tall
    #[arg(short = 't', long = "type")]
    archetype: CabinetArchetype,
    /// Nominal width, e.g. 24 or 24"
    #[arg(short = 'W', long)]
    width: String,
    /// Nominal height; defaults to the archetype's first ladder height
    #[arg(short = 'H', long)]
    height: Option<String>,
    /// Number of adjustable shelves
    #[arg(long)]
    shelves: Option<i32>,
    /// Omit adjustable shelves and their pin rows
    #[arg(long, conflicts_with = "shelves")]
    no_shelves: bool,
    /// slab or shaker
    #[arg(long)]
    door_style: Option<DoorStyle>,
}

impl CabinetArgs {
    fn design(&self, config: &Config, system: MeasurementSystem) -> Result<CabinetDesign> {
        let width = parse_length(&self.width, system)
            .map_err(|e| anyhow::anyhow!("Invalid width '{}': {}", self.width, e))?;
        let height = match &self.height {
            Some(text) => parse_length(text, system)
                .map_err(|e| anyhow::anyhow!("Invalid height '{}': {}", text, e))?,
            None => available_heights(self.archetype)
                .first()
                .copied()
                .context("archetype has no heights")?,
        };

        let mut configuration = config.defaults.configuration;
        if let Some(count) = self.shelves {
            configuration.has_adjustable_shelf = count > 0;
            configuration.shelf_count = count;
        }
        if self.no_shelves {
            configuration.has_adjustable_shelf = false;
        }
        if let Some(style) = self.door_style {
            configuration.door_style = style;
        }

        debug!(archetype = %self.archetype, width, height, "generating design");
        let design = generate_design(
            self.archetype,
            width,
            height,
            config.defaults.material,
            configuration,
        )?;
        Ok(design)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => match default_config_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(e) => {
                debug!("{}", e);
                Config::default()
            }
        },
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    debug!(
        "cabinetkit {} built {}",
        cabinetkit::VERSION,
        cabinetkit::BUILD_DATE
    );

    let config = load_config(cli.config.as_deref())?;
    let system = if cli.metric {
        MeasurementSystem::Metric
    } else {
        MeasurementSystem::Imperial
    };

    match cli.command {
        Commands::Sizes => {
            print!("{}", sizes_table());
        }
        Commands::Generate { cabinet, json } => {
            let design = cabinet.design(&config, system)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&design)?);
            } else {
                print!("{}", design_summary(&design, system));
                for component in &design.components {
                    println!("  {} x{}", component.name(), component.quantity());
                }
            }
        }
        Commands::Cutlist { cabinet, json } => {
            let design = cabinet.design(&config, system)?;
            let cut_list = CutList::from_design(&design);
            if json {
                println!("{}", serde_json::to_string_pretty(&cut_list)?);
            } else {
                print!("{}", cut_list_table(&cut_list, system));
            }
        }
        Commands::Draw {
            cabinet,
            view,
            tier,
            output,
        } => {
            let design = cabinet.design(&config, system)?;
            let view = view.unwrap_or(config.drawing.view);
            let tier = tier.unwrap_or(config.drawing.tier);
            let svg = drawing_svg(&design, view, tier, &config.svg_options());
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} {} drawing to {}", tier, view, path.display());
                }
                None => print!("{}", svg),
            }
        }
    }

    Ok(())
}
