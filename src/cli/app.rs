use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::LogFormat;
use crate::filter::{FilterKey, FilterSelection, NO_OP};

/// FA2MS: browse and filter asphalt aging-simulation methods
#[derive(Parser, Debug)]
#[command(name = "fa2ms")]
#[command(version)]
#[command(about = "Fast Asphalt Aging Method Selector")]
#[command(
    long_about = "Browse a catalog of laboratory and field methods for simulating asphalt binder and mixture aging, narrow them by material, climate, goal, status, sustainability, equipment and realism, or serve the catalog over HTTP."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config and FA2MS_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalog read API over HTTP
    Serve {
        /// Address to bind (overrides config and FA2MS_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config and FA2MS_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List methods matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one method in detail
    Show {
        /// Method id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the known values for each filter
    Options,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Serve { .. } => "serve",
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Options => "options",
        }
    }
}

/// One flag per filter key; "all" (the default) leaves a field unconstrained
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Binder, Mixture or Binder/Mixture
    #[arg(long, default_value = NO_OP)]
    pub material_type: String,

    #[arg(long, default_value = NO_OP)]
    pub material_subtype: String,

    /// Records tagged All or Multiple match every zone
    #[arg(long, default_value = NO_OP)]
    pub climate_zone: String,

    /// Records tagged All or Multiple match every goal
    #[arg(long, default_value = NO_OP)]
    pub simulation_goal: String,

    /// Standard, Emerging, Experimental or Obsolete
    #[arg(long, default_value = NO_OP)]
    pub status: String,

    /// Low, Medium, High or Very High
    #[arg(long, default_value = NO_OP)]
    pub sustainability: String,

    /// Substring of the equipment list
    #[arg(long, default_value = NO_OP)]
    pub equipment: String,

    /// Case-insensitive substring of the realism assessment
    #[arg(long, default_value = NO_OP)]
    pub realism: String,
}

impl FilterArgs {
    pub fn into_selection(self) -> FilterSelection {
        FilterSelection::new()
            .with(FilterKey::MaterialType, self.material_type)
            .with(FilterKey::MaterialSubtype, self.material_subtype)
            .with(FilterKey::ClimateZone, self.climate_zone)
            .with(FilterKey::SimulationGoal, self.simulation_goal)
            .with(FilterKey::Status, self.status)
            .with(FilterKey::Sustainability, self.sustainability)
            .with(FilterKey::Equipment, self.equipment)
            .with(FilterKey::Realism, self.realism)
    }
}
