//! CLI command definitions and dispatch.

pub mod config;
pub mod fields;
pub mod list;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use market_core::config::AppConfig;
use market_core::error::AppError;
use market_core::types::record::{Record, RecordSchema};
use market_entity::{Complaint, LogEntry, Product, Stall, User};

/// Seamarket — marketplace admin list views
#[derive(Debug, Parser)]
#[command(name = "market", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search, filter, sort and page through a record collection
    List(list::ListArgs),
    /// Show the searchable, filterable and sortable fields of an entity
    Fields(fields::FieldsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

/// Record collections shown in the admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    /// Buyer and seller complaints
    Complaints,
    /// Administrative activity log
    Logs,
    /// Marketplace accounts
    Users,
    /// Products listed by stalls
    Products,
    /// Seller stalls
    Stalls,
}

impl EntityKind {
    /// Schema of the entity's record type.
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            Self::Complaints => Complaint::schema(),
            Self::Logs => LogEntry::schema(),
            Self::Users => User::schema(),
            Self::Products => Product::schema(),
            Self::Stalls => Stall::schema(),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, config, self.format).await,
            Commands::Fields(args) => fields::execute(args, self.format),
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
