//! Record listing command.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::EntityKind;
use crate::output::{self, OutputFormat};
use market_core::config::AppConfig;
use market_core::error::{AppError, ErrorKind};
use market_core::types::filter::CategoricalFilter;
use market_core::types::record::Record;
use market_core::types::sorting::SortState;
use market_entity::{Complaint, LogEntry, Product, Stall, User};
use market_service::ListView;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Entity stored in the data file
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// Case-insensitive text matched against searchable fields
    #[arg(short, long)]
    pub search: Option<String>,

    /// Categorical filter, repeatable; "all" clears the constraint
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<CategoricalFilter>,

    /// Sort as `field`, `field:asc`, `field:desc` or `-field`
    #[arg(long, value_name = "FIELD[:DIR]")]
    pub sort: Option<SortState>,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Items per page, capped by listing.max_page_size
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match args.entity {
        EntityKind::Complaints => run::<Complaint>(args, config, format).await,
        EntityKind::Logs => run::<LogEntry>(args, config, format).await,
        EntityKind::Users => run::<User>(args, config, format).await,
        EntityKind::Products => run::<Product>(args, config, format).await,
        EntityKind::Stalls => run::<Stall>(args, config, format).await,
    }
}

async fn run<R>(args: &ListArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError>
where
    R: Record + Serialize + DeserializeOwned,
{
    let records: Vec<R> = load_records(&args.data).await?;

    let requested = args.page_size.unwrap_or(config.listing.default_page_size);
    let mut view = ListView::new(records, config.listing.cap_page_size(requested));

    if let Some(term) = &args.search {
        view.set_search(term.as_str());
    }
    for filter in &args.filters {
        view.set_filter(filter.field.as_str(), filter.value.as_str())?;
    }
    if let Some(sort) = &args.sort {
        view.set_sort(sort.clone())?;
    }
    let index = usize::try_from(args.page - 1)
        .map_err(|_| AppError::validation(format!("Page {} is out of range", args.page)))?;
    view.set_page(index);

    let page = view.current()?;
    output::print_page(&page, format);
    Ok(())
}

/// Collection source: a JSON array of records on disk.
async fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read '{}': {e}", path.display()),
            e,
        )
    })?;

    let records: Vec<R> = serde_json::from_str(&raw)?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}
