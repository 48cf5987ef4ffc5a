//! Entity schema inspection.

use clap::Args;

use super::EntityKind;
use crate::output::{self, OutputFormat};
use market_core::error::AppError;

/// Arguments for the fields command
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Entity to describe
    #[arg(value_enum)]
    pub entity: EntityKind,
}

/// Execute the fields command
pub fn execute(args: &FieldsArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_schema(args.entity.schema(), format);
    Ok(())
}
