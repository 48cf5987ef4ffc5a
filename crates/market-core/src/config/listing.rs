//! List view configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Defaults and bounds applied to admin list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when a view is mounted without an explicit size.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Upper bound on a requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl ListingConfig {
    /// Cap a requested page size to the configured bounds.
    pub fn cap_page_size(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_page_size.max(1))
    }

    /// Check the bounds are coherent.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(AppError::configuration(
                "listing page sizes must be positive",
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(AppError::configuration(format!(
                "listing.default_page_size ({}) exceeds listing.max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    100
}
