mod pdf;
mod store;

use async_trait::async_trait;
use nutriplan_model::plan::DietPlan;
use nutriplan_model::profile::UserProfile;
use thiserror::Error;

pub use store::PdfReportStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("report not found")]
    NotFound,
    #[error("failed to render report: {0}")]
    Render(String),
    #[error("failed to persist report: {0}")]
    Io(#[from] std::io::Error),
}

/// The artifact store boundary. One `store` call renders and publishes
/// exactly one report; `load` retrieves it by the identifier `store`
/// returned. Identifiers are unique across concurrent calls.
#[mockall::automock]
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn store(&self, profile: &UserProfile, plan: &DietPlan) -> Result<String, StorageError>;
    async fn load(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;
}
