pub mod in_memory;

use crate::core::errors::GroupeaseError;
use crate::core::models::AppLog;
use async_trait::async_trait;

/// Audit trail of successful group mutations.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), GroupeaseError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, GroupeaseError>;
}
