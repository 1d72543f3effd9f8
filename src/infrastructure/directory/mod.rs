use crate::core::errors::GroupeaseError;
use crate::core::models::GroupeaseUser;
use async_trait::async_trait;

/// Resolves callers to application users together with their channel
/// memberships.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// `Ok(None)` when no profile exists for `provider_id`. Backend failures are
    /// reported as `DirectoryUnavailable`.
    async fn resolve_identity(&self, provider_id: &str) -> Result<Option<GroupeaseUser>, GroupeaseError>;
}

pub mod in_memory;
