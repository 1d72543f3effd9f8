use crate::core::errors::GroupeaseError;
use crate::core::models::{Group, Member};
use async_trait::async_trait;

/// Persistence for group records.
///
/// `create` and `update` must run their name-uniqueness check and the write as
/// one atomic step and report a clash as `GroupNameConflict`. Backend failures
/// are reported as `StoreUnavailable`.
#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn list_by_channel(&self, channel_id: i64) -> Result<Vec<Group>, GroupeaseError>;
    async fn get_by_id(&self, group_id: i64) -> Result<Option<Group>, GroupeaseError>;
    async fn get_by_name_in_channel(&self, name: &str, channel_id: i64) -> Result<Option<Group>, GroupeaseError>;
    async fn create(
        &self,
        channel_id: i64,
        name: &str,
        description: Option<&str>,
        initial_member: Member,
    ) -> Result<Group, GroupeaseError>;
    async fn update(&self, group_id: i64, name: &str, description: Option<&str>) -> Result<Group, GroupeaseError>;
}

pub mod in_memory;
