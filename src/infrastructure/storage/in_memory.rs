use crate::core::errors::GroupeaseError;
use crate::core::models::{Group, Member};
use crate::infrastructure::storage::GroupStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    groups: BTreeMap<i64, Group>,
    next_id: i64,
}

impl StoreState {
    fn name_taken(&self, channel_id: i64, name: &str, except: Option<i64>) -> bool {
        self.groups
            .values()
            .any(|g| g.channel_id == channel_id && g.name == name && Some(g.id) != except)
    }
}

/// Group store kept in process memory. All groups live behind one lock so the
/// uniqueness check and the write it guards cannot interleave with another
/// writer.
#[derive(Clone, Default)]
pub struct InMemoryGroupStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryGroupStore {
    pub fn new() -> Self {
        InMemoryGroupStore::default()
    }
}

#[async_trait]
impl GroupStore for InMemoryGroupStore {
    async fn list_by_channel(&self, channel_id: i64) -> Result<Vec<Group>, GroupeaseError> {
        let state = self.state.read().await;
        Ok(state
            .groups
            .values()
            .filter(|g| g.channel_id == channel_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, group_id: i64) -> Result<Option<Group>, GroupeaseError> {
        let state = self.state.read().await;
        Ok(state.groups.get(&group_id).cloned())
    }

    async fn get_by_name_in_channel(&self, name: &str, channel_id: i64) -> Result<Option<Group>, GroupeaseError> {
        let state = self.state.read().await;
        Ok(state
            .groups
            .values()
            .find(|g| g.channel_id == channel_id && g.name == name)
            .cloned())
    }

    async fn create(
        &self,
        channel_id: i64,
        name: &str,
        description: Option<&str>,
        initial_member: Member,
    ) -> Result<Group, GroupeaseError> {
        let mut state = self.state.write().await;
        if state.name_taken(channel_id, name, None) {
            return Err(GroupeaseError::GroupNameConflict(name.to_string()));
        }
        state.next_id += 1;
        let group = Group {
            id: state.next_id,
            channel_id,
            name: name.to_string(),
            description: description.map(String::from),
            members: vec![initial_member],
        };
        state.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn update(&self, group_id: i64, name: &str, description: Option<&str>) -> Result<Group, GroupeaseError> {
        let mut state = self.state.write().await;
        let channel_id = state
            .groups
            .get(&group_id)
            .map(|g| g.channel_id)
            .ok_or(GroupeaseError::GroupNotFound(group_id))?;
        if state.name_taken(channel_id, name, Some(group_id)) {
            return Err(GroupeaseError::GroupNameConflict(name.to_string()));
        }
        let group = state
            .groups
            .get_mut(&group_id)
            .ok_or(GroupeaseError::GroupNotFound(group_id))?;
        group.name = name.to_string();
        group.description = description.map(String::from);
        Ok(group.clone())
    }
}
