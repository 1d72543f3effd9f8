use crate::core::errors::GroupeaseError;
use crate::core::models::{Channel, GroupeaseUser, Member};
use crate::infrastructure::directory::MembershipDirectory;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct DirectoryState {
    channels: HashMap<i64, Channel>,
    users: HashMap<i64, GroupeaseUser>,
    users_by_provider_id: HashMap<String, i64>,
    next_user_id: i64,
    next_member_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        InMemoryDirectory::default()
    }

    pub async fn add_channel(&self, channel: Channel) {
        debug!("Adding channel {}", channel);
        self.state.write().await.channels.insert(channel.id, channel);
    }

    pub async fn get_channel(&self, channel_id: i64) -> Option<Channel> {
        self.state.read().await.channels.get(&channel_id).cloned()
    }

    /// Registers a user under a fresh id. Registering a provider id twice
    /// returns the existing profile.
    pub async fn register_user(&self, provider_id: &str, name: &str, email: Option<&str>) -> GroupeaseUser {
        let mut state = self.state.write().await;
        if let Some(existing) = state
            .users_by_provider_id
            .get(provider_id)
            .and_then(|id| state.users.get(id))
        {
            return existing.clone();
        }
        let id = state.users.keys().max().copied().unwrap_or(0).max(state.next_user_id) + 1;
        state.next_user_id = id;
        let user = GroupeaseUser {
            id,
            provider_id: provider_id.to_string(),
            name: name.to_string(),
            email: email.map(String::from),
            member_list: Vec::new(),
        };
        state.users_by_provider_id.insert(user.provider_id.clone(), id);
        state.users.insert(id, user.clone());
        user
    }

    /// Stores a user with a caller-chosen id, replacing any profile with the
    /// same id. Existing memberships are kept.
    pub async fn insert_user(&self, id: i64, provider_id: &str, name: &str, email: Option<&str>) -> GroupeaseUser {
        let mut state = self.state.write().await;
        let member_list = state.users.remove(&id).map(|u| u.member_list).unwrap_or_default();
        state.users_by_provider_id.retain(|_, uid| *uid != id);
        let user = GroupeaseUser {
            id,
            provider_id: provider_id.to_string(),
            name: name.to_string(),
            email: email.map(String::from),
            member_list,
        };
        state.users_by_provider_id.insert(user.provider_id.clone(), id);
        state.users.insert(id, user.clone());
        user
    }

    /// Adds the user to the channel roster. A user holds at most one Member
    /// record per channel; adding again returns the existing one.
    pub async fn add_channel_member(&self, channel_id: i64, user_id: i64) -> Result<Member, GroupeaseError> {
        let mut state = self.state.write().await;
        if !state.channels.contains_key(&channel_id) {
            return Err(GroupeaseError::InvalidChannelId(format!("channel {} does not exist", channel_id)));
        }
        state.next_member_id += 1;
        let member_id = state.next_member_id;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or_else(|| GroupeaseError::IdentityNotFound(user_id.to_string()))?;
        if let Some(existing) = user.membership_in(channel_id) {
            return Ok(existing.clone());
        }
        let member = Member {
            id: member_id,
            channel_id,
            user_id,
        };
        user.member_list.push(member.clone());
        debug!("User {} joined channel {} as {}", user_id, channel_id, member);
        Ok(member)
    }
}

#[async_trait]
impl MembershipDirectory for InMemoryDirectory {
    async fn resolve_identity(&self, provider_id: &str) -> Result<Option<GroupeaseUser>, GroupeaseError> {
        let state = self.state.read().await;
        Ok(state
            .users_by_provider_id
            .get(provider_id)
            .and_then(|id| state.users.get(id))
            .cloned())
    }
}
