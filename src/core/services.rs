use crate::core::constants::{GROUP_CREATED, GROUP_UPDATED};
use crate::core::errors::GroupeaseError;
use crate::core::models::{Group, GroupPayload, ResolvedCaller};
use crate::infrastructure::directory::MembershipDirectory;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::GroupStore;
use serde_json::json;
use tracing::{debug, error, warn};

/// Authorization and validation rules for group operations within a channel.
///
/// Holds no per-request state: the caller resolved by the membership check is
/// returned as a [`ResolvedCaller`] and passed on explicitly, so one policy can
/// serve concurrent requests.
pub struct GroupPolicy<D: MembershipDirectory, S: GroupStore, L: LoggingService> {
    directory: D,
    storage: S,
    logging: L,
}

impl<D: MembershipDirectory, S: GroupStore, L: LoggingService> GroupPolicy<D, S, L> {
    pub fn new(directory: D, storage: S, logging: L) -> Self {
        GroupPolicy {
            directory,
            storage,
            logging,
        }
    }

    /// Resolves the caller and checks they belong to the channel.
    async fn verify_channel_member(
        &self,
        channel_id: i64,
        caller_identity: &str,
    ) -> Result<ResolvedCaller, GroupeaseError> {
        let user = self
            .directory
            .resolve_identity(caller_identity)
            .await?
            .ok_or_else(|| {
                warn!("No profile found for identity {}", caller_identity);
                GroupeaseError::IdentityNotFound(caller_identity.to_string())
            })?;

        let member = user.membership_in(channel_id).cloned().ok_or_else(|| {
            warn!("User {} is not a member of channel {}", user.id, channel_id);
            GroupeaseError::NotChannelMember(channel_id)
        })?;

        Ok(ResolvedCaller { user, member })
    }

    /// Records a committed mutation. The write already happened, so a failed
    /// audit entry is logged and not reported to the caller.
    async fn log_and_audit(&self, action: &str, group: &Group, caller: &ResolvedCaller) {
        if let Err(e) = self
            .logging
            .log_action(
                action,
                json!({
                    "group_id": group.id,
                    "channel_id": group.channel_id,
                    "name": group.name,
                    "member_id": caller.member.id,
                }),
                Some(caller.user.provider_id.as_str()),
            )
            .await
        {
            error!("Failed to audit {} for group {}: {}", action, group.id, e);
        }
    }

    /// All groups in the channel, in store order.
    pub async fn list(&self, channel_id: i64, caller_identity: &str) -> Result<Vec<Group>, GroupeaseError> {
        debug!("GroupPolicy.list(channel={})", channel_id);
        self.verify_channel_member(channel_id, caller_identity).await?;
        self.storage.list_by_channel(channel_id).await
    }

    /// A group of the channel. Groups stored under another channel are
    /// reported exactly like missing ones.
    pub async fn get_by_id(
        &self,
        channel_id: i64,
        group_id: i64,
        caller_identity: &str,
    ) -> Result<Group, GroupeaseError> {
        debug!("GroupPolicy.get_by_id(channel={}, group={})", channel_id, group_id);
        self.verify_channel_member(channel_id, caller_identity).await?;

        match self.storage.get_by_id(group_id).await? {
            Some(group) if group.channel_id == channel_id => Ok(group),
            _ => Err(GroupeaseError::GroupNotFound(group_id)),
        }
    }

    /// Creates a group in the channel with the caller's member record as its
    /// only member.
    pub async fn create(
        &self,
        channel_id: i64,
        payload: GroupPayload,
        caller_identity: &str,
    ) -> Result<Group, GroupeaseError> {
        debug!("GroupPolicy.create(channel={}, name={:?})", channel_id, payload.name);
        let caller = self.verify_channel_member(channel_id, caller_identity).await?;

        if payload.id.is_some() {
            return Err(GroupeaseError::InvalidGroupId(
                "No group ID should be supplied when creating a group".to_string(),
            ));
        }
        if let Some(channel) = payload.channel {
            if channel != channel_id {
                return Err(GroupeaseError::InvalidChannelId(format!(
                    "Supplied channel ID {} must match channel ID {}",
                    channel, channel_id
                )));
            }
        }
        let name = payload.non_empty_name().ok_or(GroupeaseError::GroupNameMissing)?;

        if self.storage.get_by_name_in_channel(name, channel_id).await?.is_some() {
            return Err(GroupeaseError::GroupNameConflict(name.to_string()));
        }

        // the store re-checks the name under its own lock
        let group = self
            .storage
            .create(channel_id, name, payload.description.as_deref(), caller.member.clone())
            .await?;
        debug!("Group created: {}", group);

        self.log_and_audit(GROUP_CREATED, &group, &caller).await;
        Ok(group)
    }

    /// Renames and re-describes a group. Only members of the group may do so.
    pub async fn update(
        &self,
        channel_id: i64,
        group_id: i64,
        payload: GroupPayload,
        caller_identity: &str,
    ) -> Result<Group, GroupeaseError> {
        debug!(
            "GroupPolicy.update(channel={}, group={}, name={:?})",
            channel_id, group_id, payload.name
        );
        let caller = self.verify_channel_member(channel_id, caller_identity).await?;

        match payload.id {
            None => {
                return Err(GroupeaseError::InvalidGroupId("Group ID must be supplied".to_string()));
            }
            Some(id) if id != group_id => {
                return Err(GroupeaseError::InvalidGroupId(format!(
                    "Supplied group ID {} must match group ID {}",
                    id, group_id
                )));
            }
            Some(_) => {}
        }
        match payload.channel {
            None => {
                return Err(GroupeaseError::InvalidChannelId(
                    "Channel ID must be supplied".to_string(),
                ));
            }
            Some(channel) if channel != channel_id => {
                return Err(GroupeaseError::InvalidChannelId(format!(
                    "Supplied channel ID {} must match channel ID {}",
                    channel, channel_id
                )));
            }
            Some(_) => {}
        }
        let name = payload.non_empty_name().ok_or(GroupeaseError::GroupNameMissing)?;

        if let Some(existing) = self.storage.get_by_name_in_channel(name, channel_id).await? {
            if existing.id != group_id {
                return Err(GroupeaseError::GroupNameConflict(name.to_string()));
            }
        }

        let existing = match self.storage.get_by_id(group_id).await? {
            Some(group) if group.channel_id == channel_id => group,
            _ => return Err(GroupeaseError::GroupNotFound(group_id)),
        };

        if !existing.has_member(caller.user.id) {
            warn!("User {} attempted to update group {} without being a member", caller.user.id, group_id);
            return Err(GroupeaseError::NotGroupMember(group_id));
        }

        let group = self
            .storage
            .update(group_id, name, payload.description.as_deref())
            .await?;
        debug!("Group updated: {}", group);

        self.log_and_audit(GROUP_UPDATED, &group, &caller).await;
        Ok(group)
    }
}
