//! Loads channels, users and channel memberships into an [`InMemoryDirectory`]
//! from a JSON document.

use crate::core::errors::GroupeaseError;
use crate::core::models::Channel;
use crate::infrastructure::directory::in_memory::InMemoryDirectory;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub id: i64,
    pub provider_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedMembership {
    pub channel_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub members: Vec<SeedMembership>,
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self, GroupeaseError> {
        let seed: Seed =
            serde_json::from_str(raw).map_err(|e| GroupeaseError::SeedError(format!("Malformed seed: {}", e)))?;
        seed.validate()?;
        Ok(seed)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, GroupeaseError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GroupeaseError::SeedError(format!("Cannot read {}: {}", path.display(), e)))?;
        Seed::from_json(&raw)
    }

    fn validate(&self) -> Result<(), GroupeaseError> {
        let channel_ids: HashSet<i64> = self.channels.iter().map(|c| c.id).collect();
        let user_ids: HashSet<i64> = self.users.iter().map(|u| u.id).collect();
        if channel_ids.len() != self.channels.len() {
            return Err(GroupeaseError::SeedError("Duplicate channel id".to_string()));
        }
        if user_ids.len() != self.users.len() {
            return Err(GroupeaseError::SeedError("Duplicate user id".to_string()));
        }
        let provider_ids: HashSet<&str> = self.users.iter().map(|u| u.provider_id.as_str()).collect();
        if provider_ids.len() != self.users.len() {
            return Err(GroupeaseError::SeedError("Duplicate provider id".to_string()));
        }

        let mut seen = HashSet::new();
        for m in &self.members {
            if !channel_ids.contains(&m.channel_id) {
                return Err(GroupeaseError::SeedError(format!("Unknown channel {}", m.channel_id)));
            }
            if !user_ids.contains(&m.user_id) {
                return Err(GroupeaseError::SeedError(format!("Unknown user {}", m.user_id)));
            }
            if !seen.insert((m.channel_id, m.user_id)) {
                return Err(GroupeaseError::SeedError(format!(
                    "User {} listed twice in channel {}",
                    m.user_id, m.channel_id
                )));
            }
        }
        Ok(())
    }

    pub async fn apply(self, directory: &InMemoryDirectory) -> Result<(), GroupeaseError> {
        let (channels, users, members) = (self.channels.len(), self.users.len(), self.members.len());
        for channel in self.channels {
            directory.add_channel(channel).await;
        }
        for user in self.users {
            directory
                .insert_user(user.id, &user.provider_id, &user.name, user.email.as_deref())
                .await;
        }
        for m in self.members {
            directory.add_channel_member(m.channel_id, m.user_id).await?;
        }
        info!(
            "Seeded {} channels, {} users and {} memberships",
            channels, users, members
        );
        Ok(())
    }
}
