use super::channel::Member;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Application identity tied to an external authentication provider id.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupeaseUser {
    pub id: i64,
    pub provider_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub member_list: Vec<Member>,
}

impl GroupeaseUser {
    pub fn membership_in(&self, channel_id: i64) -> Option<&Member> {
        self.member_list.iter().find(|m| m.channel_id == channel_id)
    }
}

impl fmt::Display for GroupeaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroupeaseUser[id={}, providerId={}, name={}, channels={}]",
            self.id,
            self.provider_id,
            self.name,
            self.member_list.len()
        )
    }
}

/// Outcome of a successful channel-membership check, passed to the steps that
/// need to know who is acting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCaller {
    pub user: GroupeaseUser,
    pub member: Member,
}
