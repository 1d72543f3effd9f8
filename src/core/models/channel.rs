use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Top-level container that groups and members belong to.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A user's participation record within one channel.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub channel_id: i64,
    pub user_id: i64,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel[id={}, name={}", self.id, self.name)?;
        if let Some(description) = &self.description {
            write!(f, ", description={}", description)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member[id={}, channel={}, user={}]",
            self.id, self.channel_id, self.user_id
        )
    }
}
