use super::channel::Member;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub channel_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<Member>,
}

impl Group {
    pub fn has_member(&self, user_id: i64) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group[id={}, channel={}, name={}",
            self.id, self.channel_id, self.name
        )?;
        if let Some(description) = &self.description {
            write!(f, ", description={}", description)?;
        }
        let member_ids: Vec<String> = self.members.iter().map(|m| m.id.to_string()).collect();
        write!(f, ", members=[{}]]", member_ids.join(", "))
    }
}

/// Group fields as posted by a caller. Every field is optional so that the
/// validation rules can tell "absent" from "present but wrong".
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GroupPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub channel: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GroupPayload {
    pub fn named(name: &str) -> Self {
        GroupPayload {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// The name, if one was supplied and it is not empty.
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, user_id: i64) -> Member {
        Member {
            id,
            channel_id: 7,
            user_id,
        }
    }

    #[test]
    fn test_display_lists_member_ids() {
        let group = Group {
            id: 3,
            channel_id: 7,
            name: "Hiking".to_string(),
            description: Some("Weekend trails".to_string()),
            members: vec![member(11, 1), member(12, 2)],
        };
        assert_eq!(
            group.to_string(),
            "Group[id=3, channel=7, name=Hiking, description=Weekend trails, members=[11, 12]]"
        );
    }

    #[test]
    fn test_equality_is_field_by_field() {
        let a = Group {
            id: 1,
            channel_id: 7,
            name: "Book Club".to_string(),
            description: None,
            members: vec![member(11, 1)],
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.description = Some("Monthly".to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn test_payload_empty_name_is_absent() {
        assert_eq!(GroupPayload::default().non_empty_name(), None);
        assert_eq!(GroupPayload::named("").non_empty_name(), None);
        assert_eq!(GroupPayload::named("Hiking").non_empty_name(), Some("Hiking"));
    }

    #[test]
    fn test_payload_deserializes_missing_fields() {
        let payload: GroupPayload = serde_json::from_str(r#"{"name":"Hiking"}"#).unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(payload.channel, None);
        assert_eq!(payload.name.as_deref(), Some("Hiking"));
    }
}
