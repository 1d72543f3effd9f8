use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum GroupeaseError {
    /// No user profile exists for the caller's provider id
    #[error("No profile found for identity {0}")]
    IdentityNotFound(String),

    /// Caller has no Member record in the channel
    #[error("User is not a member of channel {0}")]
    NotChannelMember(i64),

    /// Caller is not among the members of the group being changed
    #[error("User is not a member of group {0}")]
    NotGroupMember(i64),

    #[error("Invalid group id: {0}")]
    InvalidGroupId(String),

    #[error("Invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("Group name is required")]
    GroupNameMissing,

    /// Another group in the same channel already uses the name
    #[error("A group named '{0}' already exists in this channel")]
    GroupNameConflict(String),

    /// Missing, or stored under a different channel than the one addressed
    #[error("Group {0} not found")]
    GroupNotFound(i64),

    #[error("Group store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Membership directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl GroupeaseError {
    /// Whether the same request may succeed if issued again later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GroupeaseError::GroupNameConflict(_)
                | GroupeaseError::StoreUnavailable(_)
                | GroupeaseError::DirectoryUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(GroupeaseError::GroupNameConflict("Hiking".to_string()).is_retryable());
        assert!(GroupeaseError::StoreUnavailable("down".to_string()).is_retryable());
        assert!(GroupeaseError::DirectoryUnavailable("down".to_string()).is_retryable());
        assert!(!GroupeaseError::NotChannelMember(7).is_retryable());
        assert!(!GroupeaseError::GroupNameMissing.is_retryable());
        assert!(!GroupeaseError::GroupNotFound(1).is_retryable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GroupeaseError::GroupNameConflict("Book Club".to_string()).to_string(),
            "A group named 'Book Club' already exists in this channel"
        );
        assert_eq!(GroupeaseError::GroupNotFound(42).to_string(), "Group 42 not found");
    }
}
