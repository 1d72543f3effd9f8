pub const GROUP_CREATED: &str = "GROUP_CREATED";
pub const GROUP_UPDATED: &str = "GROUP_UPDATED";
