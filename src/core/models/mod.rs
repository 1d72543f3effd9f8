pub mod audit;
pub mod channel;
pub mod group;
pub mod user;

pub use audit::AppLog;
pub use channel::{Channel, Member};
pub use group::{Group, GroupPayload};
pub use user::{GroupeaseUser, ResolvedCaller};
