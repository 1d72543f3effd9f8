
use crate::core::models::Channel;
use crate::core::services::GroupPolicy;
use crate::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryGroupStore;

pub const ALICE: &str = "auth0|alice";
pub const BOB: &str = "auth0|bob";
pub const CAROL: &str = "auth0|carol";
pub const DAVE: &str = "auth0|dave";
pub const NOBODY: &str = "auth0|nobody";

pub type TestPolicy = GroupPolicy<InMemoryDirectory, InMemoryGroupStore, InMemoryLogging>;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Channel 7 has alice and bob, channel 3 has alice and carol, dave has a
/// profile but no channels.
pub async fn create_test_directory() -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();
    for (id, name) in [(7, "Readers"), (3, "Runners")] {
        directory
            .add_channel(Channel {
                id,
                name: name.to_string(),
                description: None,
            })
            .await;
    }
    let alice = directory.register_user(ALICE, "Alice", Some("alice@example.com")).await;
    let bob = directory.register_user(BOB, "Bob", None).await;
    let carol = directory.register_user(CAROL, "Carol", None).await;
    directory.register_user(DAVE, "Dave", None).await;

    for (channel_id, user_id) in [(7, alice.id), (7, bob.id), (3, alice.id), (3, carol.id)] {
        directory.add_channel_member(channel_id, user_id).await.unwrap();
    }
    directory
}

pub async fn create_test_policy() -> (TestPolicy, InMemoryLogging) {
    init_tracing();
    let logging = InMemoryLogging::new();
    let policy = GroupPolicy::new(create_test_directory().await, InMemoryGroupStore::new(), logging.clone());
    (policy, logging)
}
