//! Shared helpers for integration tests.

use backend::{InMemoryStore, Player, PlayerId};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent logging init for integration tests; level from `TEST_LOG`
/// then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Store with `count` seeded active players; returns their ids.
pub fn store_with_players(count: usize) -> (InMemoryStore, Vec<PlayerId>) {
    init_logging();
    let store = InMemoryStore::new();
    let ids: Vec<PlayerId> = (0..count)
        .map(|n| {
            let id = Uuid::new_v4();
            store.put_player(Player {
                id,
                username: format!("player-{n}"),
                active: true,
            });
            id
        })
        .collect();
    (store, ids)
}

/// Seed one inactive player into an existing store.
#[allow(dead_code)] // not every test binary exercises inactive players
pub fn put_inactive_player(store: &InMemoryStore) -> PlayerId {
    let id = Uuid::new_v4();
    store.put_player(Player {
        id,
        username: "dormant".into(),
        active: false,
    });
    id
}
