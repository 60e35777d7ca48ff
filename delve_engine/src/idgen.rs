//! ** idgen module **
//! Helpers for generating ids. Rooms get stable v5 uuids derived from their symbol;
//! items, players and observer registrations are created at runtime and use v4 (random) uuids.
use uuid::Uuid;

pub const NAMESPACE_ROOM: Uuid = uuid::uuid!("26dc1968-c645-4f5c-915a-400e06bd361c");

/// Generate a v5 UUID for a symbol within the given namespace.
pub fn uuid_from_token(namespace: &Uuid, token: &str) -> Uuid {
    Uuid::new_v5(namespace, token.as_bytes())
}

/// Generate a fresh random id.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
