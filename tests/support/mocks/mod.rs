// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod storage;
pub mod store;
pub mod time;
pub mod util;

pub use security::{
    DummyTokenManager, EXPIRED_TOKEN, StrictPasswordHasher, strict_hash,
    token_for,
};
pub use storage::{IMAGE_BASE_URL, MemoryImageStorage};
pub use store::InMemoryStore;
pub use time::{DummyClock, TickingClock, fixed_now};
pub use util::DummySlug;
