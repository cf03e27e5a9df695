pub mod entity;
pub mod repository;

pub use entity::FollowPair;
pub use repository::FollowRepository;
