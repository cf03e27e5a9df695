pub mod article;
pub mod comment;
pub mod errors;
pub mod follow;
pub mod membership;
pub mod ownership;
pub mod pagination;
pub mod user;
