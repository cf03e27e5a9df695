// src/presentation/http/middleware/mod.rs
pub mod locale;
pub mod rate_limit;
