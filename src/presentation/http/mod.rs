// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod i18n;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
