pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod handler;
pub mod middleware;
