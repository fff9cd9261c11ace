//! Modules layer - adapters for external services
//!
//! Currently the S3-compatible object store behind avatar uploads.

pub mod storage;
