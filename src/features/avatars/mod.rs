//! Public avatar uploads to object storage.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/upload-avatar` | No | Store a base64 image, returns its public URL |

pub mod dtos;
pub mod routes;
pub mod services;

pub use services::AvatarUploadService;
