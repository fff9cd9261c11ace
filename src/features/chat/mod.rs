//! Public chat log between site visitors and the owner.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/chat` | No | Append a message |
//! | GET | `/chat` | No | Full log, oldest first |

pub mod dtos;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::ChatService;
pub use store::PgChatStore;
