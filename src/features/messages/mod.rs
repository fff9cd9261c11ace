//! Contact-form inbox.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/messages` | No | Send a message |
//! | GET | `/messages` | Admin | All messages, newest first |
//! | PUT | `/messages` | Admin | Set the read flag |
//! | DELETE | `/messages?id=` | Admin | Remove a message |

pub mod dtos;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::ContactMessageService;
pub use store::PgContactMessageStore;
