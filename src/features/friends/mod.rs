//! Friend request queue: visitors submit, the site owner moderates.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/friends` | No | Submit a friend request |
//! | GET | `/friends` | Admin | All requests, newest first |
//! | PUT | `/friends` | Admin | Set the status of a request |
//! | DELETE | `/friends?id=` | Admin | Remove a request |

pub mod dtos;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::FriendRequestService;
pub use store::PgFriendRequestStore;
