//! MyCommunityHub client core: the signed-in user store over a key-value
//! backend, the auth gate and router, and HTML views driven by a
//! navigation shell.

pub mod app;
pub mod auth;
pub mod avatar;
pub mod config;
pub mod core;
pub mod directory;
pub mod follow;
pub mod gate;
pub mod models;
pub mod posts;
pub mod routes;
pub mod search;
pub mod storage;
pub mod store;
pub mod templates;
pub mod users;
pub mod views;

pub use app::App;
pub use crate::core::errors::{HubError, HubResult};
pub use crate::core::kv::{JsonFileStore, KeyValue, MemoryStore};
pub use directory::{DirectoryProvider, MockDirectory};
pub use store::{StoreView, UserStore};
