//! HTTP handlers

mod auth;
mod health;
mod users;

pub use auth::{login, logout, user, UserInfo};
pub use health::{health, ping};
pub use users::register;
