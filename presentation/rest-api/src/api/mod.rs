pub mod auth;
pub mod error;
pub mod health;
pub mod sale;
pub mod security;
pub mod tags;
