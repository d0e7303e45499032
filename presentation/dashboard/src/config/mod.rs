pub mod app_config;
pub mod server_config;
