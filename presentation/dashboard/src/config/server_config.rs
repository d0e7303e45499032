use std::env;

/// HTTP listener settings for the dashboard
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0" when PORT is set, else "127.0.0.1")
    /// - SERVICE_PORT: Port to bind
    /// - PORT: Port assigned by the hosting platform, used when SERVICE_PORT is unset
    pub fn from_env(default_port: &str) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_port)
    }

    pub(crate) fn from_lookup<F>(lookup: F, default_port: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform_port = lookup("PORT");
        let default_ip = match platform_port {
            Some(_) => "0.0.0.0",
            None => "127.0.0.1",
        };
        Self {
            ip: lookup("SERVICE_IP").unwrap_or_else(|| default_ip.to_string()),
            port: lookup("SERVICE_PORT")
                .or(platform_port)
                .unwrap_or_else(|| default_port.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
