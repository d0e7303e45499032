use std::env;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0" when PORT is set, else "127.0.0.1")
    /// - SERVICE_PORT: Port to bind
    /// - PORT: Port assigned by the hosting platform, used when SERVICE_PORT is unset
    pub fn from_env(default_port: &str) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_port)
    }

    fn from_lookup<F>(lookup: F, default_port: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform_port = lookup("PORT");
        // The platform router only reaches dynos listening on every interface.
        let default_ip = if platform_port.is_some() {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| default_ip.to_string());
        let port = lookup("SERVICE_PORT")
            .or(platform_port)
            .unwrap_or_else(|| default_port.to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
