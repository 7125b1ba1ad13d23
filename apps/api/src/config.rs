use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Origins the front-end dev servers run on.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Application configuration loaded from environment variables.
/// Every variable is optional; an empty environment yields the fixed local contract.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            rust_log: "info".to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .map(|origin| HeaderValue::from_static(*origin))
                .collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got '{raw}'"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        Ok(Config {
            host,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL printed in the startup banner.
    pub fn base_url(&self) -> String {
        if self.host.is_loopback() {
            format!("http://localhost:{}", self.port)
        } else {
            format!("http://{}", self.addr())
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ORIGINS contains an invalid origin '{origin}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_local_contract() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[0], "http://localhost:3000");
        assert_eq!(config.cors_origins[1], "http://127.0.0.1:3000");
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9001"),
            ("CORS_ORIGINS", "http://localhost:5173, ,http://example.test"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.base_url(), "http://0.0.0.0:9001");
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[1], "http://example.test");
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        // Control characters are not valid in a header value; trimming keeps them.
        let err = Config::from_lookup(lookup_from(&[(
            "CORS_ORIGINS",
            "http://localhost:3000,http://bad\u{1}origin",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("CORS_ORIGINS"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
