use std::time::Duration;

use videowall_core::stream_url::{
    ResolverConfig, DEFAULT_FDOT_PROXY_PATH, DEFAULT_MEDIA_PROXY_BASE, DEFAULT_PLACEHOLDER_URL,
};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Camera directory endpoint returning `{ "cameras": [...] }`.
    pub camera_directory_url: String,
    /// Timeout for a single directory fetch (default: `10`).
    pub directory_timeout_secs: u64,
    /// Media proxy, FDOT proxy path and placeholder used to resolve slot URLs.
    pub resolver: ResolverConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                              |
    /// |--------------------------|--------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                            |
    /// | `PORT`                   | `3000`                               |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                 |
    /// | `CAMERA_DIRECTORY_URL`   | `http://localhost:8000/api/cameras`  |
    /// | `DIRECTORY_TIMEOUT_SECS` | `10`                                 |
    /// | `MEDIA_PROXY_BASE_URL`   | `http://localhost:8000`              |
    /// | `FDOT_PROXY_PATH`        | `/api/fdot/{fdot_id}/stream`         |
    /// | `PLACEHOLDER_IMAGE_URL`  | `/images/camera-placeholder.svg`     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let camera_directory_url = std::env::var("CAMERA_DIRECTORY_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api/cameras".into());

        let directory_timeout_secs: u64 = std::env::var("DIRECTORY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DIRECTORY_TIMEOUT_SECS must be a valid u64");

        let resolver = ResolverConfig {
            media_proxy_base: std::env::var("MEDIA_PROXY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MEDIA_PROXY_BASE.into()),
            fdot_proxy_path: std::env::var("FDOT_PROXY_PATH")
                .unwrap_or_else(|_| DEFAULT_FDOT_PROXY_PATH.into()),
            placeholder_url: std::env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_URL.into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            camera_directory_url,
            directory_timeout_secs,
            resolver,
        }
    }

    pub fn directory_timeout(&self) -> Duration {
        Duration::from_secs(self.directory_timeout_secs)
    }
}
