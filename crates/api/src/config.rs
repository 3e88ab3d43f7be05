use meshforge_meshy::api::DEFAULT_API_BASE;

/// Server configuration loaded from environment variables.
///
/// All fields except the upstream API key have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// The single entry `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bearer token for the upstream Meshy API.
    pub meshy_api_key: String,
    /// Base URL of the upstream Meshy text-to-3D API.
    pub meshy_api_base: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `5000`                          |
    /// | `CORS_ORIGINS`         | `*`                             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `MESHY_API_KEY`        | (required)                      |
    /// | `MESHY_API_BASE`       | the production Meshy v2 endpoint|
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let meshy_api_key = std::env::var("MESHY_API_KEY").expect("MESHY_API_KEY must be set");

        let meshy_api_base =
            std::env::var("MESHY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            meshy_api_key,
            meshy_api_base,
        }
    }
}
