use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_PDL_BASE_URL: &str = "https://api.peopledatalabs.com/v5/person/search";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub provider: ProviderConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            provider: ProviderConfig::from_env()?,
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// People-search provider settings. A missing API key selects the static roster.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    pub result_size: u16,
}

impl ProviderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("PDL_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let base_url =
            env::var("PDL_BASE_URL").unwrap_or_else(|_| DEFAULT_PDL_BASE_URL.to_string());
        let timeout_secs = env::var("PDL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidProviderTimeout)?;
        let result_size = env::var("PDL_RESULT_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u16>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidResultSize)?;

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            result_size,
        })
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_PDL_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            result_size: 10,
        }
    }
}

// Keeps the credential out of debug logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("result_size", &self.result_size)
            .finish()
    }
}

/// Inclusive range the placeholder relevance score is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub min_score: u8,
    pub max_score: u8,
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let min_score = parse_score_var("MATCH_SCORE_MIN", defaults.min_score)?;
        let max_score = parse_score_var("MATCH_SCORE_MAX", defaults.max_score)?;

        if min_score > max_score || max_score > 100 {
            return Err(ConfigError::InvalidScoreRange {
                min: min_score,
                max: max_score,
            });
        }

        Ok(Self {
            min_score,
            max_score,
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_score: 89,
            max_score: 99,
        }
    }
}

fn parse_score_var(name: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidScore { variable: name }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidProviderTimeout,
    InvalidResultSize,
    InvalidScore { variable: &'static str },
    InvalidScoreRange { min: u8, max: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidProviderTimeout => {
                write!(f, "PDL_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidResultSize => {
                write!(f, "PDL_RESULT_SIZE must be a positive u16")
            }
            ConfigError::InvalidScore { variable } => {
                write!(f, "{variable} must be an integer between 0 and 100")
            }
            ConfigError::InvalidScoreRange { min, max } => write!(
                f,
                "match score range {min}..={max} must be ordered and no greater than 100"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
