use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_RESPONSIBLE_PERSONS: &[&str] = &["View", "Cream", "May"];
const DEFAULT_COMMENT_AUTHOR: &str = "Admin";

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
    pub pipeline: PipelineSettings,
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

        let pipeline = PipelineSettings::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            pipeline,
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Business dials for the applicant pipeline: who may own a screening and who signs
/// comments when the author is left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub responsible_persons: Vec<String>,
    pub default_comment_author: String,
}

impl PipelineSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Ok(raw) = env::var("HR_RESPONSIBLE_PERSONS") {
            let roster = parse_roster(&raw);
            if roster.is_empty() {
                return Err(ConfigError::EmptyRoster);
            }
            settings.responsible_persons = roster;
        }

        if let Ok(author) = env::var("HR_DEFAULT_COMMENT_AUTHOR") {
            let author = author.trim();
            if !author.is_empty() {
                settings.default_comment_author = author.to_string();
            }
        }

        Ok(settings)
    }

    pub fn allows_assignee(&self, assignee: &str) -> bool {
        self.responsible_persons.is_empty()
            || self
                .responsible_persons
                .iter()
                .any(|person| person == assignee)
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            responsible_persons: DEFAULT_RESPONSIBLE_PERSONS
                .iter()
                .map(|person| person.to_string())
                .collect(),
            default_comment_author: DEFAULT_COMMENT_AUTHOR.to_string(),
        }
    }
}

fn parse_roster(raw: &str) -> Vec<String> {
    let mut roster: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !roster.iter().any(|existing| existing == name) {
            roster.push(name.to_string());
        }
    }
    roster
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyRoster,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptyRoster => {
                write!(f, "HR_RESPONSIBLE_PERSONS must name at least one person")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::EmptyRoster => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("HR_RESPONSIBLE_PERSONS");
        env::remove_var("HR_DEFAULT_COMMENT_AUTHOR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.pipeline, PipelineSettings::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();
    }

    #[test]
    fn roster_is_trimmed_and_deduplicated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HR_RESPONSIBLE_PERSONS", " Nok, Ploy ,,Nok ");
        env::set_var("HR_DEFAULT_COMMENT_AUTHOR", "HR Desk");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.pipeline.responsible_persons, vec!["Nok", "Ploy"]);
        assert_eq!(config.pipeline.default_comment_author, "HR Desk");
        reset_env();
    }

    #[test]
    fn blank_roster_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HR_RESPONSIBLE_PERSONS", " , ");
        assert!(matches!(AppConfig::load(), Err(ConfigError::EmptyRoster)));
        reset_env();
    }

    #[test]
    fn empty_roster_allows_anyone() {
        let settings = PipelineSettings {
            responsible_persons: Vec::new(),
            default_comment_author: "Admin".to_string(),
        };
        assert!(settings.allows_assignee("Anyone"));
        assert!(PipelineSettings::default().allows_assignee("May"));
        assert!(!PipelineSettings::default().allows_assignee("Somebody"));
    }
}
