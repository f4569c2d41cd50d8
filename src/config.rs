use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub brief: BriefSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub seed: SeedSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BriefSettings {
    #[serde(default = "default_brief_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_brief_model")]
    pub model: String,
    pub api_key: Option<String>,
    /// No timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for BriefSettings {
    fn default() -> Self {
        Self {
            endpoint: default_brief_endpoint(),
            model: default_brief_model(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

fn default_brief_endpoint() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
fn default_brief_model() -> String { "gemini-2.5-flash".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self { max_results: default_max_results() }
    }
}

fn default_max_results() -> usize { crate::core::DEFAULT_MAX_RESULTS }

/// Brief session store limits
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Sessions untouched for this long are dropped
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_max_sessions() -> u64 { crate::services::sessions::DEFAULT_MAX_SESSIONS }
fn default_idle_timeout_secs() -> u64 { crate::services::sessions::DEFAULT_IDLE_TIMEOUT_SECS }

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    #[serde(default = "default_talent_count")]
    pub talent_count: usize,
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
    #[serde(default = "default_true")]
    pub sample_projects: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            talent_count: default_talent_count(),
            rng_seed: default_rng_seed(),
            sample_projects: true,
        }
    }
}

fn default_talent_count() -> usize { 100 }
fn default_rng_seed() -> u64 { crate::services::seed::DEFAULT_SEED }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with `CASTING__`, e.g. `CASTING__SERVER__PORT`)
    /// 5. `GEMINI_API_KEY` / `API_KEY` for the brief credential
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CASTING__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CASTING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = with_api_key(settings, api_key_from_env())?;

        settings.try_deserialize::<Self>()?.validate()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CASTING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = with_api_key(settings, api_key_from_env())?;

        settings.try_deserialize::<Self>()?.validate()
    }

    /// Reject settings the service cannot honour
    fn validate(self) -> Result<Self, ConfigError> {
        let max_results = self.matching.max_results;
        if max_results == 0 || max_results > crate::core::DEFAULT_MAX_RESULTS {
            return Err(ConfigError::Message(format!(
                "matching.max_results must be between 1 and {}, got {}",
                crate::core::DEFAULT_MAX_RESULTS,
                max_results
            )));
        }

        if self.sessions.max_sessions == 0 || self.sessions.idle_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "sessions.max_sessions and sessions.idle_timeout_secs must be positive".to_string(),
            ));
        }

        Ok(self)
    }
}

/// The generation API credential from the conventional variables
///
/// `GEMINI_API_KEY` wins over `API_KEY`.
fn api_key_from_env() -> Option<String> {
    use std::env;

    env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")).ok()
}

/// Override the file value of the brief credential when a key is given
fn with_api_key(settings: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    match api_key {
        Some(key) => Config::builder()
            .add_source(settings)
            .set_override("brief.api_key", key)?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching() {
        assert_eq!(MatchingSettings::default().max_results, 10);
    }

    #[test]
    fn test_default_brief() {
        let brief = BriefSettings::default();
        assert_eq!(brief.model, "gemini-2.5-flash");
        assert!(brief.api_key.is_none());
        assert!(brief.timeout_secs.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("casting-match-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[matching]\nmax_results = 5\n\n[seed]\ntalent_count = 12\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.matching.max_results, 5);
        assert_eq!(settings.seed.talent_count, 12);
        assert!(settings.seed.sample_projects);
        assert_eq!(settings.logging.format, "json");

        std::fs::remove_dir_all(&dir).ok();
    }

    fn write_settings(body: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("casting-match-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, format!("[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n{}", body)).unwrap();
        path
    }

    #[test]
    fn test_rejects_out_of_range_page_size() {
        for cap in [0, 11] {
            let path = write_settings(&format!("[matching]\nmax_results = {}\n", cap));
            assert!(Settings::load_from(&path).is_err(), "max_results = {} was accepted", cap);
        }

        let path = write_settings("[matching]\nmax_results = 10\n");
        assert_eq!(Settings::load_from(&path).unwrap().matching.max_results, 10);
    }

    #[test]
    fn test_session_settings() {
        let path = write_settings("[sessions]\nmax_sessions = 25\nidle_timeout_secs = 60\n");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.sessions.max_sessions, 25);
        assert_eq!(settings.sessions.idle_timeout_secs, 60);

        let path = write_settings("[sessions]\nidle_timeout_secs = 0\n");
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_api_key_overrides_file_value() {
        let path = write_settings("[brief]\napi_key = \"from-file\"\n");
        let config = Config::builder().add_source(File::from(path.as_path())).build().unwrap();

        let kept: Settings = with_api_key(config.clone(), None).unwrap().try_deserialize().unwrap();
        assert_eq!(kept.brief.api_key.as_deref(), Some("from-file"));

        let overridden: Settings = with_api_key(config, Some("from-env".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(overridden.brief.api_key.as_deref(), Some("from-env"));
    }
}
