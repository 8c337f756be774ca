use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the data directory under the user's home.
const DATA_DIR_NAME: &str = ".toolsapp";

/// Application settings, built once at startup and handed to the [`App`](crate::app::App).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    pub debug: bool,
    /// Directory for the saved configuration and the log file.
    pub data_dir: PathBuf,
    pub plugins: Vec<String>,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    /// Free-form values not interpreted by the application.
    pub custom_settings: toml::Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    /// Never written back to disk.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    pub retries: u32,
    /// Never written back to disk.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds between ticks of the event loop.
    pub refresh_rate: f64,
    pub show_debug: bool,
    pub default_screen: Screen,
}

/// Screens the application can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Main,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Log file. Defaults to `toolsapp.log` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "toolsapp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            data_dir: default_data_dir(),
            plugins: Vec::new(),
            database: DatabaseConfig::default(),
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            custom_settings: toml::Table::new(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "myapp".to_string(),
            username: "user".to_string(),
            password: String::new(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.example.com".to_string(),
            timeout: 30,
            retries: 3,
            api_key: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate: 0.5,
            show_debug: false,
            default_screen: Screen::Main,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            file_path: None,
        }
    }
}

/// Errors while reading or writing a settings file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            ConfigError::Serialize(source) => write!(f, "cannot serialize settings: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(source) => Some(source),
        }
    }
}

impl Settings {
    /// Loads settings from an explicit file, or from the default location if
    /// one was saved there, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = default_data_dir().join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads a TOML settings file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the settings as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(io_error)
    }

    /// Path the settings screen saves to.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    /// Log file location, explicit or inside the data directory.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("toolsapp.log"))
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "toolsapp");
        assert_eq!(settings.database.port, 5432);
        assert_eq!(settings.api.timeout, 30);
        assert_eq!(settings.ui.refresh_rate, 0.5);
        assert_eq!(settings.ui.default_screen, Screen::Main);
        assert!(settings.data_dir.ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            debug = true

            [ui]
            default_screen = "settings"

            [database]
            port = 6543
            "#,
        )
        .unwrap();

        assert!(settings.debug);
        assert_eq!(settings.ui.default_screen, Screen::Settings);
        assert_eq!(settings.ui.refresh_rate, 0.5);
        assert_eq!(settings.database.port, 6543);
        assert_eq!(settings.database.host, "localhost");
    }

    #[test]
    fn test_unknown_screen_rejected() {
        let result: Result<Settings, _> = toml::from_str("[ui]\ndefault_screen = \"dashboard\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_secrets_not_serialized() {
        let mut settings = Settings::default();
        settings.database.password = "hunter2".to_string();
        settings.api.api_key = Some("sk-secret".to_string());

        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("sk-secret"));
        assert!(!text.contains("password"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("deep").join(CONFIG_FILE_NAME);

        let mut settings = Settings::default();
        settings.ui.show_debug = true;
        settings.api.base_url = "http://localhost:8080".to_string();
        settings.plugins = vec!["export".to_string()];
        settings
            .custom_settings
            .insert("team".to_string(), toml::Value::String("ops".to_string()));
        settings.save(&path).unwrap();

        let loaded = Settings::load(Some(&path)).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_from_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "debug = \"maybe\"").unwrap();

        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_log_path_defaults_to_data_dir() {
        let settings = Settings {
            data_dir: PathBuf::from("/tmp/toolsapp-data"),
            ..Settings::default()
        };
        assert_eq!(settings.log_path(), PathBuf::from("/tmp/toolsapp-data/toolsapp.log"));
    }
}
