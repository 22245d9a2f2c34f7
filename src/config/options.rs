//! every single available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// Theme selection settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ThemeCfg {
    /// The key the explicitly chosen theme is stored under
    #[default(Some("theme-preference".to_string()))]
    pub storage_key: Option<String>,

    /// The theme shown before a preference has been resolved
    ///
    /// Possible values:
    /// - light (default)
    /// - dark
    /// - space
    /// - neon
    /// - contrast
    #[default(Some("light".to_string()))]
    pub default_theme: Option<String>,
}

/// Local preference storage settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct StorageCfg {
    /// Persist the chosen theme locally
    #[default(Some(true))]
    pub enabled: Option<bool>,

    /// Path to the preference database
    #[default(Some(".cache/preferences.redb".to_string()))]
    pub path: Option<String>,
}

/// Server sync settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct SyncCfg {
    /// Push theme changes to the dashboard server (authenticated sessions only)
    #[default(Some(true))]
    pub enabled: Option<bool>,

    /// The base URL of the dashboard
    #[schemars(url)]
    #[default(Some("http://127.0.0.1:5000".to_string()))]
    pub base_url: Option<String>,

    /// The endpoint theme preferences are posted to
    #[default(Some("/api/preferences/theme".to_string()))]
    pub theme_endpoint: Option<String>,

    /// The endpoint documentation feedback is posted to
    #[default(Some("/api/documentation/feedback".to_string()))]
    pub feedback_endpoint: Option<String>,

    /// The header carrying the anti-forgery token
    #[default(Some("X-CSRFToken".to_string()))]
    pub csrf_header: Option<String>,
}

/// The current dashboard session
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct SessionCfg {
    /// Whether the session is logged in
    #[default(Some(false))]
    pub authenticated: Option<bool>,

    /// Whether the session may use premium themes
    #[default(Some(false))]
    pub entitled: Option<bool>,

    /// The anti-forgery token from the page context
    #[default(None)]
    pub csrf_token: Option<String>,
}

/// OS color scheme settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct SystemCfg {
    /// Detect the OS light/dark preference
    #[default(Some(true))]
    pub detect: Option<bool>,

    /// Force the OS preference instead of detecting it
    #[default(None)]
    pub prefers_dark: Option<bool>,

    /// How often to poll the OS preference, in milliseconds
    #[default(Some(2000))]
    pub poll_interval_ms: Option<u64>,
}

/// Configuration options for making HTTP requests
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[default(Some(10))]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    #[default(Some(5))]
    pub connect_timeout_secs: Option<u64>,

    /// User agent string
    #[default(Some(format!(
        "{}/v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )))]
    pub user_agent: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, SmartDefault)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    Compact,

    /// Use an excessively pretty output format
    #[default]
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// Use extra pretty logging
    #[default(Some(LoggingFormat::Pretty))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// dashtheme configuration options
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct DashTheme {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// Theme selection settings
    #[default(Some(ThemeCfg::default()))]
    pub theme: Option<ThemeCfg>,

    /// Local storage settings
    #[default(Some(StorageCfg::default()))]
    pub storage: Option<StorageCfg>,

    /// Server sync settings
    #[default(Some(SyncCfg::default()))]
    pub sync: Option<SyncCfg>,

    /// Session settings
    #[default(Some(SessionCfg::default()))]
    pub session: Option<SessionCfg>,

    /// OS color scheme settings
    #[default(Some(SystemCfg::default()))]
    pub system: Option<SystemCfg>,

    /// HTTP client configuration
    #[default(Some(HttpConfig::default()))]
    pub http: Option<HttpConfig>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl DashTheme {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::default();
        let mut builder = Self::create_builder(&defaults)?;

        builder = builder.add_source(
            config::File::from(global_config_path.as_path())
                .format(config::FileFormat::Toml)
                .required(false),
        );

        if let Some(local_config) = Self::find_local_config()? {
            builder = builder.add_source(
                config::File::from(local_config.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DASHTHEME")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: DashTheme = settings
            .try_deserialize::<DashTheme>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// get the global config file path
    fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join("dashtheme.toml"))
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &DashTheme) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default config struct to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| {
                let formatted = format_validation_errors(&errors);
                eyre!(formatted)
            })
            .wrap_err("config validation failed")
            .suggestion("Check your dashtheme.toml for invalid values")
            .suggestion("Run `dashtheme --gen-default` to see valid options")
    }

    /// find the nearest local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        for ancestor in curr_dir.ancestors() {
            let config_path = ancestor.join("dashtheme.toml");
            if config_path.exists() {
                return Ok(Some(config_path));
            }
        }

        Ok(None)
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &DashTheme) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }
}
