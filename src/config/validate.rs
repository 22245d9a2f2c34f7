//! configuration validation stuff
use crate::{config::options::*, theme::registry::ThemeRegistry, validator};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// whether a string looks like an http(s) url
fn is_http_url(v: &str) -> bool {
    v.starts_with("http://") || v.starts_with("https://")
}

impl Validate for ThemeCfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        if let Some(ref v) = self.storage_key
            && v.trim().is_empty()
        {
            errors.push("storage_key: must not be empty".to_string());
        }

        if let Some(ref v) = self.default_theme {
            let registry = ThemeRegistry::new();

            if !registry.is_valid(v) {
                errors.push(format!(
                    "default_theme: must be one of: {}",
                    registry.ids().join(", ")
                ));
            } else if registry.is_premium(v) {
                errors.push("default_theme: must not be a premium theme".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

validator! { StorageCfg,
    path => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

validator! { SyncCfg,
    base_url => |v: &String| is_http_url(v),
        "must be a valid http(s) url";
    theme_endpoint => |v: &String| v.starts_with('/'),
        "must start with '/'";
    feedback_endpoint => |v: &String| v.starts_with('/'),
        "must start with '/'";
    csrf_header => |v: &String| !v.trim().is_empty() && !v.contains(char::is_whitespace),
        "must be a non-empty header name";
}

validator! { SessionCfg,
    csrf_token => |v: &String| !v.trim().is_empty(),
        "must not be empty when set";
}

validator! { SystemCfg,
    poll_interval_ms => |v: &u64| *v >= 100,
        "must be at least 100";
}

validator! { HttpConfig,
    timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    connect_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    user_agent => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

impl Validate for DashTheme {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($field), err));
                            }
                        }
                    }
                )*
            };
        }

        validate_nested!(theme, storage, sync, session, system, http, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_and_premium_default_theme() {
        let unknown = ThemeCfg {
            default_theme: Some("retro".to_string()),
            ..Default::default()
        };
        let premium = ThemeCfg {
            default_theme: Some("neon".to_string()),
            ..Default::default()
        };

        assert!(!unknown.is_valid());
        assert_eq!(
            premium.validate().unwrap_err(),
            vec!["default_theme: must not be a premium theme".to_string()]
        );
    }

    #[test]
    fn nested_errors_are_prefixed() {
        let cfg = DashTheme {
            sync: Some(SyncCfg {
                base_url: Some("ftp://dash".to_string()),
                theme_endpoint: Some("api/theme".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "sync.base_url: must be a valid http(s) url".to_string(),
                "sync.theme_endpoint: must start with '/'".to_string(),
            ]
        );
    }

    #[test]
    fn formats_numbered_list() {
        let out = format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]);
        assert_eq!(
            out,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
