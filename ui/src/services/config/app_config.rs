use serde::{Deserialize, Serialize};

use crate::console_warn;
use crate::services::errors::ConfigError;
use crate::utils::dom;

/// Id of the optional `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "rollcall-config";

/// Configuration for the whole front-end
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Full-page navigation targets
    pub routes: RouteConfig,

    /// File widget settings
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Where logout sends the browser
    pub login_path: String,

    /// Where a format-valid login sends the browser
    pub dashboard_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Extensions (without the dot) the attendance checker can read
    pub accepted_extensions: Vec<String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: "/".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }
}

impl UploadConfig {
    /// Value for the file input's `accept` attribute, e.g. `.png,.jpg,.jpeg`
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Human list for hints, e.g. `PNG, JPG, JPEG`
    pub fn accepted_label(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| ext.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AppConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Read the host page's inline config block, falling back to defaults.
    ///
    /// A page without the block is the normal case. A block that fails to parse or
    /// validate is logged and ignored.
    pub fn load() -> Self {
        let raw = match dom::element_text(CONFIG_ELEMENT_ID) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return Self::default(),
            Err(e) if e.is_missing_element() => return Self::default(),
            Err(e) => {
                console_warn!("[Config] Could not read page configuration: {}", e);
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                console_warn!("[Config] Using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !is_relative_path(&self.routes.login_path) {
            errors.push("Routes login_path must be a path starting with '/'".to_string());
        }

        if !is_relative_path(&self.routes.dashboard_path) {
            errors.push("Routes dashboard_path must be a path starting with '/'".to_string());
        }

        if self.routes.login_path == self.routes.dashboard_path {
            errors.push("Routes login_path and dashboard_path must differ".to_string());
        }

        if self.upload.accepted_extensions.is_empty() {
            errors.push("Upload accepted_extensions must not be empty".to_string());
        }

        if self
            .upload
            .accepted_extensions
            .iter()
            .any(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            errors.push("Upload accepted_extensions must be bare extensions like \"png\"".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Same-origin paths only
fn is_relative_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.routes.login_path, "/");
        assert_eq!(config.routes.dashboard_path, "/dashboard");
    }

    #[test]
    fn test_invalid_config() {
        let mut config = AppConfig::default();
        config.routes.dashboard_path = "https://elsewhere.example".to_string();
        config.upload.accepted_extensions.clear();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_same_paths_rejected() {
        let mut config = AppConfig::default();
        config.routes.dashboard_path = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"routes": {"dashboard_path": "/home"}}"#).unwrap();
        assert_eq!(config.routes.dashboard_path, "/home");
        assert_eq!(config.routes.login_path, "/");
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn test_bad_json_reports_parse_error() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_failing_validation() {
        let err = AppConfig::from_json(r#"{"upload": {"accepted_extensions": [".png"]}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref reasons) if reasons.len() == 1));
    }

    #[test]
    fn test_accept_attribute_and_label() {
        let upload = UploadConfig::default();
        assert_eq!(upload.accept_attribute(), ".png,.jpg,.jpeg");
        assert_eq!(upload.accepted_label(), "PNG, JPG, JPEG");
    }
}
