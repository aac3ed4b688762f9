use crate::error::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_NAME: &str = "folio.config.json";

/// Process-wide formatting defaults.
///
/// Built once at startup and handed to whatever needs it by reference;
/// nothing writes to it afterwards. Font and page size seed a new
/// document's page setup, `history_limit` bounds its command log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_font_name")]
    pub font_name: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_page_size")]
    pub page_size: String,

    /// Maximum undo levels kept by a command log (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_font_name() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_page_size() -> String {
    "A4".to_string()
}

fn default_history_limit() -> usize {
    100
}

impl Settings {
    /// Load settings from `dir`, falling back to defaults when no file exists
    pub fn load(dir: &Path) -> CommonResult<Self> {
        let path = Self::path_in(dir);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_json(&content)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn from_json(content: &str) -> CommonResult<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        if settings.font_size == 0 {
            return Err(CommonError::Generic("fontSize must be at least 1".to_string()));
        }
        Ok(settings)
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_SETTINGS_NAME)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_name: default_font_name(),
            font_size: default_font_size(),
            page_size: default_page_size(),
            history_limit: default_history_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_settings() {
        let json = r#"{
            "fontName": "Georgia",
            "fontSize": 14,
            "pageSize": "Letter",
            "historyLimit": 5
        }"#;

        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.font_name, "Georgia");
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.page_size, "Letter");
        assert_eq!(settings.history_limit, 5);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = Settings::from_json(r#"{ "fontSize": 10 }"#).unwrap();
        assert_eq!(settings.font_name, "Arial");
        assert_eq!(settings.font_size, 10);
        assert_eq!(settings.page_size, "A4");
        assert_eq!(settings.history_limit, 100);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.font_name, "Arial");
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.page_size, "A4");
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Settings::load(dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Settings::path_in(dir.path()), r#"{ "pageSize": "A5" }"#).unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.page_size, "A5");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let result = Settings::from_json("{ not json");
        assert!(matches!(result, Err(CommonError::Json(_))));
    }

    #[test]
    fn test_zero_font_size_is_rejected() {
        let result = Settings::from_json(r#"{ "fontSize": 0 }"#);
        assert!(matches!(result, Err(CommonError::Generic(_))));
    }
}
