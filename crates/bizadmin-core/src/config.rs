//! Back-office configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use bizadmin_tabs::{TabId, TabSet};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application root, the target of the not-found page link
    pub home_path: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Multi-tab forms by name
    pub forms: BTreeMap<String, FormConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Tabs in display order
    pub tabs: Vec<TabId>,
    /// Tab shown on mount; the first tab when unset
    #[serde(default)]
    pub default_tab: Option<TabId>,
}

impl FormConfig {
    pub fn new<I, S>(tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TabId>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            default_tab: None,
        }
    }

    pub fn with_default_tab(mut self, tab: impl Into<TabId>) -> Self {
        self.default_tab = Some(tab.into());
        self
    }

    pub fn tab_set(&self) -> Result<TabSet<TabId>> {
        Ok(TabSet::new(self.tabs.iter().cloned())?)
    }

    /// The configured default, not checked against `tabs`.
    pub fn initial_tab(&self) -> Option<TabId> {
        self.default_tab
            .clone()
            .or_else(|| self.tabs.first().cloned())
    }
}

impl Config {
    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), forms = config.forms.len(), "Loaded config");

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.home_path.starts_with('/') {
            return Err(CoreError::Config(format!(
                "home_path must start with '/': {}",
                self.home_path
            )));
        }

        for (name, form) in &self.forms {
            let tabs = form
                .tab_set()
                .map_err(|e| CoreError::Config(format!("form {name}: {e}")))?;

            if let Some(default_tab) = &form.default_tab {
                if !tabs.contains(default_tab) {
                    tracing::warn!(
                        form = %name,
                        tab = %default_tab,
                        "Default tab is not one of the form's tabs"
                    );
                }
            }
        }

        Ok(())
    }

    pub fn form(&self, name: &str) -> Result<&FormConfig> {
        self.forms
            .get(name)
            .ok_or_else(|| CoreError::UnknownForm(name.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut forms = BTreeMap::new();
        forms.insert(
            "structure".to_string(),
            FormConfig::new(["general", "permissions", "audit"]).with_default_tab("general"),
        );

        Self {
            home_path: "/".to_string(),
            log_filter: "info".to_string(),
            forms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        config.validate().unwrap();

        let form = config.form("structure").unwrap();
        assert_eq!(form.initial_tab(), Some(TabId::from("general")));
        assert_eq!(form.tab_set().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config.home_path, "/");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.home_path = "/admin".to_string();
        config.forms.insert(
            "country".to_string(),
            FormConfig::new(["data", "regions"]),
        );
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.home_path, "/admin");
        assert_eq!(
            loaded.form("country").unwrap().initial_tab(),
            Some(TabId::from("data"))
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log_filter": "debug"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(config.forms.contains_key("structure"));
    }

    #[test]
    fn test_rejects_form_without_tabs() {
        let mut config = Config::default();
        config
            .forms
            .insert("empty".to_string(), FormConfig::new(Vec::<String>::new()));
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_home() {
        let config = Config {
            home_path: "admin".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_tab_outside_tabs_is_allowed() {
        let mut config = Config::default();
        config.forms.insert(
            "license".to_string(),
            FormConfig::new(["general"]).with_default_tab("archived"),
        );
        config.validate().unwrap();
        assert_eq!(
            config.form("license").unwrap().initial_tab(),
            Some(TabId::from("archived"))
        );
    }

    #[test]
    fn test_unknown_form() {
        let config = Config::default();
        assert!(matches!(
            config.form("payroll"),
            Err(CoreError::UnknownForm(_))
        ));
    }
}
