//! Application state container
//!
//! Owns the configuration and every mounted form view. The UI shell keeps
//! one `App` and routes its events through [`crate::commands`].

use bizadmin_tabs::TabId;

use crate::config::Config;
use crate::pages::NotFoundPage;
use crate::views::{MountedView, ViewRegistry};
use crate::Result;

pub struct App {
    config: Config,
    views: ViewRegistry,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            views: ViewRegistry::new(),
        })
    }

    /// Install the log subscriber with the configured fallback filter.
    pub fn init_logging(&self) {
        crate::init_logging(&self.config.log_filter);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Mount a configured form on its default tab
    pub fn mount_form(&self, form: &str) -> Result<MountedView> {
        let form_config = self.config.form(form)?;
        let tabs = form_config.tab_set()?;
        let initial = form_config
            .initial_tab()
            .unwrap_or_else(|| tabs.first().clone());

        Ok(self.views.mount(form, tabs, initial))
    }

    /// Mount a configured form on an explicit tab, e.g. one taken from a
    /// deep link. The tab is not checked.
    pub fn mount_form_at(&self, form: &str, tab: TabId) -> Result<MountedView> {
        let tabs = self.config.form(form)?.tab_set()?;
        Ok(self.views.mount(form, tabs, tab))
    }

    pub fn not_found_page(&self) -> NotFoundPage {
        NotFoundPage::new(self.config.home_path.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            views: ViewRegistry::new(),
        }
    }
}
