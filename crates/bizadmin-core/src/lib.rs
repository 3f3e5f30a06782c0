//! Back-office core
//!
//! Coordination layer between the UI shell and the tab controllers. Each
//! mounted form view owns one controller; the shell talks to it through the
//! functions in [`commands`].

mod app;
pub mod commands;
mod config;
mod error;
mod pages;
mod views;

pub use app::App;
pub use config::{Config, FormConfig};
pub use error::CoreError;
pub use pages::NotFoundPage;
pub use views::{MountedView, ViewRegistry};

// Re-export component crates
pub use bizadmin_model::{
    Country, CountryResponse, FlatStructureItem, ModelError, StructureIndex, StructureType,
};
pub use bizadmin_tabs::{
    SharedTabController, SubscriptionId, TabController, TabError, TabId, TabPanel, TabSet,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter`. A subscriber already installed by
/// the host is left in place.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
