//! Tab state for multi-tab forms
//!
//! A form view owns one [`TabController`] that remembers which of its tabs is
//! active. Tab buttons call [`TabController::set_active_tab`], tab panels ask
//! [`TabController::is_tab_active`] to decide visibility.
//!
//! The controller never validates identifiers: an identifier outside the
//! form's tabs simply leaves every panel inactive. Callers that want the
//! check declare a [`TabSet`] and use [`TabController::try_set_active_tab`].

mod controller;
mod error;
mod set;
mod shared;
mod tab;

pub use controller::{SubscriptionId, TabController};
pub use error::TabError;
pub use set::{TabPanel, TabSet};
pub use shared::SharedTabController;
pub use tab::TabId;

pub type Result<T> = std::result::Result<T, TabError>;
