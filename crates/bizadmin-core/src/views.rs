//! Mounted form views
//!
//! A view's tab controller is created on mount and dropped on unmount; no
//! tab state outlives the view.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use bizadmin_tabs::{SharedTabController, TabId, TabSet};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct MountedView {
    /// Unique identifier
    pub id: String,
    /// Form this view renders
    pub form: String,
    /// Tabs the form displays
    pub tabs: TabSet<TabId>,
    /// Active-tab state, shared with the view's event handlers
    pub controller: SharedTabController<TabId>,
}

pub struct ViewRegistry {
    views: Arc<RwLock<HashMap<String, MountedView>>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Mount a view of `form` with `initial` as its active tab.
    ///
    /// `initial` need not be one of `tabs`.
    pub fn mount(&self, form: &str, tabs: TabSet<TabId>, initial: TabId) -> MountedView {
        let view = MountedView {
            id: Uuid::new_v4().to_string(),
            form: form.to_string(),
            tabs,
            controller: SharedTabController::new(initial),
        };

        self.views.write().insert(view.id.clone(), view.clone());

        tracing::info!(
            view_id = %view.id,
            form = %view.form,
            tab = %view.controller.active_tab(),
            "Mounted form view"
        );

        view
    }

    pub fn get(&self, view_id: &str) -> Result<MountedView> {
        self.views
            .read()
            .get(view_id)
            .cloned()
            .ok_or_else(|| CoreError::ViewNotFound(view_id.to_string()))
    }

    pub fn controller(&self, view_id: &str) -> Result<SharedTabController<TabId>> {
        Ok(self.get(view_id)?.controller)
    }

    /// Drop the view and its tab state.
    pub fn unmount(&self, view_id: &str) -> Result<()> {
        let view = self
            .views
            .write()
            .remove(view_id)
            .ok_or_else(|| CoreError::ViewNotFound(view_id.to_string()))?;

        tracing::info!(view_id = %view.id, form = %view.form, "Unmounted form view");

        Ok(())
    }

    pub fn views_of_form(&self, form: &str) -> Vec<MountedView> {
        self.views
            .read()
            .values()
            .filter(|v| v.form == form)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.views.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.read().is_empty()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ViewRegistry {
    fn clone(&self) -> Self {
        Self {
            views: Arc::clone(&self.views),
        }
    }
}
