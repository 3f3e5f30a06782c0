//! UI commands
//!
//! Entry points the UI shell calls from its event handlers. Each returns a
//! `CommandResult` envelope so the shell never has to handle a Rust error.

use serde::{Deserialize, Serialize};

use bizadmin_tabs::TabId;

use crate::app::App;
use crate::pages::NotFoundPage;
use crate::views::MountedView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewInfo {
    pub view_id: String,
    pub form: String,
    pub active_tab: String,
    pub tabs: Vec<TabInfo>,
}

impl From<MountedView> for ViewInfo {
    fn from(view: MountedView) -> Self {
        let (active_tab, tabs) = view.controller.with(|controller| {
            let tabs: Vec<TabInfo> = view
                .tabs
                .panels(controller)
                .into_iter()
                .map(|panel| TabInfo {
                    id: panel.tab.to_string(),
                    active: panel.active,
                })
                .collect();
            (controller.active_tab().to_string(), tabs)
        });

        Self {
            view_id: view.id,
            form: view.form,
            active_tab,
            tabs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Next,
    Previous,
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T, E: std::fmt::Display> From<std::result::Result<T, E>> for CommandResult<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

pub fn mount_form(app: &App, form: String) -> CommandResult<ViewInfo> {
    app.mount_form(&form).map(ViewInfo::from).into()
}

pub fn mount_form_at(app: &App, form: String, tab: String) -> CommandResult<ViewInfo> {
    app.mount_form_at(&form, TabId::from(tab))
        .map(ViewInfo::from)
        .into()
}

pub fn unmount_form(app: &App, view_id: String) -> CommandResult<()> {
    app.views().unmount(&view_id).into()
}

pub fn get_view(app: &App, view_id: String) -> CommandResult<ViewInfo> {
    app.views().get(&view_id).map(ViewInfo::from).into()
}

pub fn get_active_tab(app: &App, view_id: String) -> CommandResult<String> {
    app.views()
        .controller(&view_id)
        .map(|c| c.active_tab().into_inner())
        .into()
}

/// Tab button click. Any tab is accepted.
pub fn set_active_tab(app: &App, view_id: String, tab: String) -> CommandResult<ViewInfo> {
    match app.views().get(&view_id) {
        Ok(view) => {
            view.controller.set_active_tab(TabId::from(tab));
            CommandResult::ok(view.into())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Like [`set_active_tab`], but only for tabs the form declares.
pub fn select_tab(app: &App, view_id: String, tab: String) -> CommandResult<ViewInfo> {
    let view = match app.views().get(&view_id) {
        Ok(view) => view,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match view
        .controller
        .try_set_active_tab(&view.tabs, TabId::from(tab))
    {
        Ok(()) => CommandResult::ok(view.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn is_tab_active(app: &App, view_id: String, tab: String) -> CommandResult<bool> {
    app.views()
        .controller(&view_id)
        .map(|c| c.is_tab_active(tab.as_str()))
        .into()
}

pub fn get_tab_panels(app: &App, view_id: String) -> CommandResult<Vec<TabInfo>> {
    app.views()
        .get(&view_id)
        .map(|view| ViewInfo::from(view).tabs)
        .into()
}

/// Keyboard navigation between tabs, wrapping at both ends.
pub fn step_tab(app: &App, view_id: String, direction: StepDirection) -> CommandResult<ViewInfo> {
    let view = match app.views().get(&view_id) {
        Ok(view) => view,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    view.controller.update(|current| match direction {
        StepDirection::Next => view.tabs.next_after(current).clone(),
        StepDirection::Previous => view.tabs.previous_before(current).clone(),
    });

    CommandResult::ok(view.into())
}

pub fn not_found_page(app: &App) -> CommandResult<NotFoundPage> {
    CommandResult::ok(app.not_found_page())
}
