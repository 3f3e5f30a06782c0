//! Declared tabs of a form
//!
//! The render side iterates a `TabSet` to draw buttons and panels. The
//! controller does not depend on it.

use std::fmt;

use serde::Serialize;

use crate::controller::TabController;
use crate::error::TabError;
use crate::Result;

/// Ordered, duplicate-free list of the tabs a form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TabSet<T> {
    tabs: Vec<T>,
}

/// One tab as the render side sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabPanel<'a, T> {
    pub tab: &'a T,
    pub active: bool,
}

impl<T> TabSet<T>
where
    T: PartialEq + fmt::Display,
{
    pub fn new(tabs: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut collected: Vec<T> = Vec::new();
        for tab in tabs {
            if collected.contains(&tab) {
                return Err(TabError::DuplicateTab(tab.to_string()));
            }
            collected.push(tab);
        }

        if collected.is_empty() {
            return Err(TabError::EmptyTabSet);
        }

        Ok(Self { tabs: collected })
    }

    pub fn contains(&self, tab: &T) -> bool {
        self.tabs.contains(tab)
    }

    pub fn position(&self, tab: &T) -> Option<usize> {
        self.tabs.iter().position(|t| t == tab)
    }

    /// First declared tab, the usual default for a freshly mounted form
    pub fn first(&self) -> &T {
        &self.tabs[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tab after `tab`, wrapping to the first. A tab outside the set steps
    /// to the first tab.
    pub fn next_after(&self, tab: &T) -> &T {
        match self.position(tab) {
            Some(i) => &self.tabs[(i + 1) % self.tabs.len()],
            None => self.first(),
        }
    }

    /// Tab before `tab`, wrapping to the last. A tab outside the set steps
    /// to the last tab.
    pub fn previous_before(&self, tab: &T) -> &T {
        let len = self.tabs.len();
        match self.position(tab) {
            Some(i) => &self.tabs[(i + len - 1) % len],
            None => &self.tabs[len - 1],
        }
    }

    /// Every declared tab with its visibility under `controller`.
    ///
    /// If the active tab is not declared here, no panel is active.
    pub fn panels<'a>(&'a self, controller: &TabController<T>) -> Vec<TabPanel<'a, T>>
    where
        T: fmt::Debug,
    {
        self.tabs
            .iter()
            .map(|tab| TabPanel {
                tab,
                active: controller.is_tab_active(tab),
            })
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a TabSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}
