//! Tab-state controller
//!
//! One controller per mounted form view. It holds exactly one active tab and
//! lives as long as the view that created it.
//!
//! ```text
//!   any tab --set_active_tab(t)--> t     (including t itself)
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::error::TabError;
use crate::set::TabSet;
use crate::Result;

pub(crate) type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`TabController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct TabController<T> {
    /// Currently active tab
    active: T,
    /// Views to notify after every mutation
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: u64,
}

impl<T> TabController<T>
where
    T: PartialEq + fmt::Debug,
{
    /// Create a controller whose active tab is `initial`.
    ///
    /// `initial` is not checked against any tab set.
    pub fn new(initial: T) -> Self {
        Self {
            active: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The currently active tab
    pub fn active_tab(&self) -> &T {
        &self.active
    }

    /// Replace the active tab and notify subscribers.
    ///
    /// Setting the tab that is already active still notifies.
    pub fn set_active_tab(&mut self, tab: T) {
        self.replace(tab);
        self.notify();
    }

    /// Swap the active tab without notifying.
    pub(crate) fn replace(&mut self, tab: T) {
        tracing::debug!(from = ?self.active, to = ?tab, "Active tab changed");
        self.active = tab;
    }

    /// Like [`set_active_tab`](Self::set_active_tab), but rejects tabs that
    /// are not part of `tabs`. The active tab is left unchanged on error.
    pub fn try_set_active_tab(&mut self, tabs: &TabSet<T>, tab: T) -> Result<()>
    where
        T: fmt::Display,
    {
        ensure_declared(tabs, &tab)?;
        self.set_active_tab(tab);
        Ok(())
    }

    /// True iff `tab` equals the active tab.
    pub fn is_tab_active<Q>(&self, tab: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.active.borrow() == tab
    }

    /// Register a listener called with the new active tab after each
    /// mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current listeners, for callers that notify outside a lock.
    pub(crate) fn listeners(&self) -> Vec<Listener<T>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.active);
        }
    }
}

pub(crate) fn ensure_declared<T>(tabs: &TabSet<T>, tab: &T) -> Result<()>
where
    T: PartialEq + fmt::Display,
{
    if !tabs.contains(tab) {
        tracing::warn!(tab = %tab, "Rejected tab outside the form's tab set");
        return Err(TabError::UnknownTab(tab.to_string()));
    }
    Ok(())
}

impl<T: fmt::Debug> fmt::Debug for TabController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabController")
            .field("active", &self.active)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
