//! Shared controller handle
//!
//! Hosts that hand the same controller to several event handlers clone this
//! handle instead of threading `&mut` through them.

use parking_lot::RwLock;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::controller::{ensure_declared, Listener, SubscriptionId, TabController};
use crate::set::TabSet;
use crate::Result;

pub struct SharedTabController<T> {
    inner: Arc<RwLock<TabController<T>>>,
}

impl<T> SharedTabController<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TabController::new(initial))),
        }
    }

    pub fn active_tab(&self) -> T {
        self.inner.read().active_tab().clone()
    }

    /// Replace the active tab, then notify subscribers.
    ///
    /// Listeners run after the lock is released, so they may read this
    /// handle.
    pub fn set_active_tab(&self, tab: T) {
        self.update(|_| tab);
    }

    pub fn try_set_active_tab(&self, tabs: &TabSet<T>, tab: T) -> Result<()>
    where
        T: fmt::Display,
    {
        ensure_declared(tabs, &tab)?;
        self.set_active_tab(tab);
        Ok(())
    }

    /// Derive the next active tab from the current one under a single
    /// write lock, then notify subscribers.
    pub fn update<F>(&self, next: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let (active, listeners): (T, Vec<Listener<T>>) = {
            let mut controller = self.inner.write();
            let tab = next(controller.active_tab());
            controller.replace(tab);
            (controller.active_tab().clone(), controller.listeners())
        };

        for listener in &listeners {
            listener(&active);
        }

        active
    }

    pub fn is_tab_active<Q>(&self, tab: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.inner.read().is_tab_active(tab)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.write().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.write().unsubscribe(id)
    }

    /// Run `f` against the controller under a read lock.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TabController<T>) -> R,
    {
        f(&self.inner.read())
    }
}

impl<T> Clone for SharedTabController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedTabController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedTabController")
            .field(&*self.inner.read())
            .finish()
    }
}
