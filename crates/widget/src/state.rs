//! Application state owned by the coordinator.
//!
//! Everything the widget knows lives in one struct passed to components,
//! not in ambient globals; that keeps every component testable in
//! isolation.

use std::collections::HashMap;

use golden_fork_core::{Product, ProductId};

use crate::cart::Cart;
use crate::notify::{NotificationId, NotificationQueue};
use crate::panels::PanelState;
use crate::schedule::{Scheduler, TaskId};

/// A deferred mutation queued on the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Task {
    /// Delete a cart line after its slide-out animation.
    RemoveCartLine(ProductId),
    /// Auto-dismiss a notification: begin its exit animation.
    RetireNotification(NotificationId),
    /// Drop a notification once its exit animation has played.
    DropNotification(NotificationId),
}

/// All widget state, owned by the [`App`](crate::app::App).
#[derive(Debug)]
pub(crate) struct AppState {
    /// The loaded catalog; replaced wholesale, never edited.
    pub catalog: Vec<Product>,
    pub cart: Cart,
    pub panels: PanelState,
    pub notifications: NotificationQueue,
    pub scheduler: Scheduler<Task>,
    /// The one pending auto-dismiss, cancelled on supersession.
    pub dismiss_task: Option<TaskId>,
    /// Pending line removals by product, cancelled if the line is revived.
    pub removal_tasks: HashMap<ProductId, TaskId>,
}

impl AppState {
    pub fn new(quantity_cap: u32) -> Self {
        Self {
            catalog: Vec::new(),
            cart: Cart::new(quantity_cap),
            panels: PanelState::new(),
            notifications: NotificationQueue::new(),
            scheduler: Scheduler::new(),
            dismiss_task: None,
            removal_tasks: HashMap::new(),
        }
    }
}
