//! Event subscription abstraction (mechanics only).
//!
//! This module provides the **observer pattern** used by game features to
//! announce what happened (currency gained, upgrade bought, ...) to UI code.
//!
//! ## Delivery
//!
//! - **Synchronous**: handlers run inline, inside the publishing operation
//! - **Ordered**: handlers run in the order they subscribed
//! - **Exactly once** per dispatch for every handler subscribed when the
//!   dispatch started
//! - **Read-only**: handlers receive the message by reference and cannot
//!   veto or alter what the publisher does with it
//!
//! Everything is single-threaded. Handlers are not `Send` and dispatchers are
//! not `Sync`.

use std::rc::Weak;

/// Identifies one subscription within its dispatcher.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl core::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Removes a subscription from whatever registry issued it.
pub(crate) trait Detach {
    fn detach(&self, id: SubscriptionId) -> bool;
}

/// Handle to a registered handler.
///
/// Dropping the handle does **not** unsubscribe; call
/// [`Subscription::unsubscribe`] (or [`SimpleEvent::unsubscribe`]) to detach.
/// The handle only holds a weak reference, so it never keeps a dispatcher alive.
///
/// ## Usage Pattern
///
/// ```ignore
/// let sub = wallet.on_currency_gain().subscribe(Box::new(|gain| {
///     println!("gained {gain}");
/// }));
///
/// // later, when the view closes
/// sub.unsubscribe();
/// ```
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<dyn Detach>) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Detach the handler.
    ///
    /// Returns `false` if it was already detached or the dispatcher is gone.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.detach(self.id),
            None => false,
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.registry.strong_count() > 0))
            .finish()
    }
}

/// Subscribe side of an event.
///
/// Publishers keep the [`crate::EventDispatcher`] private and hand out
/// `&dyn SimpleEvent<M>` so that consumers can listen but never publish.
pub trait SimpleEvent<M> {
    /// Register a handler. It runs for every message dispatched from now on.
    fn subscribe(&self, handler: Box<dyn Fn(&M)>) -> Subscription;

    /// Detach a handler. Returns `false` if it was not attached here.
    fn unsubscribe(&self, subscription: &Subscription) -> bool;

    /// Number of currently attached handlers.
    fn subscriber_count(&self) -> usize;
}
