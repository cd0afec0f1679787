//! In-process event dispatcher.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::bus::{Detach, SimpleEvent, Subscription, SubscriptionId};

type Handler<M> = Rc<dyn Fn(&M)>;

struct Registry<M> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(SubscriptionId, Handler<M>)>>,
}

impl<M> Detach for Registry<M> {
    fn detach(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        let removed = handlers.len() != before;
        if removed {
            tracing::trace!(subscription = %id, "handler unsubscribed");
        }
        removed
    }
}

/// Owning side of an event: holds the handlers and dispatches to them.
///
/// - No IO / no async
/// - Handlers run synchronously, in subscription order
/// - Handlers may subscribe or unsubscribe while a dispatch is running; the
///   change applies from the next dispatch
pub struct EventDispatcher<M> {
    registry: Rc<Registry<M>>,
}

impl<M: 'static> EventDispatcher<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe-only view, safe to hand to consumers.
    pub fn as_event(&self) -> &dyn SimpleEvent<M> {
        self
    }

    /// Call every attached handler with `message`.
    pub fn dispatch(&self, message: &M) {
        // Snapshot so handlers can (un)subscribe without a re-borrow.
        let handlers: Vec<Handler<M>> = self
            .registry
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            (*handler)(message);
        }
    }
}

impl<M: 'static> Default for EventDispatcher<M> {
    fn default() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }
}

impl<M: 'static> SimpleEvent<M> for EventDispatcher<M> {
    fn subscribe(&self, handler: Box<dyn Fn(&M)>) -> Subscription {
        let id = SubscriptionId(self.registry.next_id.get());
        self.registry.next_id.set(id.0 + 1);
        self.registry
            .handlers
            .borrow_mut()
            .push((id, Rc::from(handler)));
        tracing::trace!(subscription = %id, "handler subscribed");

        let registry: Weak<Registry<M>> = Rc::downgrade(&self.registry);
        let registry: Weak<dyn Detach> = registry;
        Subscription::new(id, registry)
    }

    fn unsubscribe(&self, subscription: &Subscription) -> bool {
        self.registry.detach(subscription.id())
    }

    fn subscriber_count(&self) -> usize {
        self.registry.handlers.borrow().len()
    }
}

impl<M> core::fmt::Debug for EventDispatcher<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.registry.handlers.borrow().len())
            .finish()
    }
}
