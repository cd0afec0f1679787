//! Synchronous publish/subscribe for in-process game events.

pub mod bus;
pub mod dispatcher;

pub use bus::{SimpleEvent, Subscription, SubscriptionId};
pub use dispatcher::EventDispatcher;
