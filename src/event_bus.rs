//! Synchronous publish/subscribe between the router and the footer.
//!
//! The router is the only publisher; each [`NavItem`](crate::NavItem)
//! subscribes to [`BusEvent::Nav`] when it is created. Delivery happens on
//! the publishing call, in subscription order, before `publish` returns.
//!
//! The bus is an ordinary value: [`App`](crate::App) creates one and hands
//! `Rc<EventBus>` to whoever needs it.
//!
//! # Example
//!
//! ```
//! use page_navigator::{BusEvent, EventBus, PageName};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let bus = EventBus::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! bus.subscribe(BusEvent::Nav, bus.new_listener(), move |page| {
//!     sink.borrow_mut().push(*page)
//! });
//!
//! assert_eq!(bus.publish(BusEvent::Nav, &PageName::Views), 1);
//! assert_eq!(*seen.borrow(), vec![PageName::Views]);
//! ```

use crate::page::PageName;
use crate::trace_log;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Events carried by the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusEvent {
    /// A page became active. Payload: the page.
    Nav,
}

impl BusEvent {
    /// Wire name of the event.
    pub const fn as_str(self) -> &'static str {
        match self {
            BusEvent::Nav => "nav",
        }
    }
}

/// Identity of a subscriber, used to drop all of its handlers at once.
///
/// Allocated by [`EventBus::new_listener`] and only meaningful on that bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Handle to a single subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&PageName)>;

struct Subscription {
    id: SubscriptionId,
    event: BusEvent,
    owner: ListenerId,
    handler: Handler,
}

/// In-process, single-threaded event bus.
pub struct EventBus {
    subscriptions: RefCell<Vec<Subscription>>,
    next_id: Cell<u64>,
    next_owner: Cell<u64>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            next_owner: Cell::new(0),
        }
    }

    /// Allocate a listener identity unique on this bus.
    pub fn new_listener(&self) -> ListenerId {
        let id = self.next_owner.get();
        self.next_owner.set(id + 1);
        ListenerId(id)
    }

    /// Register `handler` for `event` on behalf of `owner`.
    pub fn subscribe<F>(&self, event: BusEvent, owner: ListenerId, handler: F) -> SubscriptionId
    where
        F: Fn(&PageName) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            event,
            owner,
            handler: Rc::new(handler),
        });
        trace_log!(
            "Subscribed {:?} (owner {:?}) to '{}'",
            id,
            owner,
            event.as_str()
        );
        id
    }

    /// Deliver `payload` to every handler of `event`, in subscription order.
    ///
    /// Handlers are collected before the first one runs, so a handler that
    /// subscribes or unsubscribes affects the next publish, not this one.
    /// Returns the number of handlers invoked.
    pub fn publish(&self, event: BusEvent, payload: &PageName) -> usize {
        let handlers: Vec<Handler> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.event == event)
            .map(|sub| Rc::clone(&sub.handler))
            .collect();

        trace_log!(
            "Publishing '{}' ({}) to {} handler(s)",
            event.as_str(),
            payload,
            handlers.len()
        );
        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }

    /// Remove one subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.id != id);
        subscriptions.len() != before
    }

    /// Remove every subscription held by `owner`. Returns how many were removed.
    pub fn unsubscribe_owner(&self, owner: ListenerId) -> usize {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.owner != owner);
        before - subscriptions.len()
    }

    /// Number of handlers currently registered for `event`.
    pub fn subscriber_count(&self, event: BusEvent) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.event == event)
            .count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.borrow().len())
            .finish_non_exhaustive()
    }
}
