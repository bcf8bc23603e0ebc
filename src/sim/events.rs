//! Minimal synchronous publish/subscribe bus
//!
//! Subscribers are shared (`Rc<RefCell<_>>`) so the owner can keep using
//! them between events. Identity is the `Rc` allocation: subscribing the same
//! handle twice is a no-op, and unsubscribing takes the same handle back.
//!
//! Delivery is in-line and in subscription order. A subscriber that fails,
//! or that is already borrowed further up the call stack, is logged and
//! skipped; the rest still receive the event.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::EventError;

/// Events carry their wire name for logging and host interop
pub trait NamedEvent {
    fn name(&self) -> &'static str;
}

/// Receives events from an `EventsEngine`
pub trait Subscriber<E> {
    fn on_event(&mut self, event: &E) -> Result<(), EventError>;
}

impl<E, F> Subscriber<E> for F
where
    F: FnMut(&E) -> Result<(), EventError>,
{
    fn on_event(&mut self, event: &E) -> Result<(), EventError> {
        self(event)
    }
}

/// Shared handle to a subscriber
pub type Handler<E> = Rc<RefCell<dyn Subscriber<E>>>;

/// Publish/subscribe bus for events of type `E`
pub struct EventsEngine<E> {
    handlers: Vec<Handler<E>>,
}

impl<E> Default for EventsEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventsEngine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventsEngine")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl<E> EventsEngine<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler (no effect if it is already registered)
    pub fn subscribe(&mut self, handler: Handler<E>) {
        if !self.contains(&handler) {
            self.handlers.push(handler);
        }
    }

    /// Remove a handler; absent handlers are ignored
    pub fn unsubscribe(&mut self, handler: &Handler<E>) {
        self.handlers.retain(|h| !same_handler(h, handler));
    }

    pub fn contains(&self, handler: &Handler<E>) -> bool {
        self.handlers.iter().any(|h| same_handler(h, handler))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E: NamedEvent> EventsEngine<E> {
    /// Deliver `event` to every subscriber, continuing past failures
    pub fn emit(&self, event: &E) {
        for handler in &self.handlers {
            let result = match handler.try_borrow_mut() {
                Ok(mut subscriber) => subscriber.on_event(event),
                Err(_) => Err(EventError::Busy {
                    event: event.name(),
                }),
            };
            if let Err(e) = result {
                log::warn!("Event delivery failed: {}", e);
            }
        }
    }
}

#[inline]
fn same_handler<E>(a: &Handler<E>, b: &Handler<E>) -> bool {
    // Compare allocations only; vtable pointers may differ across codegen units
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
