//! Behavioral Pattern: Observer
//! Example: Editor file events fanned out to listeners
//!
//! Run with: cargo run --bin observer
//!
//! ## Problem
//! Several objects care about what happens to another one, and polling it
//! is wasteful. The set of interested objects is only known at runtime.
//!
//! ## Solution
//! The publisher keeps a subscriber list per event type and walks it when
//! the event fires. Subscribers share one `update` interface, so the publisher
//! never learns their concrete type. Like a newsletter: subscribe,
//! receive issues, unsubscribe.
//!
//! ## Structure
//! - [`EventManager`]: subscription bookkeeping. `subscribe` hands back a
//!   [`SubscriptionId`] used to unsubscribe later.
//! - [`Editor`]: the publisher; fires `open`/`save`/`close`.
//! - [`EventListener`]: the subscriber interface.
//! - [`LoggingListener`], [`EmailAlertsListener`]: concrete subscribers.
//!
//! ## Trade-offs
//! New subscribers need no publisher changes and relations are set up at
//! runtime. Listeners here are notified in subscription order; do not rely
//! on ordering across event types.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("no file is open")]
    NoOpenFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Open,
    Save,
    Close,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Open => write!(f, "open"),
            EventKind::Save => write!(f, "save"),
            EventKind::Close => write!(f, "close"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub kind: EventKind,
    pub filename: String,
}

pub trait EventListener {
    fn update(&self, event: &FileEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct EventManager {
    listeners: FxHashMap<EventKind, Vec<(SubscriptionId, Rc<dyn EventListener>)>>,
    next_id: u64,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, listener: Rc<dyn EventListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push((id, listener));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(index) = listeners.iter().position(|(sub, _)| *sub == id) {
                listeners.remove(index);
                return true;
            }
        }
        false
    }

    /// Notifies every subscriber of `event.kind`; returns how many were reached.
    pub fn notify(&self, event: &FileEvent) -> usize {
        let Some(listeners) = self.listeners.get(&event.kind) else {
            return 0;
        };
        for (_, listener) in listeners {
            listener.update(event);
        }
        debug!(kind = %event.kind, count = listeners.len(), "notified listeners");
        listeners.len()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }
}

/// The publisher.
#[derive(Default)]
pub struct Editor {
    events: EventManager,
    file: Option<String>,
}

impl Editor {
    pub fn new(events: EventManager) -> Self {
        Editor { events, file: None }
    }

    pub fn events(&mut self) -> &mut EventManager {
        &mut self.events
    }

    pub fn open_file(&mut self, filename: &str) -> usize {
        self.file = Some(filename.to_string());
        self.publish(EventKind::Open, filename.to_string())
    }

    pub fn save_file(&mut self) -> Result<usize, ObserverError> {
        let filename = self.file.clone().ok_or(ObserverError::NoOpenFile)?;
        Ok(self.publish(EventKind::Save, filename))
    }

    pub fn close_file(&mut self) -> Result<usize, ObserverError> {
        let filename = self.file.take().ok_or(ObserverError::NoOpenFile)?;
        Ok(self.publish(EventKind::Close, filename))
    }

    fn publish(&self, kind: EventKind, filename: String) -> usize {
        self.events.notify(&FileEvent { kind, filename })
    }
}

// ============================================================================
// Concrete listeners
// ============================================================================

pub struct LoggingListener {
    log_file: String,
    entries: RefCell<Vec<String>>,
}

impl LoggingListener {
    pub fn new(log_file: impl Into<String>) -> Self {
        LoggingListener {
            log_file: log_file.into(),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl EventListener for LoggingListener {
    fn update(&self, event: &FileEvent) {
        self.entries.borrow_mut().push(format!(
            "[{}] {} operation on {}",
            self.log_file, event.kind, event.filename
        ));
    }
}

pub struct EmailAlertsListener {
    address: String,
    outbox: RefCell<Vec<String>>,
}

impl EmailAlertsListener {
    pub fn new(address: impl Into<String>) -> Self {
        EmailAlertsListener {
            address: address.into(),
            outbox: RefCell::new(Vec::new()),
        }
    }

    pub fn outbox(&self) -> Vec<String> {
        self.outbox.borrow().clone()
    }
}

impl EventListener for EmailAlertsListener {
    fn update(&self, event: &FileEvent) {
        self.outbox.borrow_mut().push(format!(
            "Email to {}: someone performed {} on {}",
            self.address, event.kind, event.filename
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_only_hear_subscribed_events() {
        let logger = Rc::new(LoggingListener::new("log.txt"));
        let mailer = Rc::new(EmailAlertsListener::new("admin@example.com"));

        let mut editor = Editor::default();
        editor.events().subscribe(EventKind::Open, logger.clone());
        editor.events().subscribe(EventKind::Save, logger.clone());
        editor.events().subscribe(EventKind::Save, mailer.clone());

        assert_eq!(editor.open_file("test.txt"), 1);
        assert_eq!(editor.save_file(), Ok(2));
        assert_eq!(editor.close_file(), Ok(0));

        assert_eq!(
            logger.entries(),
            vec![
                "[log.txt] open operation on test.txt",
                "[log.txt] save operation on test.txt"
            ]
        );
        assert_eq!(mailer.outbox().len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let logger = Rc::new(LoggingListener::new("log.txt"));
        let mut manager = EventManager::new();
        let id = manager.subscribe(EventKind::Open, logger.clone());

        assert!(manager.unsubscribe(id));
        assert!(!manager.unsubscribe(id));
        assert_eq!(manager.listener_count(EventKind::Open), 0);

        let mut editor = Editor::new(manager);
        editor.open_file("a.txt");
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_same_listener_twice_gets_two_ids() {
        let logger = Rc::new(LoggingListener::new("log.txt"));
        let mut manager = EventManager::new();
        let a = manager.subscribe(EventKind::Save, logger.clone());
        let b = manager.subscribe(EventKind::Save, logger.clone());
        assert_ne!(a, b);

        manager.unsubscribe(a);
        assert_eq!(manager.listener_count(EventKind::Save), 1);
    }

    #[test]
    fn test_save_without_open_file() {
        let mut editor = Editor::default();
        assert_eq!(editor.save_file(), Err(ObserverError::NoOpenFile));
        assert_eq!(editor.close_file(), Err(ObserverError::NoOpenFile));
    }
}
