//! Creational Pattern: Singleton
//! Example: One shared database handle per registry
//!
//! Run with: cargo run --bin singleton
//!
//! The classic form hides a global behind a static accessor. Here the "one
//! instance" guarantee is scoped to an [`InstanceRegistry`] value that callers
//! pass around explicitly: every `get_or_init::<T>` on the same registry
//! returns the same `Rc<T>`, the initializer runs at most once per type, and
//! dropping the registry ends the instance's lifetime. Tests get a fresh
//! registry each and never see each other's state.

use std::any::{Any, TypeId};
use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Default)]
pub struct InstanceRegistry {
    instances: FxHashMap<TypeId, Rc<dyn Any>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_init<T: Any>(&mut self, init: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.get::<T>() {
            return existing;
        }

        debug!(ty = std::any::type_name::<T>(), "creating shared instance");
        let instance = Rc::new(init());
        self.instances
            .insert(TypeId::of::<T>(), Rc::clone(&instance) as Rc<dyn Any>);
        instance
    }

    pub fn get<T: Any>(&self) -> Option<Rc<T>> {
        let entry = self.instances.get(&TypeId::of::<T>())?;
        Rc::clone(entry).downcast::<T>().ok()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Stand-in for an expensive connection.
#[derive(Debug)]
pub struct Database {
    url: String,
    queries: Cell<u32>,
}

impl Database {
    pub fn connect(url: &str) -> Self {
        debug!(url, "opening database connection");
        Database {
            url: url.to_string(),
            queries: Cell::new(0),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self, sql: &str) -> String {
        self.queries.set(self.queries.get() + 1);
        format!("[{}] {}", self.url, sql)
    }

    pub fn query_count(&self) -> u32 {
        self.queries.get()
    }
}
