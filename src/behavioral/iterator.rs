//! Behavioral Pattern: Iterator
//! Example: Walking a social network's friends and coworkers lists
//!
//! Run with: cargo run --bin iterator
//!
//! ## Problem
//! - A collection has a non-trivial internal structure (here: profiles plus a
//!   contact graph) that clients should not depend on.
//! - The same collection needs several traversal orders ("friends" vs
//!   "coworkers") without duplicating traversal code in every client.
//!
//! ## Solution
//! - The collection hands out iterator objects through factory methods.
//! - Each iterator owns its cursor, so many traversals can run at once over
//!   the same collection without interfering.
//! - All iterators share one interface, so clients such as [`SocialSpammer`]
//!   work with any of them.
//!
//! ## Structure
//! - [`ProfileIterator`]: the iterator interface (`has_more` / `get_next`).
//! - [`FacebookIterator`]: concrete iterator; fetches its working set lazily,
//!   exactly once, on the first query.
//! - [`SocialNetwork`]: the collection interface returning iterators.
//! - [`Facebook`]: concrete collection; also the [`ProfileSource`] the
//!   iterators fetch from.
//!
//! ## Trade-offs
//! - Extracts traversal into one place and lets new traversals be added
//!   without touching clients.
//! - Overkill for plain sequences, where `std::iter::Iterator` already does
//!   the job. [`FacebookIterator::into_profiles`] bridges to it.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IteratorError {
    #[error("no more profiles")]
    Exhausted,
    #[error("unknown profile {0}")]
    UnknownProfile(u32),
    #[error("profile {0} is listed as a contact but does not exist")]
    MissingProfile(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    id: u32,
    name: String,
    email: String,
}

impl Profile {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Profile {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile: {} ({})", self.name, self.email)
    }
}

/// Selection key deciding which contact list an iterator walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Friends,
    Coworkers,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Friends => write!(f, "friends"),
            Relation::Coworkers => write!(f, "coworkers"),
        }
    }
}

/// Backing data source queried by iterators. `None` means "not there".
pub trait ProfileSource {
    fn profile(&self, id: u32) -> Option<Profile>;

    /// Ordered contact ids of `id` for `relation`; `None` if `id` is unknown.
    fn related_ids(&self, id: u32, relation: Relation) -> Option<Vec<u32>>;
}

pub trait ProfileIterator {
    /// Whether `get_next` would succeed. Never moves the cursor.
    fn has_more(&mut self) -> Result<bool, IteratorError>;

    fn get_next(&mut self) -> Result<Profile, IteratorError>;
}

pub trait SocialNetwork {
    fn create_friends_iterator(&self, profile_id: u32) -> Box<dyn ProfileIterator + '_>;

    fn create_coworkers_iterator(&self, profile_id: u32) -> Box<dyn ProfileIterator + '_>;
}

// ============================================================================
// Concrete collection
// ============================================================================

#[derive(Debug, Default)]
pub struct Facebook {
    profiles: Vec<Profile>,
    contacts: FxHashMap<(u32, Relation), Vec<u32>>,
}

impl Facebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Appends `contact_id` to `profile_id`'s list for `relation`.
    pub fn connect(&mut self, profile_id: u32, relation: Relation, contact_id: u32) {
        self.contacts
            .entry((profile_id, relation))
            .or_default()
            .push(contact_id);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileSource for Facebook {
    fn profile(&self, id: u32) -> Option<Profile> {
        self.profiles.iter().find(|p| p.id == id).cloned()
    }

    fn related_ids(&self, id: u32, relation: Relation) -> Option<Vec<u32>> {
        if !self.profiles.iter().any(|p| p.id == id) {
            return None;
        }
        Some(self.contacts.get(&(id, relation)).cloned().unwrap_or_default())
    }
}

impl SocialNetwork for Facebook {
    fn create_friends_iterator(&self, profile_id: u32) -> Box<dyn ProfileIterator + '_> {
        Box::new(FacebookIterator::new(self, Relation::Friends, profile_id))
    }

    fn create_coworkers_iterator(&self, profile_id: u32) -> Box<dyn ProfileIterator + '_> {
        Box::new(FacebookIterator::new(self, Relation::Coworkers, profile_id))
    }
}

// ============================================================================
// Concrete iterator
// ============================================================================

pub struct FacebookIterator<'a, S: ProfileSource + ?Sized> {
    source: &'a S,
    relation: Relation,
    profile_id: u32,
    position: usize,
    cache: Option<Vec<Profile>>,
}

impl<'a, S: ProfileSource + ?Sized> FacebookIterator<'a, S> {
    pub fn new(source: &'a S, relation: Relation, profile_id: u32) -> Self {
        FacebookIterator {
            source,
            relation,
            profile_id,
            position: 0,
            cache: None,
        }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Number of profiles handed out so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Fetches the working set on first use and reuses it afterwards.
    fn lazy_init(&mut self) -> Result<&[Profile], IteratorError> {
        if self.cache.is_none() {
            let source = self.source;
            let ids = source
                .related_ids(self.profile_id, self.relation)
                .ok_or(IteratorError::UnknownProfile(self.profile_id))?;

            let profiles = ids
                .into_iter()
                .map(|id| source.profile(id).ok_or(IteratorError::MissingProfile(id)))
                .collect::<Result<Vec<_>, _>>()?;

            debug!(
                profile_id = self.profile_id,
                relation = %self.relation,
                count = profiles.len(),
                "fetched contacts"
            );
            self.cache = Some(profiles);
        }

        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Adapts this iterator to `std::iter::Iterator`, fused after the first error.
    pub fn into_profiles(self) -> Profiles<'a, S> {
        Profiles {
            inner: self,
            done: false,
        }
    }
}

impl<S: ProfileSource + ?Sized> ProfileIterator for FacebookIterator<'_, S> {
    fn has_more(&mut self) -> Result<bool, IteratorError> {
        let len = self.lazy_init()?.len();
        Ok(self.position < len)
    }

    fn get_next(&mut self) -> Result<Profile, IteratorError> {
        let position = self.position;
        let next = self.lazy_init()?.get(position).cloned();

        match next {
            Some(profile) => {
                self.position += 1;
                trace!(position = self.position, id = profile.id, "advanced cursor");
                Ok(profile)
            }
            None => Err(IteratorError::Exhausted),
        }
    }
}

pub struct Profiles<'a, S: ProfileSource + ?Sized> {
    inner: FacebookIterator<'a, S>,
    done: bool,
}

impl<S: ProfileSource + ?Sized> Iterator for Profiles<'_, S> {
    type Item = Result<Profile, IteratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.has_more() {
            Ok(true) => Some(self.inner.get_next()),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Works with any [`ProfileIterator`]; never sees how profiles are stored.
#[derive(Debug, Default)]
pub struct SocialSpammer;

impl SocialSpammer {
    /// Drains the iterator, returning one delivery line per profile.
    pub fn send(
        &self,
        iterator: &mut dyn ProfileIterator,
        message: &str,
    ) -> Result<Vec<String>, IteratorError> {
        let mut sent = Vec::new();
        while iterator.has_more()? {
            let profile = iterator.get_next()?;
            sent.push(format!("Sending message to {}: {}", profile.name(), message));
        }
        debug!(recipients = sent.len(), "spam run finished");
        Ok(sent)
    }

    /// Comma-separated recipient names, for summaries.
    pub fn recipients(&self, iterator: &mut dyn ProfileIterator) -> Result<String, IteratorError> {
        let mut names = Vec::new();
        while iterator.has_more()? {
            names.push(iterator.get_next()?.name);
        }
        Ok(names.iter().join(", "))
    }
}
