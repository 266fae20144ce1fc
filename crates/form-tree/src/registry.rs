//! Identifier registry
//!
//! Tracks every id claimed inside one form tree so generated ids never
//! collide with ids already handed out. Explicit ids are recorded but never
//! rejected: two elements may be given the same id on purpose.
//!
//! # Lifecycle
//! - [`IdRegistry::new`] creates an empty registry
//! - [`IdRegistry::store_id`] records an explicit id
//! - [`IdRegistry::generate_id`] derives and records a fresh id from a name
//! - [`IdRegistry::dispose`] forgets everything

use std::collections::{HashMap, HashSet};

use crate::TreeConfig;

/// Claimed identifiers of one form tree
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    claimed: HashSet<String>,
    /// Next index to try per generated base
    counters: HashMap<String, u32>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicitly assigned id
    pub fn store_id(&mut self, id: &str) {
        if !self.claimed.insert(id.to_string()) {
            tracing::trace!("Id '{}' claimed again", id);
        }
    }

    /// Check whether an id has been claimed
    pub fn is_claimed(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }

    /// Number of claimed ids
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Generate an unclaimed id for an element name and claim it.
    ///
    /// `user[address][city]` yields `user-address-city`; a repeated name gets
    /// `-0`, `-1`, ... appended. Names ending in `[]` always get an index.
    pub fn generate_id(&mut self, name: &str, config: &TreeConfig) -> String {
        let (base, indexed) = base_id(name, config);

        if !indexed && !config.force_append_index && !self.claimed.contains(&base) {
            tracing::trace!("Generated id '{}' for name '{}'", base, name);
            self.claimed.insert(base.clone());
            return base;
        }

        let next = self.counters.entry(base.clone()).or_insert(0);
        loop {
            let candidate = format!("{}{}{}", base, config.separator, next);
            *next += 1;
            if !self.claimed.contains(&candidate) {
                tracing::trace!("Generated id '{}' for name '{}'", candidate, name);
                self.claimed.insert(candidate.clone());
                return candidate;
            }
        }
    }

    /// Forget every claimed id and counter
    pub fn dispose(&mut self) {
        tracing::debug!("Disposing id registry with {} ids", self.claimed.len());
        self.claimed.clear();
        self.counters.clear();
    }
}

/// Split a bracketed name into id tokens.
///
/// Returns the joined base and whether the name had an empty `[]` segment.
fn base_id(name: &str, config: &TreeConfig) -> (String, bool) {
    let stripped = name.replace(']', "");
    let mut indexed = false;
    let mut tokens: Vec<String> = Vec::new();

    for token in stripped.split('[') {
        if token.is_empty() {
            indexed = true;
            continue;
        }
        if tokens.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            tokens.push(format!("{}{}", config.numeric_prefix, token));
        } else {
            tokens.push(token.to_string());
        }
    }

    if tokens.is_empty() {
        tokens.push(config.auto_name.clone());
    }

    // A bare empty name is not an array-style name
    if name.is_empty() {
        indexed = false;
    }

    (tokens.join(&config.separator), indexed)
}
