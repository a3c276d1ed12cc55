//! Name registry
//!
//! Owns the mapping from client name to its isolated [`ClientContext`].
//! A context is created at most once per name, concurrency safe, and lives
//! until it is explicitly disposed.

use crate::context::ClientContext;
use crate::definition::DefinitionProvider;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ncr_domain::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Registry of per-name client contexts
pub struct ContextRegistry {
    contexts: DashMap<String, Arc<ClientContext>>,
    provider: Arc<dyn DefinitionProvider>,
}

impl ContextRegistry {
    /// Create a registry backed by the given definition provider
    pub fn new(provider: Arc<dyn DefinitionProvider>) -> Self {
        Self {
            contexts: DashMap::new(),
            provider,
        }
    }

    /// Get the context for a name, creating it on first access
    ///
    /// Idempotent: concurrent calls with the same name yield exactly one
    /// context, and the definition provider is consulted exactly once per
    /// name. Provider failures surface as
    /// [`Error::ContextCreation`] and nothing is inserted.
    pub fn get_or_create(&self, name: &str) -> Result<Arc<ClientContext>> {
        if let Some(existing) = self.contexts.get(name) {
            return Ok(Arc::clone(existing.value()));
        }
        match self.contexts.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let specification = self
                    .provider
                    .specification_for(name)
                    .map_err(|source| Error::context_creation_with_source(name, source))?;
                let context = Arc::new(ClientContext::new(name, specification));
                info!(client = name, "created client context");
                let inserted = entry.insert(context);
                Ok(Arc::clone(inserted.value()))
            }
        }
    }

    /// Whether a context exists for the name
    pub fn contains(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }

    /// Names with a live context
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Dispose the context for a name, releasing its cached instances
    ///
    /// Returns whether a context existed. A later request for the same name
    /// creates a fresh context.
    pub fn dispose(&self, name: &str) -> bool {
        match self.contexts.remove(name) {
            Some((_, context)) => {
                context.dispose();
                info!(client = name, "disposed client context");
                true
            }
            None => false,
        }
    }

    /// Dispose every context
    pub fn dispose_all(&self) {
        for name in self.context_names() {
            self.dispose(&name);
        }
    }
}

impl Drop for ContextRegistry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
