//! Per-name client context
//!
//! A [`ClientContext`] is the isolated component set for one client name:
//! the merged specification (read-only after creation) and the instance
//! cache. At most one instance per capability is ever cached; once cached it
//! is never replaced.

use crate::definition::{BuildContext, ContextSpecification};
use dashmap::DashMap;
use ncr_domain::{Capability, Component};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

fn lock_index(capability: Capability) -> usize {
    match capability {
        Capability::Config => 0,
        Capability::Client => 1,
        Capability::LoadBalancer => 2,
        Capability::LoadBalancerContext => 3,
    }
}

/// Isolated component set for one client name
pub struct ClientContext {
    name: String,
    specification: ContextSpecification,
    cache: DashMap<Capability, Component>,
    // One lock per capability, held across the check-build-store sequence so
    // losing racers observe the winner's cache entry instead of building
    // their own. Resolving a different capability takes a different lock,
    // which keeps the Config-first recursion deadlock free.
    build_locks: [Mutex<()>; Capability::COUNT],
    disposed: AtomicBool,
}

impl ClientContext {
    pub(crate) fn new<N: Into<String>>(name: N, specification: ContextSpecification) -> Self {
        Self {
            name: name.into(),
            specification,
            cache: DashMap::new(),
            build_locks: [const { Mutex::new(()) }; Capability::COUNT],
            disposed: AtomicBool::new(false),
        }
    }

    /// Client name this context belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The merged specification the context was created from
    pub fn specification(&self) -> &ContextSpecification {
        &self.specification
    }

    /// Pure cache lookup, no construction
    pub fn try_get(&self, capability: Capability) -> Option<Component> {
        self.cache.get(&capability).map(|entry| entry.value().clone())
    }

    /// Capabilities with a cached instance
    pub fn cached_capabilities(&self) -> Vec<Capability> {
        self.cache.iter().map(|entry| *entry.key()).collect()
    }

    /// Store a freshly built instance, keeping an already stored one
    ///
    /// Returns the surviving instance; under the build-lock discipline the
    /// slot is empty when this runs, but the first stored instance wins even
    /// if it is not.
    pub(crate) fn put(&self, capability: Capability, component: Component) -> Component {
        let entry = self.cache.entry(capability).or_insert(component);
        entry.value().clone()
    }

    pub(crate) fn build_lock(&self, capability: Capability) -> &Mutex<()> {
        &self.build_locks[lock_index(capability)]
    }

    /// Build context handed to tier-2 constructors
    pub fn build_context(&self) -> BuildContext<'_> {
        BuildContext::new(&self.name, self.specification.properties())
    }

    /// Dispose every cached instance and clear the cache; idempotent
    pub(crate) fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        for entry in self.cache.iter() {
            debug!(
                client = self.name.as_str(),
                capability = %entry.key(),
                "disposing component"
            );
            entry.value().dispose();
        }
        self.cache.clear();
    }

    /// Whether this context has been disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}
