//! Capability model
//!
//! A capability is the abstract role a component fulfils for a client name.
//! Each per-name context caches at most one instance per capability, so the
//! set of capabilities is closed and statically declared here instead of
//! being discovered through runtime type inspection.

use std::fmt;

/// Abstract role a concrete component type fulfils for a client name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Per-name settings consumed by the other components during construction
    Config,
    /// Request-executing client
    Client,
    /// Server-choosing load balancer
    LoadBalancer,
    /// Execution context pairing a load balancer with its client config
    LoadBalancerContext,
}

impl Capability {
    /// Every capability, in resolution-friendly order (`Config` first)
    pub const ALL: [Capability; 4] = [
        Capability::Config,
        Capability::Client,
        Capability::LoadBalancer,
        Capability::LoadBalancerContext,
    ];

    /// Number of capabilities, for fixed-size per-capability tables
    pub const COUNT: usize = Self::ALL.len();

    /// Stable key used in property maps and diagnostics
    pub fn key(self) -> &'static str {
        match self {
            Capability::Config => "config",
            Capability::Client => "client",
            Capability::LoadBalancer => "load_balancer",
            Capability::LoadBalancerContext => "load_balancer_context",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
