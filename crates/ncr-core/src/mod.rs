//! Named Client Registry core
//!
//! Per-name isolated component sets with lazy, exactly-once construction.
//! Each client name gets its own [`context::ClientContext`] holding a
//! definition table and an instance cache, so configuration and state for
//! different backends never leak into each other.
//!
//! ```text
//! caller ── resolve(name, capability)
//!                │
//!                ▼
//! ┌─────────────────────────────┐
//! │ ContextRegistry             │  name → ClientContext, created once
//! └─────────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────┐
//! │ ClientContext cache lookup  │  hit → shared instance
//! └─────────────────────────────┘
//!                │ miss
//!                ▼
//! ┌─────────────────────────────┐
//! │ resolve Config for name     │  (skipped when building Config itself)
//! └─────────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────┐
//! │ two-tier builder            │  config constructor, else default
//! │                             │  construction + init + injection
//! └─────────────────────────────┘
//!                │
//!                ▼
//!       cache in ClientContext, return to every caller
//! ```

pub mod builder;
pub mod client_factory;
pub mod context;
pub mod definition;
pub mod registration;
pub mod registry;
pub mod resolver;

pub use client_factory::ClientFactory;
pub use context::ClientContext;
pub use definition::{
    BuildContext, ComponentDefinition, ConfigConstructor, ContextSpecification,
    DefaultConstructor, DefinitionProvider,
};
pub use registration::{
    find_registration, list_registrations, ComponentRegistration, COMPONENT_REGISTRATIONS,
};
pub use registry::ContextRegistry;
pub use resolver::InstanceResolver;
