//! Concrete SessionRegistry implementations.
//!
//! The UseCase layer depends on the domain-layer trait, never on these
//! implementations directly (dependency inversion).

pub mod inmemory;

pub use inmemory::InMemorySessionRegistry;
