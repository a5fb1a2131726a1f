//! Product catalogue lookup and product-info resolution.
//!
//! Resolves free-text product queries against a read-only object store and
//! falls back to synthesizing a record when nothing matches. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]
//! - The orchestration-engine tool wrapper in [`tool`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod tool;

#[cfg(test)]
mod tests;
