//! Vitrine: product-info resolution for description-generation pipelines.
//!
//! This crate resolves free-text product queries into structured product
//! records for agents that write product descriptions and marketing copy.
//! Records are read from a read-only object store or, when nothing matches,
//! synthesized from the query text.
//!
//! # Architecture
//!
//! Vitrine follows hexagonal architecture principles:
//!
//! - **Domain**: Queries, keys, categories and records with no store access
//! - **Ports**: The object-store trait the resolver reads through
//! - **Adapters**: In-memory and directory-backed stores
//!
//! # Modules
//!
//! - [`catalogue`]: Store access, resolution and the agent-facing tool
//! - [`description`]: Template substitution and output formatting
//! - [`config`]: Bucket and store-root configuration

pub mod catalogue;
pub mod config;
pub mod description;
