//! In-memory store integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `resolution_tests`: Exact, substring and synthesized resolution
//! - `tool_tests`: The agent-facing tool wrapper
//! - `description_tests`: Resolved records flowing into templates and documents

mod in_memory {
    pub mod helpers;

    mod description_tests;
    mod resolution_tests;
    mod tool_tests;
}
