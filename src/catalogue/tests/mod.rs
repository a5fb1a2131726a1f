//! Unit tests for the catalogue module.
