//! Shared utilities for the Client Directory backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validation matching the store's column bounds

pub mod validation;
