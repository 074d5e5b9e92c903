//! Client Directory backend — operation surface.
//!
//! This crate wires the persistence layer into the public operation surface
//! ([`service::DirectoryService`]), carries configuration loading and
//! logging setup, and reports every operation outcome to a pluggable sink.

pub mod config;
pub mod logging;
pub mod report;
pub mod service;
