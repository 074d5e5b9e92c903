//! Domain models for the Client Directory.

pub mod client;
pub mod phone;

pub use client::{Client, ClientFilter, ClientRecord, ClientUpdate, NewClient};
pub use phone::Phone;
