//! Repository implementations.

pub mod client;
pub mod phone;

pub use client::ClientRepository;
pub use phone::PhoneRepository;
