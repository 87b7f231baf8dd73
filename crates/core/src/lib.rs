//! `clientdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod account;
pub mod client;
pub mod error;

pub use account::{AccountType, LabelPolicy};
pub use client::Client;
pub use error::{DomainError, DomainResult};
