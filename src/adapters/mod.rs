//! Infrastructure adapters. Implement outbound ports.
//!
//! Schedule API, filesystem, terminal UI. Map errors to DomainError.

pub mod api;
pub mod persistence;
pub mod ui;
