//! Benchtop Estimator Core - Shared types library.
//!
//! This crate provides common types used across all Benchtop Estimator
//! components:
//! - `web` - The public estimator site
//! - `integration-tests` - Black-box tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer and benchtop field structs, the colour
//!   enumeration, the webhook payload shape, and the quote result with its
//!   tolerant response decoding

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
