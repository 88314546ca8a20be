//! Application Layer
//!
//! Contains use cases that orchestrate calls to the networking API.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;
