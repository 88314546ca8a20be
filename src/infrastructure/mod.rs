//! Infrastructure Layer
//!
//! Contains all external concerns: the HTTP adapter for the networking API,
//! credential providers, and configuration loading.

pub mod driven_adapters;
