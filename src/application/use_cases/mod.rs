//! Use Cases
//!
//! Name-based workflows built on top of the network gateway.
//! Each use case is a single-purpose struct with an execute() method.

pub mod networks;

pub use networks::{DeleteNetworkByNameUseCase, FindNetworkByNameUseCase};
