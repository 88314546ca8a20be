//! Neutron Networking API Adapter
//!
//! `reqwest` implementation of the `NetworkService` gateway.

mod client;
mod dto;

pub use client::NeutronNetworkClient;
