//! Neutron Network Client
//!
//! A typed client for the network resource of an OpenStack Neutron-style
//! networking API, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
