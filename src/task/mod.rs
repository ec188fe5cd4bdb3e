//! Task creation, storage and ordering for TaskTrack.
//!
//! Tasks are built by a factory from untyped request payloads, stored in a
//! repository that is the sole owner of the task collection, and listed
//! back through a fixed registry of named sort strategies. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Factory and ordering services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
