//! TaskTrack: a small task-tracking activity provider.
//!
//! Callers create tasks of a few kinds, list them back in a chosen order,
//! and request analytics for an activity instance and learner.
//!
//! # Architecture
//!
//! TaskTrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task entities, storage, factory and sort strategies
//! - [`activity`]: The coordinating facade and activity descriptors
//! - [`api`]: HTTP routes translating requests into facade calls
//! - [`config`]: Process configuration

pub mod activity;
pub mod api;
pub mod config;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;
