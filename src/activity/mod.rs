//! Activity provider surface: the coordinating facade plus the analytics
//! and configuration descriptors advertised to the hosting platform.
//!
//! - Domain types in [`domain`]
//! - The facade in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
