//! Unit tests for the activity facade.
