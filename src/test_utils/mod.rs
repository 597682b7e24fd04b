//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - Waitlist store stubs for failure and race scenarios
//! - A builder for `AppState` over an injected store

mod app_state_builder;
mod factories;
mod stores;

pub use app_state_builder::*;
pub use factories::*;
pub use stores::*;
