//! Common test utilities for ontofactory integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated cache and working directories plus CLI helpers
//! - Converter fakes that record or reject conversions
//! - Fixtures: obographs documents and config snippets

#![allow(dead_code)]

pub mod converters;
pub mod env;
pub mod fixtures;

pub use converters::*;
pub use env::*;
pub use fixtures::*;
