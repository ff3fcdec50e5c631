//! # Configuration Module
//!
//! This module centralizes the tuning constants for colvec. Constants that
//! depend on each other are co-located and checked with compile-time
//! assertions so the allocation math cannot drift apart.
//!
//! ## Module Organization
//!
//! - [`constants`]: All numeric configuration values with dependency notes

pub mod constants;
pub use constants::*;
