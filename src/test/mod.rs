//! Shared fixtures for unit tests
//!
//! - [`helpers`] - one-line constructors for registered and unregistered nodes
//! - [`factories`] - small but realistic binding graphs

pub mod factories;
pub mod helpers;

pub use factories::*;
pub use helpers::*;
