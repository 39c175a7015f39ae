//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Business point record model
pub mod business;
