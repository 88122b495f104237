//! Utility functions shared across the mesh modules.

pub mod safe_cast;
