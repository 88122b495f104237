//! Safe casting utilities for vertex indices and counts

use crate::{Error, Result};

/// Safely convert usize to u32 with overflow checking
///
/// # Errors
///
/// Returns an error if the value exceeds u32::MAX
pub fn usize_to_u32(value: usize) -> Result<u32> {
    value
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("Value {value} too large to fit in a u32 vertex index")))
}
