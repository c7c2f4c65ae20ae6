//! Error types for the front end.
//!
//! Every parse defect is recoverable: the parser records an [`errors::Error`]
//! and keeps going. This module defines:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of defect
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
