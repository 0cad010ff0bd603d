//! Core types and errors for Nova

pub mod error;
pub mod types;
