//! Shared utilities for UniBorrow binaries.

pub mod logger;
pub mod time;
