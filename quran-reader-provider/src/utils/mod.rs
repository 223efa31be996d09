//! Utility modules.

/// Log sanitization utilities to keep response bodies readable in logs.
pub mod log_sanitizer;
