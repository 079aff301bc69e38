//! Host-facing FFI surface for Loopdeck.

pub mod api;
