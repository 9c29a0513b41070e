//! streetfind-rs
//!
//! Workspace umbrella crate. Re-exports `streetfind-core` so the workspace
//! root can host dev tooling against the public API.
pub use streetfind_core::*;
