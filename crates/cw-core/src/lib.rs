//! cookwithus/crates/cw-core/src/lib.rs
//!
//! The central domain types and interface definitions for CookWithUs.

pub mod error;
pub mod models;
pub mod payloads;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use payloads::*;
pub use traits::*;
