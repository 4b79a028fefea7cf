//! Ports (trait boundaries) for external dependencies.
//!
//! The analyses only ever see typed documents; where those documents come
//! from is decided by the adapters implementing these traits.

pub mod repository;

pub use repository::PolicyRepository;
