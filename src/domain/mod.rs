//! Domain layer containing the star entity and its repository contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or API layers.

pub mod entities;
pub mod repositories;
