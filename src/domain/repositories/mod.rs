//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod star_repository;

pub use star_repository::StarRepository;

#[cfg(test)]
pub use star_repository::MockStarRepository;
