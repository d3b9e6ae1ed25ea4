//! Core domain entities.

pub mod star;

pub use star::Star;
