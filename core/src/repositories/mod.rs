//! Interfaces to external collaborators, following the repository pattern.

pub mod directory;

pub use directory::{MockUserDirectory, UserDirectory};
