//! Infrastructure layer: concrete registry and broadcaster implementations.

pub mod broadcaster;
pub mod repository;
