//! Data loading module

pub mod links;

pub use links::{Edge, Relation};
