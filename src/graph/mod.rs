//! Graph representation and algorithms module

pub mod adjacency;
pub mod builder;
pub mod algorithms;

pub use adjacency::KinshipGraph;
pub use builder::GraphBuilder;
