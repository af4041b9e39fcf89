//! Error types for the kinship hub analyzer

use thiserror::Error;

/// Failures raised at the I/O and configuration boundaries.
///
/// The graph algorithms themselves never fail: degenerate inputs produce
/// empty results instead.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("links file is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("failed to start worker pool with {0} threads")]
    ThreadPool(usize),
}
