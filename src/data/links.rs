//! Typed relationship edges and the `links.csv` loader

use std::fmt;
use std::path::Path;

use anyhow::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Relation type of a person-to-person (or person-to-entity) link
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    Mother,
    Father,
    Child,
    Spouse,
    Birthplace,
    Membership,
    Affiliation,
    Occupation,
    Education,
    Position,
    Other(String),
}

impl Relation {
    /// Parse the `rel` column value produced upstream
    pub fn parse(raw: &str) -> Self {
        match raw {
            "mother" => Self::Mother,
            "father" => Self::Father,
            "child" => Self::Child,
            "spouse" => Self::Spouse,
            "birthplace" => Self::Birthplace,
            "membership" => Self::Membership,
            "affiliation" => Self::Affiliation,
            "occupation" => Self::Occupation,
            "education" => Self::Education,
            "position" => Self::Position,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this relation contributes an edge to the kinship graph
    pub fn is_kinship(&self) -> bool {
        matches!(self, Self::Mother | Self::Father | Self::Child | Self::Spouse)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Child => "child",
            Self::Spouse => "spouse",
            Self::Birthplace => "birthplace",
            Self::Membership => "membership",
            Self::Affiliation => "affiliation",
            Self::Occupation => "occupation",
            Self::Education => "education",
            Self::Position => "position",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(rel, a, b)` row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub relation: Relation,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(relation: Relation, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            relation,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Load the links artifact written by the fetch step.
///
/// Every column is read as a string so numeric-looking identifiers keep
/// their exact spelling.
pub fn load_links(path: &Path) -> Result<Vec<Edge>> {
    log::info!("Reading links file: {}", path.display());

    if !path.exists() {
        return Err(AnalyzerError::InputNotFound(path.display().to_string()).into());
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let rel_col = string_column(&df, "rel")?;
    let a_col = string_column(&df, "a")?;
    let b_col = string_column(&df, "b")?;

    let mut edges = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for i in 0..df.height() {
        let (Some(rel), Some(a), Some(b)) = (rel_col.get(i), a_col.get(i), b_col.get(i)) else {
            skipped += 1;
            continue;
        };
        if a.is_empty() || b.is_empty() {
            skipped += 1;
            continue;
        }
        edges.push(Edge::new(Relation::parse(rel), a, b));
    }

    if skipped > 0 {
        log::warn!("Skipped {} link rows with empty fields", skipped);
    }
    log::info!("Loaded {} links", edges.len());

    Ok(edges)
}

fn string_column<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| AnalyzerError::MissingColumn(name))?;
    Ok(column.str()?)
}
