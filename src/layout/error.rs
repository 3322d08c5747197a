use serde::Serialize;
use std::fmt;

use crate::ir::StationId;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::From => f.write_str("from"),
            Endpoint::To => f.write_str("to"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("edge {edge_index} `{endpoint}` references unknown station `{station}`")]
    MissingStationReference {
        edge_index: usize,
        endpoint: Endpoint,
        station: StationId,
    },
    #[error("duplicate station id `{id}` at index {duplicate} (first seen at index {first})")]
    DuplicateStation {
        id: StationId,
        first: usize,
        duplicate: usize,
    },
}

impl LayoutError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Conditions noticed while building a scene that did not stop it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Every station shares one coordinate on `axis`; it was centered.
    DegenerateAxis { axis: Axis },
    /// The edge at `error`'s index was left out of the scene.
    SkippedEdge { error: LayoutError },
    /// The requested active station is not part of the graph.
    UnknownActiveStation { id: StationId },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DegenerateAxis { axis } => {
                write!(f, "all stations share one {:?} coordinate; centered on that axis", axis)
            }
            Diagnostic::SkippedEdge { error } => write!(f, "skipped edge: {error}"),
            Diagnostic::UnknownActiveStation { id } => {
                write!(f, "active station `{id}` is not in the graph")
            }
        }
    }
}
