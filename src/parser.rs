use crate::ir::NetworkGraph;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid network document: {0}")]
    Syntax(#[from] json5::Error),
}

/// Parses a network document with `stations` and `edges` arrays.
///
/// Documents are JSON5, so plain JSON exports from the dashboard load as-is
/// and hand-written fixtures may carry comments and trailing commas. An empty
/// station list parses; layout reports it as invalid input.
pub fn parse_network(input: &str) -> Result<NetworkGraph, ParseError> {
    Ok(json5::from_str(input)?)
}
