//! Built-in networks used by the console's demo views.

use crate::ir::{Edge, NetworkGraph, Station};

pub const SAMPLE_NAMES: &[&str] = &["diamond"];

pub fn sample_network(name: &str) -> Option<NetworkGraph> {
    match name {
        "diamond" => Some(diamond()),
        _ => None,
    }
}

/// Four stations on the corners of a square, joined in a cycle.
pub fn diamond() -> NetworkGraph {
    NetworkGraph {
        stations: vec![
            Station::new("a", "Lonand", 20.0, 80.0),
            Station::new("b", "Nira", 20.0, 20.0),
            Station::new("c", "Jejuri", 80.0, 20.0),
            Station::new("d", "Haveli", 80.0, 80.0),
        ],
        edges: vec![
            Edge::new("a", "b").with_label("0 km"),
            Edge::new("b", "c").with_label("6 km"),
            Edge::new("c", "d").with_label("44 km"),
            Edge::new("d", "a").with_label("8 km"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_sample_resolves() {
        for name in SAMPLE_NAMES {
            assert!(sample_network(name).is_some(), "missing sample {name}");
        }
        assert!(sample_network("mumbai").is_none());
    }
}
