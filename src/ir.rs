use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon scale used when a station does not carry a `size` hint.
pub const DEFAULT_STATION_SIZE: f32 = 30.0;

/// Station identifier.
///
/// Feeds mix numeric and string ids, so ids are kept in their textual form:
/// `7` and `"7"` name the same station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for StationId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<StationId> for String {
    fn from(value: StationId) -> Self {
        value.0
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for StationId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(val) => Self(val.to_string()),
            RawId::Float(val) => Self(format!("{}", val)),
            RawId::Text(val) => Self(val),
        }
    }
}

/// How a station is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum StationMarker {
    /// Plain circle marker, used when no icon is supplied.
    Circle,
    /// Image icon referenced by `href`, scaled by the station size.
    Icon { href: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StationRecord", into = "StationRecord")]
pub struct Station {
    pub id: StationId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Visual scale hint; [`DEFAULT_STATION_SIZE`] when the source omits it.
    pub size: f32,
    pub marker: StationMarker,
}

impl Station {
    pub fn new(id: impl Into<StationId>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            size: DEFAULT_STATION_SIZE,
            marker: StationMarker::Circle,
        }
    }

    pub fn with_icon(mut self, href: impl Into<String>) -> Self {
        self.marker = StationMarker::Icon { href: href.into() };
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StationRecord {
    id: StationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        let label = record.label.unwrap_or_else(|| record.id.to_string());
        let marker = match record.image {
            Some(href) if !href.is_empty() => StationMarker::Icon { href },
            _ => StationMarker::Circle,
        };
        Self {
            id: record.id,
            label,
            x: record.x,
            y: record.y,
            size: record.size.unwrap_or(DEFAULT_STATION_SIZE),
            marker,
        }
    }
}

impl From<Station> for StationRecord {
    fn from(station: Station) -> Self {
        let image = match station.marker {
            StationMarker::Circle => None,
            StationMarker::Icon { href } => Some(href),
        };
        Self {
            id: station.id,
            label: Some(station.label),
            x: station.x,
            y: station.y,
            size: Some(station.size),
            image,
        }
    }
}

/// Optional stroke styling of an edge. Unset fields fall back to the theme
/// colour and the layout's default stroke width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeStroke {
    pub color: Option<String>,
    /// Relative thickness hint. Zero counts as unset.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EdgeRecord", into = "EdgeRecord")]
pub struct Edge {
    pub from: StationId,
    pub to: StationId,
    pub label: Option<String>,
    pub stroke: EdgeStroke,
}

impl Edge {
    pub fn new(from: impl Into<StationId>, to: impl Into<StationId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            stroke: EdgeStroke::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.stroke.color = Some(color.into());
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.stroke.width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeRecord {
    from: StationId,
    to: StationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f32>,
}

impl From<EdgeRecord> for Edge {
    fn from(record: EdgeRecord) -> Self {
        Self {
            from: record.from,
            to: record.to,
            label: record.label.filter(|label| !label.is_empty()),
            stroke: EdgeStroke {
                color: record.color.filter(|color| !color.is_empty()),
                width: record.width,
            },
        }
    }
}

impl From<Edge> for EdgeRecord {
    fn from(edge: Edge) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            label: edge.label,
            color: edge.stroke.color,
            width: edge.stroke.width,
        }
    }
}

/// A station network as supplied by the caller for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraph {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_match() {
        let numeric: StationId = serde_json::from_str("7").unwrap();
        let text: StationId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(numeric, text);
        assert_eq!(StationId::from(7), text);
    }

    #[test]
    fn station_defaults_fill_missing_fields() {
        let station: Station = serde_json::from_str(r#"{"id": 3, "x": 1.5, "y": -2}"#).unwrap();
        assert_eq!(station.label, "3");
        assert_eq!(station.size, DEFAULT_STATION_SIZE);
        assert_eq!(station.marker, StationMarker::Circle);
    }

    #[test]
    fn station_with_image_becomes_icon() {
        let station: Station = serde_json::from_str(
            r#"{"id": "a", "label": "Lonand", "x": 0, "y": 0, "image": "/icons/station.png", "size": 40}"#,
        )
        .unwrap();
        assert_eq!(
            station.marker,
            StationMarker::Icon {
                href: "/icons/station.png".to_string()
            }
        );
        assert_eq!(station.size, 40.0);
    }

    #[test]
    fn edge_empty_strings_are_unset() {
        let edge: Edge =
            serde_json::from_str(r#"{"from": "a", "to": "b", "label": "", "color": ""}"#).unwrap();
        assert_eq!(edge.label, None);
        assert_eq!(edge.stroke.color, None);
    }
}
