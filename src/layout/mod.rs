//! Station network layout.
//!
//! [`build_scene`] projects station coordinates onto the padded canvas and
//! turns a [`NetworkGraph`] into an ordered [`Scene`]: every edge first, then
//! every station, each in input order. Nothing is cached between passes.

pub mod error;
pub mod normalize;

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::ir::{Edge, NetworkGraph, Station, StationId, StationMarker};
use crate::theme::Theme;

pub use error::{Axis, Diagnostic, Endpoint, LayoutError};
pub use normalize::{CANVAS_SIZE, CanvasPoint, Projection};

/// Per-pass presentation state that is not part of the graph data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneOptions {
    pub active_station: Option<StationId>,
}

impl SceneOptions {
    pub fn with_active(id: impl Into<StationId>) -> Self {
        Self {
            active_station: Some(id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub font_size: f32,
    pub font_family: String,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    /// Position of the edge in the caller's input.
    pub index: usize,
    pub from: StationId,
    pub to: StationId,
    pub start: CanvasPoint,
    pub end: CanvasPoint,
    pub stroke: String,
    pub stroke_width: f32,
    pub label: Option<TextShape>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Icon {
        href: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        center: CanvasPoint,
        radius: f32,
        fill: String,
        stroke: String,
        stroke_width: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub center: CanvasPoint,
    pub radius: f32,
    pub stroke: String,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationShape {
    pub id: StationId,
    pub position: CanvasPoint,
    pub glyph: Glyph,
    pub highlight: Option<Ring>,
    pub label: TextShape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub edges: Vec<EdgeShape>,
    pub stations: Vec<StationShape>,
    pub diagnostics: Vec<Diagnostic>,
}

/// One draw call in stacking order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Line(&'a EdgeShape),
    EdgeLabel(&'a TextShape),
    StationGlyph(&'a StationShape),
    HighlightRing(&'a Ring),
    StationLabel(&'a TextShape),
}

impl Primitive<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line(_) => "line",
            Primitive::EdgeLabel(_) => "edgeLabel",
            Primitive::StationGlyph(_) => "station",
            Primitive::HighlightRing(_) => "highlight",
            Primitive::StationLabel(_) => "stationLabel",
        }
    }
}

impl Scene {
    pub fn highlighted(&self) -> Option<&StationShape> {
        self.stations.iter().find(|station| station.highlight.is_some())
    }

    /// Flattens the scene into draw order. A station's ring follows its glyph
    /// and precedes its label.
    pub fn primitives(&self) -> Vec<Primitive<'_>> {
        let mut out = Vec::new();
        for edge in &self.edges {
            out.push(Primitive::Line(edge));
            if let Some(label) = &edge.label {
                out.push(Primitive::EdgeLabel(label));
            }
        }
        for station in &self.stations {
            out.push(Primitive::StationGlyph(station));
            if let Some(ring) = &station.highlight {
                out.push(Primitive::HighlightRing(ring));
            }
            out.push(Primitive::StationLabel(&station.label));
        }
        out
    }
}

pub fn build_scene(
    graph: &NetworkGraph,
    options: &SceneOptions,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Scene, LayoutError> {
    if graph.stations.is_empty() {
        return Err(LayoutError::invalid_input("station set is empty"));
    }
    let index = index_stations(&graph.stations)?;
    let projection = Projection::fit(
        graph.stations.iter().map(|station| (station.x, station.y)),
        config.padding,
    )?;

    let mut diagnostics = Vec::new();
    for axis in projection.degenerate_axes() {
        log::debug!("all stations share one {axis:?} coordinate; centering");
        diagnostics.push(Diagnostic::DegenerateAxis { axis });
    }

    let positions: Vec<CanvasPoint> = graph
        .stations
        .iter()
        .map(|station| projection.project(station.x, station.y))
        .collect();

    let mut edges = Vec::with_capacity(graph.edges.len());
    for (edge_index, edge) in graph.edges.iter().enumerate() {
        let resolved = resolve_endpoint(&index, edge_index, Endpoint::From, &edge.from).and_then(
            |from| {
                resolve_endpoint(&index, edge_index, Endpoint::To, &edge.to).map(|to| (from, to))
            },
        );
        match resolved {
            Ok((from, to)) => edges.push(edge_shape(
                edge_index,
                edge,
                positions[from],
                positions[to],
                theme,
                config,
            )),
            Err(err) if config.strict_edges => return Err(err),
            Err(err) => {
                log::warn!("{err}; leaving edge out of the scene");
                diagnostics.push(Diagnostic::SkippedEdge { error: err });
            }
        }
    }

    let active = options.active_station.as_ref();
    let stations: Vec<StationShape> = graph
        .stations
        .iter()
        .zip(&positions)
        .map(|(station, &position)| {
            let is_active = active == Some(&station.id);
            station_shape(station, position, is_active, theme, config)
        })
        .collect();

    if let Some(id) = active {
        if !index.contains_key(id) {
            log::debug!("active station `{id}` not in graph; no highlight drawn");
            diagnostics.push(Diagnostic::UnknownActiveStation { id: id.clone() });
        }
    }

    Ok(Scene {
        edges,
        stations,
        diagnostics,
    })
}

fn index_stations(stations: &[Station]) -> Result<HashMap<&StationId, usize>, LayoutError> {
    let mut index: HashMap<&StationId, usize> = HashMap::with_capacity(stations.len());
    for (position, station) in stations.iter().enumerate() {
        if let Some(&first) = index.get(&station.id) {
            return Err(LayoutError::DuplicateStation {
                id: station.id.clone(),
                first,
                duplicate: position,
            });
        }
        index.insert(&station.id, position);
    }
    Ok(index)
}

fn resolve_endpoint(
    index: &HashMap<&StationId, usize>,
    edge_index: usize,
    endpoint: Endpoint,
    id: &StationId,
) -> Result<usize, LayoutError> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| LayoutError::MissingStationReference {
            edge_index,
            endpoint,
            station: id.clone(),
        })
}

fn edge_shape(
    index: usize,
    edge: &Edge,
    start: CanvasPoint,
    end: CanvasPoint,
    theme: &Theme,
    config: &LayoutConfig,
) -> EdgeShape {
    let stroke = edge
        .stroke
        .color
        .clone()
        .unwrap_or_else(|| theme.edge_color.clone());
    let stroke_width = match edge.stroke.width {
        Some(width) if width != 0.0 => (width * config.edge_width_scale).max(config.min_edge_width),
        _ => config.default_edge_width,
    };
    let label = edge.label.as_ref().map(|content| {
        let mid = start.midpoint(end);
        TextShape {
            x: mid.x,
            y: mid.y - config.edge_label_offset,
            content: content.clone(),
            font_size: theme.font_size,
            font_family: theme.font_family.clone(),
            fill: theme.edge_label_color.clone(),
        }
    });
    EdgeShape {
        index,
        from: edge.from.clone(),
        to: edge.to.clone(),
        start,
        end,
        stroke,
        stroke_width,
        label,
    }
}

fn station_shape(
    station: &Station,
    position: CanvasPoint,
    is_active: bool,
    theme: &Theme,
    config: &LayoutConfig,
) -> StationShape {
    let icon_width = station.size * config.icon_scale;
    let icon_height = icon_width * config.icon_aspect;
    let glyph = match &station.marker {
        StationMarker::Icon { href } => Glyph::Icon {
            href: href.clone(),
            x: position.x - icon_width / 2.0,
            y: position.y - icon_height / 2.0,
            width: icon_width,
            height: icon_height,
        },
        StationMarker::Circle => Glyph::Circle {
            center: position,
            radius: config.marker_radius,
            fill: theme.marker_fill.clone(),
            stroke: theme.marker_stroke.clone(),
            stroke_width: config.marker_stroke_width,
        },
    };
    let highlight = is_active.then(|| Ring {
        center: position,
        radius: config.highlight_radius,
        stroke: theme.highlight_color.clone(),
        stroke_width: config.highlight_stroke_width,
    });
    let label = TextShape {
        x: position.x,
        y: position.y - (icon_height / 2.0 + config.label_gap),
        content: station.label.clone(),
        font_size: theme.font_size,
        font_family: theme.font_family.clone(),
        fill: theme.label_color.clone(),
    };
    StationShape {
        id: station.id.clone(),
        position,
        glyph,
        highlight,
        label,
    }
}
