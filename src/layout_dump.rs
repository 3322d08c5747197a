use crate::layout::{Diagnostic, Glyph, Primitive, Scene};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Flat, draw-ordered view of a scene for snapshot diffs and debugging.
#[derive(Debug, Serialize)]
pub struct SceneDump {
    pub edge_count: usize,
    pub station_count: usize,
    pub active: Option<String>,
    pub primitives: Vec<PrimitiveDump>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct PrimitiveDump {
    pub kind: &'static str,
    pub owner: Option<String>,
    pub points: Vec<[f32; 2]>,
    pub size: Option<[f32; 2]>,
    pub text: Option<String>,
}

impl SceneDump {
    pub fn from_scene(scene: &Scene) -> Self {
        let primitives = scene
            .primitives()
            .into_iter()
            .map(|primitive| {
                let kind = primitive.kind();
                match primitive {
                    Primitive::Line(edge) => PrimitiveDump {
                        kind,
                        owner: Some(format!("{}->{}", edge.from, edge.to)),
                        points: vec![[edge.start.x, edge.start.y], [edge.end.x, edge.end.y]],
                        size: None,
                        text: None,
                    },
                    Primitive::EdgeLabel(text) | Primitive::StationLabel(text) => PrimitiveDump {
                        kind,
                        owner: None,
                        points: vec![[text.x, text.y]],
                        size: None,
                        text: Some(text.content.clone()),
                    },
                    Primitive::StationGlyph(station) => {
                        let size = match &station.glyph {
                            Glyph::Icon { width, height, .. } => [*width, *height],
                            Glyph::Circle { radius, .. } => [radius * 2.0, radius * 2.0],
                        };
                        PrimitiveDump {
                            kind,
                            owner: Some(station.id.to_string()),
                            points: vec![[station.position.x, station.position.y]],
                            size: Some(size),
                            text: None,
                        }
                    }
                    Primitive::HighlightRing(ring) => PrimitiveDump {
                        kind,
                        owner: None,
                        points: vec![[ring.center.x, ring.center.y]],
                        size: Some([ring.radius * 2.0, ring.radius * 2.0]),
                        text: None,
                    },
                }
            })
            .collect();

        SceneDump {
            edge_count: scene.edges.len(),
            station_count: scene.stations.len(),
            active: scene.highlighted().map(|station| station.id.to_string()),
            primitives,
            diagnostics: scene.diagnostics.clone(),
        }
    }
}

pub fn write_scene_dump(path: &Path, scene: &Scene) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = SceneDump::from_scene(scene);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
