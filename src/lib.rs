#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod samples;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig};
pub use ir::{Edge, EdgeStroke, NetworkGraph, Station, StationId, StationMarker};
pub use layout::{LayoutError, Scene, SceneOptions, build_scene};
pub use parser::{ParseError, parse_network};
pub use render::{render_empty_svg, render_svg};
pub use theme::Theme;

/// Everything a render call reads besides the graph, captured once per call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl RenderOptions {
    pub fn console() -> Self {
        Self::default()
    }

    pub fn night() -> Self {
        Self {
            theme: Theme::night(),
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.render.height = height;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.render.background = Some(background.into());
        self
    }

    pub fn with_svg_id(mut self, svg_id: impl Into<String>) -> Self {
        self.render.svg_id = Some(svg_id.into());
        self
    }
}

impl From<Config> for RenderOptions {
    fn from(config: Config) -> Self {
        Self {
            theme: config.theme,
            layout: config.layout,
            render: config.render,
        }
    }
}

/// Lays out and renders `graph` in one pass.
///
/// Never fails: a graph that cannot be laid out at all renders as an empty
/// canvas, and unresolvable edges are dropped unless strict mode is on, in
/// which case the whole pass falls back to the empty canvas as well.
pub fn render_network_svg(
    graph: &NetworkGraph,
    scene_options: &SceneOptions,
    options: &RenderOptions,
) -> String {
    match build_scene(graph, scene_options, &options.theme, &options.layout) {
        Ok(scene) => render_svg(&scene, &options.theme, &options.render),
        Err(err) => {
            log::warn!("rendering empty network canvas: {err}");
            render_empty_svg(&options.theme, &options.render)
        }
    }
}

/// Parses a network document and renders it. Parse failures are returned;
/// layout failures fall back to the empty canvas.
pub fn render_document(
    input: &str,
    scene_options: &SceneOptions,
    options: &RenderOptions,
) -> Result<String, ParseError> {
    let graph = parse_network(input)?;
    Ok(render_network_svg(&graph, scene_options, options))
}
