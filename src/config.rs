use crate::theme::Theme;
use serde::Deserialize;
use std::path::Path;

/// Geometry of the normalized canvas scene. All lengths are canvas units of
/// the `0 0 100 100` view box.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub padding: f32,
    /// Fail the pass on an unresolved edge endpoint instead of skipping it.
    pub strict_edges: bool,
    pub icon_scale: f32,
    pub icon_aspect: f32,
    pub marker_radius: f32,
    pub marker_stroke_width: f32,
    pub highlight_radius: f32,
    pub highlight_stroke_width: f32,
    pub label_gap: f32,
    pub edge_label_offset: f32,
    pub default_edge_width: f32,
    pub edge_width_scale: f32,
    pub min_edge_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 5.0,
            strict_edges: false,
            icon_scale: 0.18,
            icon_aspect: 1.1,
            marker_radius: 3.0,
            marker_stroke_width: 1.2,
            highlight_radius: 4.6,
            highlight_stroke_width: 1.5,
            label_gap: 2.0,
            edge_label_offset: 1.0,
            default_edge_width: 1.5,
            edge_width_scale: 0.4,
            min_edge_width: 1.0,
        }
    }
}

/// Output surface settings for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Height in pixels.
    pub height: f32,
    /// Explicit pixel width. `None` fills the container width.
    pub width: Option<f32>,
    /// CSS colour painted behind the graph. `None` leaves it transparent.
    pub background: Option<String>,
    /// `id` attribute of the root `<svg>`, used to address snapshots.
    pub svg_id: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: 340.0,
            width: None,
            background: None,
            svg_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    label_color: Option<String>,
    edge_color: Option<String>,
    edge_label_color: Option<String>,
    marker_fill: Option<String>,
    marker_stroke: Option<String>,
    highlight_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    padding: Option<f32>,
    strict_edges: Option<bool>,
    icon_scale: Option<f32>,
    marker_radius: Option<f32>,
    highlight_radius: Option<f32>,
    label_gap: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    height: Option<f32>,
    width: Option<f32>,
    background_color: Option<String>,
    svg_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Overlays a JSON config document on top of the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::from_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme `{theme_name}`"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.edge_color {
            config.theme.edge_color = v;
        }
        if let Some(v) = vars.edge_label_color {
            config.theme.edge_label_color = v;
        }
        if let Some(v) = vars.marker_fill {
            config.theme.marker_fill = v;
        }
        if let Some(v) = vars.marker_stroke {
            config.theme.marker_stroke = v;
        }
        if let Some(v) = vars.highlight_color {
            config.theme.highlight_color = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.padding {
            config.layout.padding = v;
        }
        if let Some(v) = layout.strict_edges {
            config.layout.strict_edges = v;
        }
        if let Some(v) = layout.icon_scale {
            config.layout.icon_scale = v;
        }
        if let Some(v) = layout.marker_radius {
            config.layout.marker_radius = v;
        }
        if let Some(v) = layout.highlight_radius {
            config.layout.highlight_radius = v;
        }
        if let Some(v) = layout.label_gap {
            config.layout.label_gap = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if render.width.is_some() {
            config.render.width = render.width;
        }
        if render.background_color.is_some() {
            config.render.background = render.background_color;
        }
        if render.svg_id.is_some() {
            config.render.svg_id = render.svg_id;
        }
    }

    Ok(config)
}
