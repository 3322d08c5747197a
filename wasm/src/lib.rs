use rail_network_graph::{RenderOptions, SceneOptions, StationId, render_document};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkRenderOptions {
    theme: Option<String>,
    height: Option<f32>,
    background_color: Option<String>,
    svg_id: Option<String>,
    active_station_id: Option<serde_json::Value>,
    strict_edges: Option<bool>,
}

fn build_render_options(options: &NetworkRenderOptions) -> RenderOptions {
    let mut render_options = if matches!(options.theme.as_deref(), Some("night" | "dark")) {
        RenderOptions::night()
    } else {
        RenderOptions::console()
    };

    if let Some(height) = options.height {
        render_options.render.height = height;
    }
    if let Some(background) = &options.background_color {
        render_options.render.background = Some(background.clone());
    }
    if let Some(svg_id) = &options.svg_id {
        render_options.render.svg_id = Some(svg_id.clone());
    }
    if let Some(strict) = options.strict_edges {
        render_options.layout.strict_edges = strict;
    }

    render_options
}

fn build_scene_options(options: &NetworkRenderOptions) -> SceneOptions {
    let active_station = match &options.active_station_id {
        Some(serde_json::Value::String(id)) => Some(StationId::from(id.as_str())),
        Some(serde_json::Value::Number(id)) => Some(StationId::from(id.to_string())),
        _ => None,
    };
    SceneOptions { active_station }
}

/// Renders a network document (`{stations, edges}`) to SVG markup.
#[wasm_bindgen]
pub fn render_network_svg(graph: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<NetworkRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        NetworkRenderOptions::default()
    };

    render_document(
        graph,
        &build_scene_options(&options),
        &build_render_options(&options),
    )
    .map_err(|error| JsValue::from_str(&error.to_string()))
}
