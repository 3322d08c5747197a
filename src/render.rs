use crate::config::RenderConfig;
use crate::layout::{CANVAS_SIZE, EdgeShape, Glyph, Scene, StationShape, TextShape};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Renders a scene as a standalone SVG document.
///
/// The view box is the normalized `0 0 100 100` canvas; the element fills
/// its container's width unless `config.width` pins it.
pub fn render_svg(scene: &Scene, theme: &Theme, config: &RenderConfig) -> String {
    let mut svg = String::new();
    open_svg(&mut svg, theme, config);

    svg.push_str("<g class=\"edges\">");
    for edge in &scene.edges {
        edge_svg(&mut svg, edge);
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"stations\">");
    for station in &scene.stations {
        station_svg(&mut svg, station);
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

/// Canvas with no primitives, shown when a graph cannot be laid out.
pub fn render_empty_svg(theme: &Theme, config: &RenderConfig) -> String {
    let mut svg = String::new();
    open_svg(&mut svg, theme, config);
    svg.push_str("</svg>");
    svg
}

fn open_svg(svg: &mut String, theme: &Theme, config: &RenderConfig) {
    let width = match config.width {
        Some(width) => format!("{width}"),
        None => "100%".to_string(),
    };
    let height = config.height.max(1.0);
    svg.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");
    if let Some(id) = &config.svg_id {
        svg.push_str(&format!(" id=\"{}\"", escape_xml(id)));
    }
    svg.push_str(&format!(
        " width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {CANVAS_SIZE} {CANVAS_SIZE}\" font-family=\"{}\"",
        escape_xml(&theme.font_family)
    ));
    if let Some(background) = &config.background {
        svg.push_str(&format!(" style=\"background: {}\">", escape_xml(background)));
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{CANVAS_SIZE}\" height=\"{CANVAS_SIZE}\" fill=\"{}\"/>",
            escape_xml(background)
        ));
    } else {
        svg.push('>');
    }
}

fn edge_svg(svg: &mut String, edge: &EdgeShape) {
    svg.push_str("<g>");
    svg.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
        edge.start.x,
        edge.start.y,
        edge.end.x,
        edge.end.y,
        escape_xml(&edge.stroke),
        edge.stroke_width
    ));
    if let Some(label) = &edge.label {
        svg.push_str(&text_svg(label));
    }
    svg.push_str("</g>");
}

fn station_svg(svg: &mut String, station: &StationShape) {
    svg.push_str(&format!(
        "<g data-station=\"{}\">",
        escape_xml(station.id.as_str())
    ));
    match &station.glyph {
        Glyph::Icon {
            href,
            x,
            y,
            width,
            height,
        } => {
            svg.push_str(&format!(
                "<image href=\"{}\" x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\"/>",
                escape_xml(href)
            ));
        }
        Glyph::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{stroke_width:.2}\"/>",
                center.x,
                center.y,
                escape_xml(fill),
                escape_xml(stroke)
            ));
        }
    }
    if let Some(ring) = &station.highlight {
        svg.push_str(&format!(
            "<circle class=\"active\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
            ring.center.x,
            ring.center.y,
            ring.radius,
            escape_xml(&ring.stroke),
            ring.stroke_width
        ));
    }
    svg.push_str(&text_svg(&station.label));
    svg.push_str("</g>");
}

fn text_svg(text: &TextShape) -> String {
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        text.x,
        text.y,
        escape_xml(&text.font_family),
        text.font_size,
        escape_xml(&text.fill),
        escape_xml(&text.content)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

/// Rasterizes an SVG snapshot. `config.width` must be set: a container-relative
/// width has no meaning outside a page.
#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, config: &RenderConfig) -> Result<()> {
    let width = config
        .width
        .ok_or_else(|| anyhow::anyhow!("PNG output needs an explicit pixel width"))?;
    let mut opt = usvg::Options::default();
    opt.font_family = "Arial".to_string();
    opt.fontdb_mut().load_system_fonts();
    if let Some(size) = usvg::Size::from_wh(width, config.height) {
        opt.default_size = size;
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::{SceneOptions, build_scene};
    use crate::samples::diamond;

    fn diamond_svg(options: &SceneOptions, config: &RenderConfig) -> String {
        let theme = Theme::console();
        let scene = build_scene(&diamond(), options, &theme, &LayoutConfig::default()).unwrap();
        render_svg(&scene, &theme, config)
    }

    #[test]
    fn render_svg_basic() {
        let svg = diamond_svg(&SceneOptions::default(), &RenderConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 100 100\""));
        assert!(svg.contains("width=\"100%\" height=\"340\""));
        assert_eq!(svg.matches("<line ").count(), 4);
        assert!(svg.contains("Jejuri"));
        assert!(svg.contains("44 km"));
        assert!(!svg.contains("class=\"active\""));
    }

    #[test]
    fn lines_precede_station_markers() {
        let svg = diamond_svg(&SceneOptions::default(), &RenderConfig::default());
        let last_line = svg.rfind("<line ").unwrap();
        let first_circle = svg.find("<circle ").unwrap();
        assert!(last_line < first_circle);
    }

    #[test]
    fn active_ring_and_surface_attributes() {
        let config = RenderConfig {
            height: 741.0,
            background: Some("wheat".to_string()),
            svg_id: Some("rail-graph-svg".to_string()),
            ..RenderConfig::default()
        };
        let svg = diamond_svg(&SceneOptions::with_active("c"), &config);
        assert_eq!(svg.matches("class=\"active\"").count(), 1);
        assert!(svg.contains("id=\"rail-graph-svg\""));
        assert!(svg.contains("fill=\"wheat\""));
        assert!(svg.contains("height=\"741\""));
    }

    #[test]
    fn escapes_labels() {
        let mut graph = diamond();
        graph.stations[0].label = "A&B <yard>".to_string();
        let theme = Theme::console();
        let scene =
            build_scene(&graph, &SceneOptions::default(), &theme, &LayoutConfig::default()).unwrap();
        let svg = render_svg(&scene, &theme, &RenderConfig::default());
        assert!(svg.contains("A&amp;B &lt;yard&gt;"));
    }

    #[test]
    fn empty_canvas_has_no_primitives() {
        let svg = render_empty_svg(&Theme::console(), &RenderConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<circle"));
    }
}
