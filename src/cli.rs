use crate::config::{Config, load_config};
use crate::ir::{NetworkGraph, StationId};
use crate::layout::{SceneOptions, build_scene};
use crate::layout_dump::write_scene_dump;
use crate::parser::parse_network;
use crate::render::{render_svg, write_output_svg};
use crate::samples::{SAMPLE_NAMES, sample_network};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "railgraph", version, about = "Railway network diagram renderer")]
pub struct Args {
    /// Network document (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Render a built-in network instead of reading input
    #[arg(long = "sample")]
    pub sample: Option<String>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, layout and render settings)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Station to highlight
    #[arg(short = 'a', long = "active", conflicts_with = "route")]
    pub active: Option<String>,

    /// Comma-separated station ids; renders one frame per station
    #[arg(long = "route", value_delimiter = ',')]
    pub route: Vec<String>,

    /// Height in pixels
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Width in pixels (required for PNG unless set in the config)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Background colour
    #[arg(long = "background")]
    pub background: Option<String>,

    /// id attribute of the root <svg> element
    #[arg(long = "svg-id")]
    pub svg_id: Option<String>,

    /// Fail when an edge references an unknown station
    #[arg(long = "strict")]
    pub strict: bool,

    /// Write a JSON dump of the computed scene
    #[arg(long = "dump-scene")]
    pub dump_scene: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = apply_overrides(load_config(args.config.as_deref())?, &args);
    let graph = read_graph(&args)?;

    if args.route.is_empty() {
        let options = SceneOptions {
            active_station: args.active.as_deref().map(StationId::from),
        };
        let output = match args.output_format {
            OutputFormat::Svg => args.output.clone(),
            OutputFormat::Png => Some(ensure_output(&args.output, "png")?),
        };
        let frame = Frame {
            output: output.as_deref(),
            dump: args.dump_scene.as_deref(),
        };
        return render_frame(&graph, &options, &config, args.output_format, frame);
    }

    // One frame per route stop, in route order.
    let count = args.route.len();
    let outputs = resolve_frame_outputs(args.output.as_deref(), args.output_format, count)?;
    let dumps: Vec<Option<PathBuf>> = match args.dump_scene.as_deref() {
        Some(path) => resolve_dump_outputs(path, count).into_iter().map(Some).collect(),
        None => vec![None; count],
    };
    for ((stop, output), dump) in args.route.iter().zip(&outputs).zip(&dumps) {
        let options = SceneOptions {
            active_station: Some(StationId::from(stop.as_str())),
        };
        let frame = Frame {
            output: Some(output.as_path()),
            dump: dump.as_deref(),
        };
        render_frame(&graph, &options, &config, args.output_format, frame)?;
    }
    Ok(())
}

/// Destinations of one rendered frame.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    output: Option<&'a Path>,
    dump: Option<&'a Path>,
}

fn render_frame(
    graph: &NetworkGraph,
    options: &SceneOptions,
    config: &Config,
    format: OutputFormat,
    frame: Frame<'_>,
) -> Result<()> {
    let scene = build_scene(graph, options, &config.theme, &config.layout)?;
    for diagnostic in &scene.diagnostics {
        log::info!("{diagnostic}");
    }
    if let Some(path) = frame.dump {
        write_scene_dump(path, &scene)?;
    }
    let svg = render_svg(&scene, &config.theme, &config.render);
    match format {
        OutputFormat::Svg => write_output_svg(&svg, frame.output),
        OutputFormat::Png => write_png(&svg, frame.output, config),
    }
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: Option<&Path>, config: &Config) -> Result<()> {
    let output = output.ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
    crate::render::write_output_png(svg, output, &config.render)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: Option<&Path>, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if args.width.is_some() {
        config.render.width = args.width;
    }
    if args.background.is_some() {
        config.render.background = args.background.clone();
    }
    if args.svg_id.is_some() {
        config.render.svg_id = args.svg_id.clone();
    }
    if args.strict {
        config.layout.strict_edges = true;
    }
    if args.output_format == OutputFormat::Png && config.render.width.is_none() {
        config.render.width = Some(1200.0);
    }
    config
}

fn read_graph(args: &Args) -> Result<NetworkGraph> {
    if let Some(name) = &args.sample {
        return sample_network(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown sample `{}` (available: {})",
                name,
                SAMPLE_NAMES.join(", ")
            )
        });
    }
    let input = read_input(args.input.as_deref())?;
    Ok(parse_network(&input)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!(
        "Output path required for {} output",
        ext
    ))
}

fn resolve_frame_outputs(
    output: Option<&Path>,
    format: OutputFormat,
    count: usize,
) -> Result<Vec<PathBuf>> {
    let ext = match format {
        OutputFormat::Svg => "svg",
        OutputFormat::Png => "png",
    };
    let base = output.ok_or_else(|| anyhow::anyhow!("Output path required for route frames"))?;
    if base.is_dir() {
        let mut outputs = Vec::new();
        for idx in 0..count {
            outputs.push(base.join(format!("frame-{:03}.{}", idx + 1, ext)));
        }
        return Ok(outputs);
    }
    Ok(numbered_paths(base, ext, count))
}

/// Scene dump paths for route frames, numbered alongside the frame outputs.
fn resolve_dump_outputs(base: &Path, count: usize) -> Vec<PathBuf> {
    let ext = base.extension().and_then(|s| s.to_str()).unwrap_or("json");
    numbered_paths(base, ext, count)
}

fn numbered_paths(base: &Path, ext: &str, count: usize) -> Vec<PathBuf> {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let parent = base.parent().unwrap_or_else(|| Path::new("."));
    (0..count)
        .map(|idx| parent.join(format!("{}-{:03}.{}", stem, idx + 1, ext)))
        .collect()
}
