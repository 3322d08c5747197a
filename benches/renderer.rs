use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rail_network_graph::config::{LayoutConfig, RenderConfig};
use rail_network_graph::layout::{SceneOptions, build_scene};
use rail_network_graph::parser::parse_network;
use rail_network_graph::render::render_svg;
use rail_network_graph::theme::Theme;
use std::hint::black_box;

/// A zig-zag line of `stations` with `extra_edges` chords between stations
/// two or more stops apart.
fn network_source(stations: usize, extra_edges: usize) -> String {
    let mut out = String::from("{ stations: [\n");
    for i in 0..stations {
        let y = if i % 2 == 0 { 0.0 } else { 3.5 };
        out.push_str(&format!(
            "  {{ id: {}, label: \"Stop {}\", x: {}, y: {} }},\n",
            i,
            i,
            i as f64 * 2.5,
            y
        ));
    }
    out.push_str("], edges: [\n");
    for i in 0..stations.saturating_sub(1) {
        out.push_str(&format!("  {{ from: {}, to: {}, label: \"{} km\" }},\n", i, i + 1, i));
    }
    let mut count = 0usize;
    'outer: for i in 0..stations {
        for j in (i + 2)..stations {
            if count >= extra_edges {
                break 'outer;
            }
            out.push_str(&format!("  {{ from: {}, to: {}, width: 3 }},\n", i, j));
            count += 1;
        }
    }
    out.push_str("] }\n");
    out
}

fn fixture(name: &str) -> &'static str {
    match name {
        "diamond" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/diamond.json"
        )),
        "corridor" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/corridor.json5"
        )),
        _ => panic!("unknown fixture {name}"),
    }
}

const SIZES: [(usize, usize); 3] = [(20, 20), (80, 120), (200, 300)];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for name in ["diamond", "corridor"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let graph = parse_network(black_box(data)).expect("parse failed");
                black_box(graph.stations.len());
            });
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    let theme = Theme::console();
    let config = LayoutConfig::default();
    let options = SceneOptions::with_active("1");
    for (stations, extra_edges) in SIZES {
        let name = format!("network_{}_{}", stations, extra_edges);
        let graph = parse_network(&network_source(stations, extra_edges)).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &graph, |b, graph| {
            b.iter(|| {
                let scene = build_scene(black_box(graph), &options, &theme, &config)
                    .expect("layout failed");
                black_box(scene.edges.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::console();
    let config = LayoutConfig::default();
    let render_config = RenderConfig::default();
    for (stations, extra_edges) in SIZES {
        let name = format!("network_{}_{}", stations, extra_edges);
        let graph = parse_network(&network_source(stations, extra_edges)).expect("parse failed");
        let scene = build_scene(&graph, &SceneOptions::default(), &theme, &config)
            .expect("layout failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &scene, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &theme, &render_config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::console();
    let config = LayoutConfig::default();
    let render_config = RenderConfig::default();
    for name in ["diamond", "corridor"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let graph = parse_network(black_box(data)).expect("parse failed");
                let scene = build_scene(&graph, &SceneOptions::default(), &theme, &config)
                    .expect("layout failed");
                let svg = render_svg(&scene, &theme, &render_config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_scene, bench_render, bench_end_to_end
);
criterion_main!(benches);
