use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sierpinski::colors::{BLACK, WHITE};
use sierpinski::fractal::subdivide;
use sierpinski::math::Vec2;
use sierpinski::render::{
    EdgeFunctionRasterizer, Framebuffer, Rasterizer, RasterizerType, Renderer, ScanlineRasterizer,
    Triangle,
};
use sierpinski::RenderConfig;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 700;

fn small_triangle() -> Triangle {
    Triangle::new([
        Vec2::new(100.0, 100.0),
        Vec2::new(120.0, 100.0),
        Vec2::new(110.0, 120.0),
    ])
}

fn medium_triangle() -> Triangle {
    Triangle::new([
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(200.0, 300.0),
    ])
}

fn large_triangle() -> Triangle {
    Triangle::new([
        Vec2::new(50.0, 50.0),
        Vec2::new(750.0, 100.0),
        Vec2::new(400.0, 550.0),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("scanline", name),
            &triangle,
            |b, triangle| {
                let mut buffer = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, WHITE);
                b.iter(|| scanline.fill_triangle(black_box(triangle), &mut buffer, BLACK));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("edge_function", name),
            &triangle,
            |b, triangle| {
                let mut buffer = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, WHITE);
                b.iter(|| edge_fn.fill_triangle(black_box(triangle), &mut buffer, BLACK));
            },
        );
    }

    group.finish();
}

fn benchmark_full_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski_depth_7");
    let config = RenderConfig::default();

    for rasterizer_type in [RasterizerType::Scanline, RasterizerType::EdgeFunction] {
        group.bench_function(rasterizer_type.to_string(), |b| {
            b.iter(|| {
                let mut renderer =
                    Renderer::new(config.width, config.height, config.background_color);
                renderer.set_rasterizer(rasterizer_type);
                let [p1, p2, p3] = config.vertices;
                subdivide(&mut renderer, p1, p2, p3, config.depth, config.fill_color);
                black_box(renderer)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_full_fractal);
criterion_main!(benches);
