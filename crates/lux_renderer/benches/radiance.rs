use criterion::*;
use lux_renderer::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_radiance(c: &mut Criterion) {
    let mut group = c.benchmark_group("benchmark-radiance");

    let config = RenderConfig::default();
    let camera = Camera::from_config(&config).with_resolution(64, 48);

    for geometry in [SceneGeometry::Spheres, SceneGeometry::Triangles] {
        let scene = cornell::scene(geometry, true).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        group.bench_function(format!("center_pixel_{geometry:?}"), |b| {
            b.iter(|| render_pixel(&camera, &scene, 32, 24, black_box(&config), &mut rng))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("benchmark-render");

    let config = RenderConfig {
        samples_per_pixel: 1,
        image_width: 64,
        image_height: 48,
        ..RenderConfig::default()
    };
    let camera = Camera::from_config(&config);
    let scene = cornell::scene(config.geometry, config.interior).unwrap();

    group.sampling_mode(SamplingMode::Flat).sample_size(10);
    group.bench_function("bench_render", |b| {
        b.iter(|| render(&scene, &camera, &config).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_radiance, bench_render);
criterion_main!(benches);
