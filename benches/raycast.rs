use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scene_playground::chapters::{Chapter, ChapterId};
use scene_playground::config::PlaygroundConfig;
use scene_playground::core::Viewport;
use scene_playground::math::{intersect_aabb, intersect_sphere};
use scene_playground::render::{shade_ray, RenderEngine, Raycaster};

fn chapter_with_cubes(cubes: usize) -> Chapter {
    let config = PlaygroundConfig {
        chapter: ChapterId::Two,
        initial_cubes: cubes,
        seed: Some(1),
        ..PlaygroundConfig::default()
    };
    Chapter::build(&config, Viewport::new(320, 240).unwrap())
}

/// Benchmark: primitive intersection tests used for every object per ray
fn bench_primitives(c: &mut Criterion) {
    let origin = Vec3::new(0.0, 0.0, -10.0);
    let dir = Vec3::Z;

    c.bench_function("aabb_hit", |b| {
        b.iter(|| {
            black_box(intersect_aabb(
                black_box(origin),
                black_box(dir),
                Vec3::splat(-1.0),
                Vec3::splat(1.0),
            ))
        });
    });

    c.bench_function("sphere_hit", |b| {
        b.iter(|| black_box(intersect_sphere(black_box(origin), black_box(dir), Vec3::ZERO, 1.0)));
    });
}

/// Benchmark: single shaded ray through the basic scene, with shadows and fog
fn bench_shade_ray(c: &mut Criterion) {
    let chapter = chapter_with_cubes(20);
    let camera = &chapter.stage().composition.camera;
    let dir = camera.ray_direction(0.5, 0.5);

    c.bench_function("shade_ray_center", |b| {
        b.iter(|| black_box(shade_ray(chapter.stage(), camera.position, black_box(dir))));
    });
}

/// Benchmark: full frames as the cube count grows
fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    group.sample_size(10);

    for cubes in [0usize, 10, 50].iter() {
        let chapter = chapter_with_cubes(*cubes);
        let mut engine = Raycaster::new(Viewport::new(320, 240).unwrap(), 0.5).unwrap();

        group.bench_with_input(BenchmarkId::new("cubes", cubes), cubes, |b, _| {
            b.iter(|| {
                let stage = chapter.stage();
                engine.render(stage, &stage.composition.camera).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_shade_ray, bench_full_frame);
criterion_main!(benches);
