use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelzoom::{
    Complex, MandelbrotParams, PlaneRegion, Resolution, build_raster, find_focus, map_to_colour,
    shrink_region,
};

fn reference_params(max_iterations: u32) -> MandelbrotParams {
    let region = PlaneRegion::new(-1.0, 2.0, -1.0, 1.0).unwrap();
    MandelbrotParams::new(region, max_iterations, 2.0).unwrap()
}

fn bench_build_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_raster");
    let resolution = Resolution::new(320, 240).unwrap();

    for max_iterations in [100u32, 400] {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_iterations),
            &max_iterations,
            |b, &max_iterations| {
                let params = reference_params(max_iterations);
                b.iter(|| build_raster(black_box(params), resolution).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_colour_and_focus(c: &mut Criterion) {
    let params = reference_params(100);
    let raster = build_raster(params, Resolution::new(640, 480).unwrap()).unwrap();

    c.bench_function("map_to_colour_640x480", |b| {
        b.iter(|| map_to_colour(black_box(&raster)).unwrap())
    });

    c.bench_function("find_focus_640x480", |b| {
        b.iter(|| find_focus(black_box(&raster), params.region()).unwrap())
    });
}

fn bench_zoom_frames(c: &mut Criterion) {
    c.bench_function("shrink_then_render_10_frames_160x120", |b| {
        let resolution = Resolution::new(160, 120).unwrap();
        let focus = Complex::new(-0.75, 0.1);

        b.iter(|| {
            let mut params = reference_params(100);
            for _ in 0..10 {
                let region = shrink_region(params.region(), focus, 20.0).unwrap();
                params = params.with_frame(region, params.max_iterations()).unwrap();
                let raster = build_raster(params, resolution).unwrap();
                black_box(map_to_colour(&raster).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_build_raster, bench_colour_and_focus, bench_zoom_frames);
criterion_main!(benches);
