mod perf;

use constellation::{Bounds, Parameters, RecordingSurface, Simulation, presets};
use criterion::{Criterion, criterion_group, criterion_main};

const BOUNDS: Bounds = Bounds::new(1280.0, 720.0);

fn bench_frame(c: &mut Criterion) {
    let mut sim = Simulation::new(BOUNDS, Parameters::default().with_seed(1));
    let mut surface = RecordingSurface::default();

    c.bench_function("frame_300", |b| {
        b.iter(|| {
            surface.clear_commands();
            sim.advance_frame(&mut surface)
        })
    });
}

fn bench_frame_dense(c: &mut Criterion) {
    let mut sim = Simulation::new(BOUNDS, presets::dense_swarm().with_seed(1));
    let mut surface = RecordingSurface::default();

    c.bench_function("frame_600_dense", |b| {
        b.iter(|| {
            surface.clear_commands();
            sim.advance_frame(&mut surface)
        })
    });
}

fn bench_seed(c: &mut Criterion) {
    let params = presets::spaced_swarm().with_seed(1);
    c.bench_function("seed_300_spaced", |b| {
        b.iter(|| Simulation::new(BOUNDS, params.clone()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(perf::FlamegraphProfiler::new(100));
    targets = bench_frame, bench_frame_dense, bench_seed
}
criterion_main!(benches);
