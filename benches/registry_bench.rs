use {
    criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main},
    dashtheme::{
        controller::{ThemeController, resolver::resolve_initial_theme},
        storage::MemoryStore,
        surface::RootElement,
        theme::registry::ThemeRegistry,
    },
    std::{hint::black_box, sync::Arc, time::Duration},
};

fn bench_registry(c: &mut Criterion) {
    let registry = ThemeRegistry::new();
    let mut group = c.benchmark_group("registry");

    for id in ["light", "contrast", "retro"] {
        group.bench_with_input(BenchmarkId::new("is_valid", id), id, |b, id| {
            b.iter(|| registry.is_valid(black_box(id)))
        });

        group.bench_with_input(BenchmarkId::new("is_premium", id), id, |b, id| {
            b.iter(|| registry.is_premium(black_box(id)))
        });
    }

    group.bench_function("marker_classes", |b| b.iter(|| registry.marker_classes()));
    group.bench_function("stylesheet", |b| b.iter(|| registry.stylesheet()));

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let registry = ThemeRegistry::new();
    let mut group = c.benchmark_group("resolver");

    for stored in [None, Some("neon"), Some("retro")] {
        let name = stored.unwrap_or("none");

        group.bench_with_input(BenchmarkId::new("resolve", name), &stored, |b, stored| {
            b.iter(|| resolve_initial_theme(&registry, black_box(*stored), black_box(true)))
        });
    }

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let registry = Arc::new(ThemeRegistry::new());
    let mut group = c.benchmark_group("controller");

    group.bench_function("set/cycle", |b| {
        b.iter_batched(
            || {
                let mut ctl = ThemeController::new(
                    Arc::clone(&registry),
                    RootElement::new(),
                    Box::new(MemoryStore::new()),
                );
                ctl.init(false, false);
                ctl
            },
            |mut ctl| {
                for id in ["dark", "space", "neon", "contrast", "light"] {
                    black_box(ctl.set(id, true));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .sample_size(200);
    targets = bench_registry, bench_resolver, bench_controller
}

criterion_main!(benches);
