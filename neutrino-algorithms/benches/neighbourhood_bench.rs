use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neutrino_algorithms::{
    neighbourhood::{build_neighbour_graph, NeighbourhoodParams},
    progress::SilentProgress,
    simplex::SimplexTable,
};
use neutrino_core::mesh::{element_types, primitives};

fn bench(c: &mut Criterion) {
    let small = primitives::triangle_grid(32, 32, 1.0);
    let big = primitives::triangle_grid(256, 256, 1.0);
    let params = NeighbourhoodParams::default();

    let mut group = c.benchmark_group("neighbour_graph");
    for (name, mesh) in [("grid_32", &small), ("grid_256", &big)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let graph = build_neighbour_graph(
                    mesh,
                    primitives::DOMAIN_GROUP,
                    2,
                    element_types::TRIANGLE_3,
                    &params,
                    &mut SilentProgress,
                )
                .unwrap();
                black_box(graph);
            });
        });
    }
    group.finish();

    c.bench_function("simplex_table_grid_256", |b| {
        b.iter(|| black_box(SimplexTable::from_mesh(&big).unwrap()));
    });
}

criterion_group! {
    name = neighbourhood;
    config = Criterion::default().sample_size(20);
    targets = bench
}
criterion_main!(neighbourhood);
