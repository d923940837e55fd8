use conway_scan::{Engine, EngineKind, Grid, Pattern};
use criterion::{criterion_group, criterion_main, Criterion};

const SIDE: usize = 256;
const SEED: u64 = 42;
const STEPS: usize = 16;

fn fields() -> [(&'static str, Grid); 2] {
    [
        ("random", Pattern::Random.build(SIDE, Some(SEED))),
        ("glider_gun", Pattern::GliderGun.build(SIDE, None)),
    ]
}

fn engines(c: &mut Criterion) {
    for (name, grid) in fields() {
        for kind in [EngineKind::Pruned, EngineKind::Naive] {
            c.bench_function(&format!("{}_{}", kind, name), |b| {
                b.iter(|| {
                    let mut engine = kind.create(grid.clone());
                    for _ in 0..STEPS {
                        engine.step();
                    }
                    engine.population()
                })
            });
        }
    }
}

criterion_group!(benches, engines);
criterion_main!(benches);
