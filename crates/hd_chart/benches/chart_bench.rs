use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_chart::{ActivationSet, Chart, ChartTables, DefinitionMode, GATE_ORDER, encode, merge};
use hd_ephem::{BodyLongitudes, Ephemeris};

fn encode_bench(c: &mut Criterion) {
    c.bench_function("gate_encode", |b| b.iter(|| encode(black_box(123.456))));
}

fn assemble_bench(c: &mut Criterion) {
    let eph = Ephemeris::default();
    let tables = ChartTables::standard().expect("standard tables");
    let personality: BodyLongitudes = eph.longitudes(2_451_545.0).expect("finite epoch");
    let design: BodyLongitudes = eph.longitudes(2_451_456.0).expect("finite epoch");

    c.bench_function("chart_assemble", |b| {
        b.iter(|| {
            Chart::assemble(
                ActivationSet::from_longitudes(black_box(&personality), &GATE_ORDER),
                ActivationSet::from_longitudes(black_box(&design), &GATE_ORDER),
                &tables,
                DefinitionMode::CenterCount,
            )
        })
    });

    let a = Chart::assemble(
        ActivationSet::from_longitudes(&personality, &GATE_ORDER),
        ActivationSet::from_longitudes(&design, &GATE_ORDER),
        &tables,
        DefinitionMode::CenterCount,
    );
    let b = Chart::assemble(
        ActivationSet::from_longitudes(&design, &GATE_ORDER),
        ActivationSet::from_longitudes(&personality, &GATE_ORDER),
        &tables,
        DefinitionMode::Connectivity,
    );
    c.bench_function("composite_merge", |bench| {
        bench.iter(|| merge(black_box(&a), black_box(&b), 3))
    });
}

criterion_group!(benches, encode_bench, assemble_bench);
criterion_main!(benches);
