use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_ephem::{Body, Ephemeris};
use hd_search::{BirthData, ChartEngine, Deadline, DesignConfig, find_design_instant};
use hd_time::CivilTime;

fn design_bench(c: &mut Criterion) {
    let eph = Ephemeris::default();
    let jd = 2_451_545.0;
    let sun = eph.longitude(Body::Sun, jd).expect("finite epoch");
    let scan = DesignConfig::default();
    let refined = DesignConfig {
        refine_iterations: 30,
        ..DesignConfig::default()
    };

    let mut group = c.benchmark_group("design_instant");
    group.bench_function("scan", |b| {
        b.iter(|| find_design_instant(&eph, black_box(jd), black_box(sun), &scan, Deadline::none()))
    });
    group.bench_function("scan_refined", |b| {
        b.iter(|| {
            find_design_instant(&eph, black_box(jd), black_box(sun), &refined, Deadline::none())
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let engine = ChartEngine::new(Ephemeris::default()).expect("standard tables");
    let a = BirthData::new(
        CivilTime::parse_rfc3339("1985-03-21T06:15:00-05:00").expect("valid timestamp"),
    );
    let b = BirthData::new(
        CivilTime::parse_rfc3339("1990-05-15T14:30:00+02:00").expect("valid timestamp"),
    );

    c.bench_function("compute_chart", |bench| {
        bench.iter(|| engine.compute_chart(black_box(&a)))
    });
    c.bench_function("compute_composite_for", |bench| {
        bench.iter(|| engine.compute_composite_for(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, design_bench, chart_bench);
criterion_main!(benches);
