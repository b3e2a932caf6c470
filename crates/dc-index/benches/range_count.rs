use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dc_index::{build, CountKind, IndexBuilder};
use dc_time::{Date, DayType, OverrideCalendar};

fn overrides() -> OverrideCalendar {
    let festivals = [
        "20200101", "20200124", "20200127", "20200128", "20200404", "20200501", "20200625",
        "20201001", "20201002", "20201005", "20201006", "20201007",
    ];
    OverrideCalendar::from_overrides(
        "bench",
        festivals
            .iter()
            .map(|d| (Date::parse_compact(d).unwrap(), DayType::Festival)),
    )
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let cal = overrides();

    group.bench_function("one_year", |b| {
        b.iter(|| build(black_box(2020), black_box(2020), &cal).unwrap())
    });

    group.bench_function("2016_2026", |b| {
        b.iter(|| build(black_box(2016), black_box(2026), &cal).unwrap())
    });
}

fn bench_count(c: &mut Criterion) {
    let cal = overrides();
    let index = IndexBuilder::new(2016, 2026)
        .with_calendar(&cal)
        .build()
        .unwrap();

    let ranges = [
        ("same_year", "20200115", "20201115"),
        ("year_boundary", "20191228", "20200106"),
        ("ten_years", "20160101", "20261231"),
    ];

    let mut group = c.benchmark_group("count");
    for (name, start, end) in ranges {
        group.bench_function(name, |b| {
            b.iter(|| {
                index
                    .count(black_box(CountKind::Workday), black_box(start), black_box(end))
                    .unwrap()
            })
        });
    }
}

fn bench_lookup(c: &mut Criterion) {
    let index = IndexBuilder::new(2016, 2026).build().unwrap();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("day", |b| {
        b.iter(|| index.day_type_of(black_box("20200229")).unwrap())
    });
    group.bench_function("month", |b| {
        b.iter(|| index.day_types_for_month(black_box("202002")).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_count, bench_lookup);
criterion_main!(benches);
