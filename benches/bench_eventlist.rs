use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::common::{gen_events, populated};

mod common;

const EVENT_NUMS: usize = 10000;
// plenty of duplicates per year
const YEARS: i32 = 2000;

fn bench_eventlist(c: &mut Criterion) {
    let events = gen_events(EVENT_NUMS, YEARS, 7);

    c.bench_function("eventlist populate", |b| {
        b.iter_batched(
            || events.clone(),
            |events| populated(&events),
            BatchSize::LargeInput,
        );
    });

    let list = populated(&events);

    c.bench_function("eventlist find floor", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let year = rng.gen_range(0..YEARS);
            black_box(list.find_floor(year).len())
        });
    });

    c.bench_function("eventlist find range of 10 years", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| {
            let first = rng.gen_range(0..YEARS);
            black_box(list.find_range(first, first + 10).unwrap().len())
        });
    });

    c.bench_function("eventlist remove every year", |b| {
        b.iter_batched(
            || populated(&events),
            |mut list| {
                for year in 0..YEARS {
                    black_box(list.remove(year));
                }
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_eventlist);
criterion_main!(benches);
