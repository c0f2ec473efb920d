use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use tether::{create_binding, Store};

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| {
            let store: Store<i32> = Store::new(black_box(42));
            store
        });
    });
}

fn store_read_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(42);

    c.bench_function("store_read", |b| {
        b.iter(|| {
            black_box(store.get_state());
        });
    });
}

fn store_write_benchmark(c: &mut Criterion) {
    let store: Store<i32> = Store::new(0);

    c.bench_function("store_write", |b| {
        let mut i = 0;
        b.iter(|| {
            store.set(black_box(i));
            i += 1;
        });
    });
}

fn store_functional_write_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        counter: usize,
        name: String,
    }

    let store = Store::new(State {
        counter: 0,
        name: "test".to_string(),
    });

    c.bench_function("store_functional_write", |b| {
        let mut i = 0;
        b.iter(|| {
            store.update(|mut state| {
                state.counter = black_box(i);
                state
            });
            i += 1;
        });
    });
}

fn notify_fanout_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        value: usize,
    }

    let mut group = c.benchmark_group("notify_fanout");

    for listener_count in [1, 10, 100].iter() {
        let store = Store::new(State { value: 0 });

        let mut subscriptions = Vec::new();
        for _ in 0..*listener_count {
            subscriptions.push(store.subscribe(|| {
                // Empty listener
            }));
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(listener_count),
            listener_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.update(|mut state| {
                        state.value = black_box(i);
                        state
                    });
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn binding_recompute_benchmark(c: &mut Criterion) {
    #[derive(Clone, PartialEq)]
    struct State {
        count: i32,
        text: String,
    }

    let store = Store::new(State {
        count: 0,
        text: "bench".to_string(),
    });
    let binding = create_binding(&store, |state: &State| state.count, || {});

    c.bench_function("binding_recompute", |b| {
        let mut i = 0;
        b.iter(|| {
            store.update(|mut state| {
                state.count = black_box(i);
                state
            });
            i += 1;
        });
    });

    black_box(binding.value());
}

criterion_group!(
    benches,
    store_creation_benchmark,
    store_read_benchmark,
    store_write_benchmark,
    store_functional_write_benchmark,
    notify_fanout_benchmark,
    binding_recompute_benchmark,
);
criterion_main!(benches);
