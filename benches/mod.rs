use criterion::{criterion_group, criterion_main};

mod menu;

criterion_group!(
    benches,
    menu::poll::bench_idle_poll,
    menu::poll::bench_browse,
    menu::poll::bench_edit_integer,
    menu::poll::bench_edit_engineering
);
criterion_main!(benches);
