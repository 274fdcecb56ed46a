use boolf_interp::{programs, BoolfuckVM, VMBuilder};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn reverse_vm(precompute_jumps: bool) -> BoolfuckVM {
    VMBuilder::new()
        .set_program(programs::REVERSE)
        .set_input(ALPHABET)
        .set_precompute_jumps(precompute_jumps)
        .build()
        .expect("Failed to build VM")
}

fn reverse_benchmark(c: &mut Criterion) {
    c.bench_function("reverse_scan", |b| {
        b.iter(|| {
            let mut vm = reverse_vm(false);
            vm.interpret().expect("Interpretation failed");
            black_box(vm.output_bytes())
        });
    });

    c.bench_function("reverse_jump_table", |b| {
        b.iter(|| {
            let mut vm = reverse_vm(true);
            vm.interpret().expect("Interpretation failed");
            black_box(vm.output_bytes())
        });
    });
}

fn hello_world_benchmark(c: &mut Criterion) {
    c.bench_function("hello_world", |b| {
        b.iter(|| boolf_interp::run(black_box(programs::HELLO_WORLD), b"").expect("Run failed"));
    });
}

criterion_group!(benches, reverse_benchmark, hello_world_benchmark);
criterion_main!(benches);
