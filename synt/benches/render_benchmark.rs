// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkId,
    Criterion, Throughput,
};
use itertools::Itertools;
use rayon::prelude::*;

use synt::prelude::*;

const FUNCTIONS: usize = 200;

/// One function per index, each exercising a mix of statements and nested operators.
fn build_function(i: usize) -> synt::Result<Statement> {
    let x = || id_("x");
    let acc = || id_("acc");
    let name = id_(format!("compute_{}", i))?;
    let body = stmts![
        acc()?.assign(litint(0)),
        for_(x()?)
            .in_(id_("range")?.call([litint(i as i64)]))
            .block(stmts![if_(x()?.mod_(litint(2)).eq(litint(0)))
                .block(stmts![acc()?.assign(acc()?.add(x()?.pow(litint(2))))])
                .else_(stmts![acc()?.assign(acc()?.sub(x()?).mul(litint(3)))])])?,
        return_(
            list_comp(
                acc()?
                    .add(id_("y")?)
                    .for_([id_("y")?])
                    .in_(id_("values")?)
                    .if_(id_("y")?.gt(litint(0)).bool_and(id_("y")?.lt(acc()?))),
            )?
        ),
    ];
    Ok(def_(name)
        .arg(arg(id_("values")?).ty(id_("list")?.subscribe([id_("int")?])))
        .returns(id_("list")?.subscribe([id_("int")?]))
        .block(body)?
        .into())
}

fn build_program() -> synt::Result<File> {
    (0..FUNCTIONS).map(build_function).collect()
}

pub fn build_benchmarks<T: Measurement>(c: &mut Criterion<T>) {
    let mut group = c.benchmark_group("build");
    group.bench_function("all", |b| b.iter(|| black_box(build_program())));
    group.finish();
}

pub fn render_benchmarks<T: Measurement>(c: &mut Criterion<T>) {
    let program = build_program().expect("building program");
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(FUNCTIONS as u64));
    group.bench_function("all", |b| b.iter(|| black_box(program.into_str("    ", 0))));
    group.finish();
}

pub fn render_multithreaded_benchmarks<T: Measurement + std::marker::Sync>(c: &mut Criterion<T>)
where
    <T as Measurement>::Value: Send,
{
    let program = build_program().expect("building program");
    let mut group = c.benchmark_group("render_parallel");
    group.measurement_time(Duration::from_secs(10));

    for thread_count in 1..5 {
        let programs = (0..thread_count).map(|_| program.clone()).collect_vec();
        group.throughput(Throughput::Elements((programs.len() * FUNCTIONS) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(thread_count),
            &thread_count,
            |b, thread_count| {
                let thread_pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*thread_count)
                    .build()
                    .unwrap();
                thread_pool.install(|| {
                    b.iter_with_large_drop(|| {
                        programs
                            .par_iter()
                            .map(|p| black_box(p.into_str("    ", 0)))
                            .collect::<Vec<_>>()
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    name=benches;
    config=Criterion::default();
    targets=build_benchmarks, render_benchmarks, render_multithreaded_benchmarks
);
criterion_main!(benches);
