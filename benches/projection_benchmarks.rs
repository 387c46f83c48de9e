//! Criterion benchmarks for the projection hot path.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use contrib_engine::calculation::{evaluate_checks, project, resolve_limits};
use contrib_engine::config::EmployeeConfig;
use contrib_engine::models::Paystub;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn bench_config() -> EmployeeConfig {
    EmployeeConfig {
        age_at_year_end: 52,
        bonus_pretax_rate: dec("0.15"),
        max_match_rate: dec("0.05"),
        prior_year_annual_bonus: dec("11000.00"),
        prior_year_quarterly_bonus: dec("2000.00"),
    }
}

fn bench_paystub() -> Paystub {
    let mut paystub = Paystub::zeroed(NaiveDate::from_ymd_opt(2022, 2, 15).unwrap());
    paystub.current_base_wages = dec("4166.67");
    paystub.ytd_base_wages = dec("12500.01");
    paystub.current_pretax = dec("625.00");
    paystub.ytd_pretax = dec("1875.00");
    paystub.ytd_employer_match = dec("625.00");
    paystub.current_aftertax = dec("500.00");
    paystub.ytd_aftertax = dec("1500.00");
    paystub
}

fn benchmark_limit_resolution(c: &mut Criterion) {
    c.bench_function("resolve_limits", |b| {
        b.iter(|| resolve_limits(black_box(2022), black_box(52)))
    });
}

fn benchmark_full_year_projection(c: &mut Criterion) {
    let paystub = bench_paystub();
    let config = bench_config();

    c.bench_function("project_february_paystub", |b| {
        b.iter(|| project(black_box(&paystub), black_box(&config)))
    });
}

fn benchmark_projection_with_checks(c: &mut Criterion) {
    let paystub = bench_paystub();
    let config = bench_config();

    c.bench_function("project_and_evaluate_checks", |b| {
        b.iter(|| {
            let result = project(black_box(&paystub), black_box(&config)).unwrap();
            evaluate_checks(&result, &config)
        })
    });
}

criterion_group!(
    benches,
    benchmark_limit_resolution,
    benchmark_full_year_projection,
    benchmark_projection_with_checks
);
criterion_main!(benches);
