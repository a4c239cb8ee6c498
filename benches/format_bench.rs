use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use rechnungswesen::core::*;

fn bench_format_currency(c: &mut Criterion) {
    let config = DomainConfig::default_german();
    c.bench_function("format_currency", |b| {
        b.iter(|| black_box(format_currency(black_box(dec!(1234567.891)), &config)));
    });
}

fn bench_parse_currency(c: &mut Criterion) {
    let config = DomainConfig::default_german();
    c.bench_function("parse_currency", |b| {
        b.iter(|| black_box(parse_currency(black_box("-1.234.567,89 €"), &config)));
    });
}

fn bench_format_date(c: &mut Criterion) {
    let config = DomainConfig::default_german();
    let value = NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    c.bench_function("format_date_long", |b| {
        b.iter(|| black_box(format_date(black_box(&value), DateFormatKind::Long, &config)));
    });
}

fn bench_resolve(c: &mut Criterion) {
    let config = DomainConfig::default_german();
    c.bench_function("resolve_unit", |b| {
        b.iter(|| black_box(config.resolve(Vocabulary::Units, black_box("Pauschal")).is_ok()));
    });
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_defaults", |b| {
        b.iter(|| black_box(DomainConfig::load(ConfigOverrides::new())));
    });
}

criterion_group!(
    benches,
    bench_format_currency,
    bench_parse_currency,
    bench_format_date,
    bench_resolve,
    bench_load,
);
criterion_main!(benches);
